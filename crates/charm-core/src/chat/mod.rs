//! Mock chat domain module.
//!
//! - `message`: chat messages and their sender
//! - `session`: a conversation with one character
//! - `responses`: the category-keyed canned response table and reply delay

mod message;
mod responses;
mod session;

pub use message::{ChatMessage, MessageSender};
pub use responses::{DEFAULT_RESPONSE_KEY, ReplyDelay, ResponseTable};
pub use session::ChatSession;

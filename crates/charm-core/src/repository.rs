//! Repository trait re-exports.

pub use crate::character::CharacterRepository;

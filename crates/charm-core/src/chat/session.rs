//! A chat session with a single character.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::{ChatMessage, MessageSender};
use crate::character::Character;

/// Conversation state for one opened chat screen.
///
/// The session owns a copy of the character so interaction counts can grow
/// without touching the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub character: Character,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    /// Set while a reply is being "typed"
    #[serde(default)]
    pub typing: bool,
}

impl ChatSession {
    /// Opens a session, seeding the greeting as the first message when the
    /// character has one.
    pub fn open(character: Character) -> Self {
        let messages = character
            .greeting
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(|g| vec![ChatMessage::from_character(g)])
            .unwrap_or_default();

        Self {
            id: Uuid::new_v4().to_string(),
            character,
            messages,
            created_at: Utc::now(),
            typing: false,
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::from_user(content))
    }

    /// Appends a character reply and counts it as one interaction.
    pub fn push_reply(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.character = self.character.with_interaction();
        self.push(ChatMessage::from_character(content))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        // Just pushed, never empty
        &self.messages[self.messages.len() - 1]
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn count_by(&self, sender: MessageSender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }
}

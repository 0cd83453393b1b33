//! Character domain model.
//!
//! A character is a persona shown in the catalog and addressed in the mock
//! chat screen.

use serde::{Deserialize, Serialize};

/// Image used when a created character has no uploaded avatar.
pub const DEFAULT_IMAGE_URL: &str = "/default-avatar.jpg";

/// Represents the source of a character (built-in or user-created).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSource {
    /// Built-in catalog characters
    System,
    /// Characters created through the create operation
    #[default]
    User,
}

/// Whether a created character is listed publicly.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// A persona record rendered in the catalog.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique identifier (numeric strings, slugs, or UUIDs)
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown on cards
    #[serde(default)]
    pub description: String,
    /// Avatar image location
    pub image_url: String,
    /// Team or user that authored the character
    pub creator: String,
    /// Number of chat interactions
    #[serde(default)]
    pub interactions: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// First message shown when a chat is opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub source: CharacterSource,
}

impl Character {
    /// Case-insensitive category comparison. A character without a category
    /// never matches.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == category.to_lowercase())
    }

    /// Returns a copy with the interaction count bumped by one.
    pub fn with_interaction(&self) -> Self {
        Self {
            interactions: self.interactions.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn is_user_created(&self) -> bool {
        self.source == CharacterSource::User
    }
}

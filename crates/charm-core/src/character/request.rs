//! Character creation request model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Character, CharacterSource, DEFAULT_IMAGE_URL, Visibility};
use crate::category::canonical_category;
use crate::error::{CharmError, Result};

const MAX_NAME_LEN: usize = 64;

/// Creator recorded on every user-created character.
pub const USER_CREATOR: &str = "User";

/// Request to create a new character.
///
/// Used by both the HTTP create endpoint and `charm create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    /// Display name (required)
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    /// Greeting shown as the first chat message
    #[serde(default)]
    pub greeting: String,

    /// Personality and capabilities (required)
    pub description: String,

    #[serde(default)]
    pub visibility: Visibility,

    /// Category (required)
    #[serde(default)]
    pub category: String,

    /// Uploaded avatar, usually a data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateCharacterRequest {
    /// Validate the request.
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CharmError::validation(
                "Name is required and cannot be empty",
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CharmError::validation(format!(
                "Name must be at most {} characters long",
                MAX_NAME_LEN
            )));
        }

        if self.description.trim().is_empty() {
            return Err(CharmError::validation(
                "Description is required and cannot be empty",
            ));
        }

        if self.category.trim().is_empty() {
            return Err(CharmError::validation("Category is required"));
        }
        if canonical_category(&self.category).is_none() {
            return Err(CharmError::validation(format!(
                "Unknown category '{}'",
                self.category.trim()
            )));
        }

        Ok(())
    }

    /// Convert this request into a user character, always generating a new UUID.
    ///
    /// Call [`validate`](Self::validate) first; an unknown category is kept
    /// as typed.
    pub fn into_character(self) -> Character {
        let category = canonical_category(&self.category)
            .map(str::to_string)
            .unwrap_or_else(|| self.category.trim().to_string());

        Character {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: self
                .image_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            creator: USER_CREATOR.to_string(),
            interactions: 0,
            category: Some(category),
            greeting: non_blank(self.greeting),
            tagline: non_blank(self.tagline),
            visibility: self.visibility,
            source: CharacterSource::User,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//! Character repository trait.
//!
//! Defines the interface for persisting user-created characters.

use super::model::Character;
use crate::error::Result;

/// An abstract repository for user-created characters.
///
/// Built-in characters never go through a repository; implementations only
/// hold what the create operation produced.
#[async_trait::async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Retrieves all stored characters in insertion order.
    async fn get_all(&self) -> Result<Vec<Character>>;

    /// Saves all characters to storage, replacing existing ones.
    async fn save_all(&self, characters: &[Character]) -> Result<()>;

    /// Appends a single character.
    ///
    /// The default implementation is a read-modify-write over `get_all` and
    /// `save_all`; file-backed implementations override it to hold a lock
    /// across the whole cycle.
    async fn append(&self, character: Character) -> Result<()> {
        let mut all = self.get_all().await?;
        all.push(character);
        self.save_all(&all).await
    }
}

//! In-memory CharacterRepository, used by tests and ephemeral servers.

use charm_core::character::Character;
use charm_core::error::Result;
use charm_core::repository::CharacterRepository;
use tokio::sync::RwLock;

/// Keeps user characters for the lifetime of the process only.
#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: RwLock<Vec<Character>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_characters(characters: Vec<Character>) -> Self {
        Self {
            characters: RwLock::new(characters),
        }
    }
}

#[async_trait::async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn get_all(&self) -> Result<Vec<Character>> {
        Ok(self.characters.read().await.clone())
    }

    async fn save_all(&self, characters: &[Character]) -> Result<()> {
        *self.characters.write().await = characters.to_vec();
        Ok(())
    }

    async fn append(&self, character: Character) -> Result<()> {
        self.characters.write().await.push(character);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charm_core::character::default_characters;

    #[tokio::test]
    async fn test_append_and_replace() {
        let repo = InMemoryCharacterRepository::new();
        assert!(repo.get_all().await.unwrap().is_empty());

        let catalog = default_characters();
        repo.append(catalog[0].clone()).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 1);

        repo.save_all(&catalog[1..3]).await.unwrap();
        let stored = repo.get_all().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, catalog[1].id);
    }
}

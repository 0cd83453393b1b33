use std::sync::Arc;

use charm_core::character::{Character, CreateCharacterRequest};
use charm_core::error::Result;
use charm_core::repository::CharacterRepository;

/// Creates and lists user-made characters.
pub struct CharacterService {
    repository: Arc<dyn CharacterRepository>,
}

impl CharacterService {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Validates the request and appends the new character to the store.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(&self, request: CreateCharacterRequest) -> Result<Character> {
        request.validate()?;
        let character = request.into_character();
        self.repository.append(character.clone()).await?;

        tracing::info!(
            id = %character.id,
            name = %character.name,
            category = ?character.category,
            "Created character"
        );
        Ok(character)
    }

    /// User-created characters in creation order.
    pub async fn list_created(&self) -> Result<Vec<Character>> {
        self.repository.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charm_core::character::{CharacterSource, DEFAULT_IMAGE_URL, Visibility};
    use charm_infrastructure::{InMemoryCharacterRepository, JsonCharacterRepository};
    use tempfile::TempDir;

    fn request() -> CreateCharacterRequest {
        CreateCharacterRequest {
            name: "  Captain Pun  ".to_string(),
            tagline: "Wordplay on demand".to_string(),
            greeting: "".to_string(),
            description: "Turns every sentence into a joke.".to_string(),
            visibility: Visibility::Private,
            category: "humour".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_stores_normalized_character() {
        let repo = Arc::new(InMemoryCharacterRepository::new());
        let service = CharacterService::new(repo.clone());

        let created = service.create(request()).await.unwrap();
        assert_eq!(created.name, "Captain Pun");
        assert_eq!(created.category.as_deref(), Some("Humour"));
        assert_eq!(created.creator, "User");
        assert_eq!(created.interactions, 0);
        assert_eq!(created.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(created.greeting, None);
        assert_eq!(created.visibility, Visibility::Private);
        assert_eq!(created.source, CharacterSource::User);

        assert_eq!(repo.get_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_invalid_request_writes_nothing() {
        let repo = Arc::new(InMemoryCharacterRepository::new());
        let service = CharacterService::new(repo.clone());

        let mut missing_name = request();
        missing_name.name = "   ".to_string();
        assert!(service.create(missing_name).await.unwrap_err().is_validation());

        let mut unknown_category = request();
        unknown_category.category = "Gardening".to_string();
        assert!(
            service
                .create(unknown_category)
                .await
                .unwrap_err()
                .is_validation()
        );

        assert!(service.list_created().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_created_characters_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();

        let first = CharacterService::new(Arc::new(
            JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap(),
        ));
        let a = first.create(request()).await.unwrap();
        let mut second_request = request();
        second_request.name = "Trivia Tom".to_string();
        second_request.category = "Riddles".to_string();
        let b = first.create(second_request).await.unwrap();

        let reopened = CharacterService::new(Arc::new(
            JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap(),
        ));
        let ids: Vec<String> = reopened
            .list_created()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }
}

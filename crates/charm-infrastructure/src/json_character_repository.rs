//! JSON-file CharacterRepository implementation.
//!
//! All user-created characters live in one JSON array, mirroring the
//! browser `characters` storage key the web client used.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use charm_core::character::Character;
use charm_core::error::{CharmError, Result};
use charm_core::repository::CharacterRepository;

use crate::paths::CharmPaths;
use crate::storage::AtomicJsonFile;

/// File-backed character repository.
///
/// ```text
/// data_dir/
/// └── characters.json   # [ { "id": ..., "name": ... }, ... ]
/// ```
pub struct JsonCharacterRepository {
    file: Arc<AtomicJsonFile<Vec<Character>>>,
}

impl JsonCharacterRepository {
    /// Repository under `data_dir`, or the platform default when `None`.
    pub fn in_dir(data_dir: Option<&Path>) -> Result<Self> {
        let path = CharmPaths::new(data_dir).characters_file()?;
        Ok(Self::with_path(path))
    }

    /// Repository on an explicit file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        tracing::debug!(path = %path.display(), "Using character store");
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Runs blocking file work off the async executor.
    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&AtomicJsonFile<Vec<Character>>) -> Result<T> + Send + 'static,
    {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || f(&file))
            .await
            .map_err(|e| CharmError::internal(format!("storage task failed: {e}")))?
    }
}

#[async_trait::async_trait]
impl CharacterRepository for JsonCharacterRepository {
    async fn get_all(&self) -> Result<Vec<Character>> {
        self.blocking(|file| Ok(file.load()?.unwrap_or_default()))
            .await
    }

    async fn save_all(&self, characters: &[Character]) -> Result<()> {
        let characters = characters.to_vec();
        self.blocking(move |file| {
            file.update(Vec::new(), |stored| {
                *stored = characters;
                Ok(())
            })?;
            Ok(())
        })
        .await
    }

    async fn append(&self, character: Character) -> Result<()> {
        self.blocking(move |file| {
            file.update(Vec::new(), |stored| {
                stored.push(character);
                Ok(())
            })?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charm_core::character::{CharacterSource, CreateCharacterRequest, Visibility};
    use tempfile::TempDir;

    fn request(name: &str) -> CreateCharacterRequest {
        CreateCharacterRequest {
            name: name.to_string(),
            description: format!("{name} likes puzzles"),
            category: "Riddles".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap();

        repo.append(request("First").into_character()).await.unwrap();
        repo.append(request("Second").into_character()).await.unwrap();

        let stored = repo.get_all().await.unwrap();
        let names: Vec<&str> = stored.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(stored.iter().all(|c| c.source == CharacterSource::User));
    }

    #[tokio::test]
    async fn test_save_all_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap();

        repo.append(request("Old").into_character()).await.unwrap();
        let mut replacement = request("New").into_character();
        replacement.visibility = Visibility::Private;
        repo.save_all(&[replacement.clone()]).await.unwrap();

        let stored = repo.get_all().await.unwrap();
        assert_eq!(stored, vec![replacement]);
    }

    #[tokio::test]
    async fn test_file_is_a_plain_json_array() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap();
        repo.append(request("Quiz Bot").into_character()).await.unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["name"], "Quiz Bot");
        assert_eq!(array[0]["creator"], "User");
        assert_eq!(array[0]["imageUrl"], "/default-avatar.jpg");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_all_stored() {
        let temp_dir = TempDir::new().unwrap();
        let total = 200;

        let mut tasks = Vec::new();
        for i in 0..total {
            // Half share one repository, half open their own like a second process
            let repo = if i % 2 == 0 {
                JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap()
            } else {
                JsonCharacterRepository::with_path(temp_dir.path().join("characters.json"))
            };
            tasks.push(tokio::spawn(async move {
                repo.append(request(&format!("Bot {i}")).into_character())
                    .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let repo = JsonCharacterRepository::in_dir(Some(temp_dir.path())).unwrap();
        let stored = repo.get_all().await.unwrap();
        assert_eq!(stored.len(), total);

        let mut names: Vec<String> = stored.into_iter().map(|c| c.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[tokio::test]
    async fn test_corrupt_file_surfaces_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("characters.json");
        std::fs::write(&path, "[{").unwrap();
        let repo = JsonCharacterRepository::with_path(path);

        let err = repo.get_all().await.unwrap_err();
        assert!(matches!(err, CharmError::Serialization { .. }));
    }
}

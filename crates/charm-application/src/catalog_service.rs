use std::sync::Arc;

use charm_core::catalog::CatalogFilter;
use charm_core::category::{Category, catalog_categories};
use charm_core::character::{Character, default_characters, featured_characters};
use charm_core::error::{CharmError, Result};
use charm_core::repository::CharacterRepository;

/// Read side of the catalog.
///
/// The visible catalog is the built-in list followed by user-created
/// characters in creation order. Built-in ids win on lookup.
pub struct CatalogService {
    repository: Arc<dyn CharacterRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Every character, built-in first.
    pub async fn all(&self) -> Result<Vec<Character>> {
        let mut characters = default_characters();
        characters.extend(self.repository.get_all().await?);
        Ok(characters)
    }

    pub async fn list(&self, filter: &CatalogFilter) -> Result<Vec<Character>> {
        let characters = self.all().await?;
        let filtered = filter.apply(&characters);
        tracing::debug!(
            category = ?filter.category,
            query = ?filter.query,
            total = characters.len(),
            matched = filtered.len(),
            "Filtered catalog"
        );
        Ok(filtered)
    }

    pub async fn get(&self, id: &str) -> Result<Character> {
        self.all()
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CharmError::not_found("character", id))
    }

    pub fn featured(&self) -> Vec<Character> {
        featured_characters()
    }

    pub fn categories(&self) -> Vec<Category> {
        catalog_categories()
    }
}

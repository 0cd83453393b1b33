//! Catalog filtering: category selection plus free-text search.

use serde::{Deserialize, Serialize};

use crate::category::is_all;
use crate::character::Character;

/// Filters applied to the character list.
///
/// Both criteria must hold. An absent, blank or `all` category and an
/// absent or blank query each match every character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "q")]
    pub query: Option<String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !is_all(c))
    }

    fn active_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// True when neither criterion restricts the list.
    pub fn is_unrestricted(&self) -> bool {
        self.active_category().is_none() && self.active_query().is_none()
    }

    pub fn matches(&self, character: &Character) -> bool {
        let category_ok = self
            .active_category()
            .is_none_or(|category| character.matches_category(category));
        if !category_ok {
            return false;
        }

        match self.active_query() {
            None => true,
            Some(query) => {
                character.name.to_lowercase().contains(&query)
                    || character.description.to_lowercase().contains(&query)
                    || character
                        .category
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&query))
            }
        }
    }

    /// Returns the matching characters in their original order.
    pub fn apply(&self, characters: &[Character]) -> Vec<Character> {
        characters
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

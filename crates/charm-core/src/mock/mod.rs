//! Mock character data set.
//!
//! Stand-in for a remote character API: every request gets a freshly
//! generated, shuffled list that can be narrowed by kind and truncated.

mod generator;
mod model;

pub use generator::{generate_characters, generate_one, group_thousands};
pub use model::{MockCharacter, MockKind};

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Query parameters accepted by the mock listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockQuery {
    /// Maximum number of records to return
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<usize>,
    /// Kind name, matched case-insensitively
    #[serde(default)]
    pub category: Option<String>,
}

/// Accepts a number or a numeric string; anything else means "no limit".
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(usize),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

impl MockQuery {
    /// Generates a fresh set and applies the query to it.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<MockCharacter>> {
        let generated = generate_characters(rng)?;
        Ok(self.apply(generated))
    }

    /// Filters by kind (unknown kinds match nothing), then truncates.
    pub fn apply(&self, characters: Vec<MockCharacter>) -> Vec<MockCharacter> {
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let mut filtered: Vec<MockCharacter> = match category {
            None => characters,
            Some(name) => characters
                .into_iter()
                .filter(|c| c.kind.as_str().eq_ignore_ascii_case(name))
                .collect(),
        };

        if let Some(count) = self.count.filter(|c| *c > 0) {
            filtered.truncate(count);
        }
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_query_returns_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let all = MockQuery::default().run(&mut rng).unwrap();
        assert_eq!(all.len(), 57);
    }

    #[test]
    fn test_category_filter_ignores_case() {
        let mut rng = StdRng::seed_from_u64(2);
        let query = MockQuery {
            count: None,
            category: Some("anime".to_string()),
        };
        let anime = query.run(&mut rng).unwrap();
        assert_eq!(anime.len(), 12);
        assert!(anime.iter().all(|c| c.kind == MockKind::Anime));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let mut rng = StdRng::seed_from_u64(2);
        let query = MockQuery {
            count: None,
            category: Some("Pirates".to_string()),
        };
        assert!(query.run(&mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_count_truncates_after_filter() {
        let mut rng = StdRng::seed_from_u64(4);
        let query = MockQuery {
            count: Some(3),
            category: Some("Sports".to_string()),
        };
        let sports = query.run(&mut rng).unwrap();
        assert_eq!(sports.len(), 3);

        let zero = MockQuery {
            count: Some(0),
            category: None,
        };
        assert_eq!(zero.run(&mut rng).unwrap().len(), 57);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(MockKind::parse("ai"), Some(MockKind::Ai));
        assert_eq!(MockKind::parse(" Scientist "), Some(MockKind::Scientist));
        assert_eq!(MockKind::parse("robots"), None);
    }

    #[test]
    fn test_count_is_lenient() {
        let parse = |raw: &str| serde_json::from_str::<MockQuery>(raw).unwrap().count;
        assert_eq!(parse(r#"{"count": 5}"#), Some(5));
        assert_eq!(parse(r#"{"count": " 7 "}"#), Some(7));
        assert_eq!(parse(r#"{"count": ""}"#), None);
        assert_eq!(parse(r#"{"count": "abc"}"#), None);
        assert_eq!(parse(r#"{"count": -3}"#), None);
        assert_eq!(parse(r#"{"count": null}"#), None);
        assert_eq!(parse("{}"), None);
    }
}

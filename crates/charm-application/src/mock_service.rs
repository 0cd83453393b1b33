use std::sync::Mutex;

use charm_core::error::{CharmError, Result};
use charm_core::mock::{MockCharacter, MockQuery};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Serves generated mock characters. Every call draws a fresh data set.
pub struct MockService {
    rng: Mutex<StdRng>,
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockService {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn list(&self, query: &MockQuery) -> Result<Vec<MockCharacter>> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| CharmError::internal("mock rng poisoned"))?;
        let characters = query.run(&mut *rng)?;
        tracing::debug!(
            count = ?query.count,
            category = ?query.category,
            returned = characters.len(),
            "Generated mock characters"
        );
        Ok(characters)
    }

    /// Looks up a record by id in a freshly generated set.
    ///
    /// Ids are stable across generations; the attributes are not.
    pub fn get(&self, id: u32) -> Result<MockCharacter> {
        self.list(&MockQuery::default())?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CharmError::not_found("mock character", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charm_core::mock::MockKind;

    fn service() -> MockService {
        MockService::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_list_all() {
        let all = service().list(&MockQuery::default()).unwrap();
        assert_eq!(all.len(), 57);
    }

    #[test]
    fn test_list_by_kind_and_count() {
        let query = MockQuery {
            count: Some(5),
            category: Some("anime".to_string()),
        };
        let anime = service().list(&query).unwrap();
        assert_eq!(anime.len(), 5);
        assert!(anime.iter().all(|c| c.kind == MockKind::Anime));
    }

    #[test]
    fn test_get_by_id() {
        let service = service();
        assert_eq!(service.get(1).unwrap().id, 1);
        assert_eq!(service.get(57).unwrap().id, 57);
        assert!(service.get(58).unwrap_err().is_not_found());
    }
}

//! Mock character records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Group a generated record belongs to; serialized as the record's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MockKind {
    #[serde(rename = "AI")]
    Ai,
    Sports,
    Anime,
    Music,
    Cooking,
    Cars,
    Bikes,
    Mythology,
    Historical,
    Scientist,
}

impl MockKind {
    /// All kinds in generation order.
    pub const ALL: [MockKind; 10] = [
        MockKind::Ai,
        MockKind::Sports,
        MockKind::Anime,
        MockKind::Music,
        MockKind::Cooking,
        MockKind::Cars,
        MockKind::Bikes,
        MockKind::Mythology,
        MockKind::Historical,
        MockKind::Scientist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MockKind::Ai => "AI",
            MockKind::Sports => "Sports",
            MockKind::Anime => "Anime",
            MockKind::Music => "Music",
            MockKind::Cooking => "Cooking",
            MockKind::Cars => "Cars",
            MockKind::Bikes => "Bikes",
            MockKind::Mythology => "Mythology",
            MockKind::Historical => "Historical",
            MockKind::Scientist => "Scientist",
        }
    }

    /// Number of records generated for this kind.
    pub fn group_size(&self) -> usize {
        match self {
            MockKind::Ai => 9,
            MockKind::Sports => 8,
            MockKind::Anime => 12,
            _ => 4,
        }
    }

    /// Case-insensitive parse of a kind name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for MockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated record. Kind-specific fields are flattened into the JSON
/// object next to the common ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockCharacter {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: MockKind,
    pub name: String,
    pub avatar: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl MockCharacter {
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

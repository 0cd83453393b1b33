//! Canned reply table and simulated typing delay.

use std::collections::BTreeMap;
use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CharmError, Result};

/// Key of the fallback reply list.
pub const DEFAULT_RESPONSE_KEY: &str = "default";

const BUILTIN: [(&str, [&str; 3]); 5] = [
    (
        "science",
        [
            "Fascinating question! In scientific terms...",
            "Let me explain this using the laws of physics...",
            "This reminds me of an interesting experiment...",
        ],
    ),
    (
        "literature",
        [
            "As I wrote in one of my sonnets...",
            "This brings to mind a fascinating literary parallel...",
            "Let me share a poetic perspective on this...",
        ],
    ),
    (
        "cooking",
        [
            "The secret ingredient here is...",
            "Let me share a professional cooking tip...",
            "In my kitchen, we always...",
        ],
    ),
    (
        "mystery",
        [
            "After careful deduction...",
            "The clues suggest that...",
            "This mystery reminds me of a case...",
        ],
    ),
    (
        DEFAULT_RESPONSE_KEY,
        [
            "That's an interesting perspective!",
            "Let me share my thoughts on this...",
            "Here's what I think about that...",
        ],
    ),
];

/// Category-keyed canned replies.
///
/// Keys are stored lower-cased. The `default` list is always present and
/// non-empty; it answers for characters whose category has no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl Default for ResponseTable {
    fn default() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(key, replies)| {
                (
                    key.to_string(),
                    replies.iter().map(|r| r.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }
}

impl ResponseTable {
    /// Builds the built-in table and layers `overrides` on top.
    ///
    /// An override replaces the whole list for its category. Empty lists
    /// are ignored so the table never loses its fallback.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut table = Self::default();
        for (key, replies) in overrides {
            let replies: Vec<String> = replies
                .iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect();
            if replies.is_empty() {
                continue;
            }
            table.entries.insert(key.trim().to_lowercase(), replies);
        }
        table
    }

    /// Reply list for `category`, falling back to the default list.
    pub fn lookup(&self, category: Option<&str>) -> &[String] {
        category
            .map(|c| c.trim().to_lowercase())
            .and_then(|key| self.entries.get(&key))
            .or_else(|| self.entries.get(DEFAULT_RESPONSE_KEY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Picks one reply uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, category: Option<&str>, rng: &mut R) -> &str {
        self.lookup(category)
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(BUILTIN[BUILTIN.len() - 1].1[0])
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Bounds of the simulated "thinking" time before a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 2000,
        }
    }
}

impl ReplyDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        if min_ms > max_ms {
            return Err(CharmError::config(format!(
                "reply delay minimum ({min_ms} ms) exceeds maximum ({max_ms} ms)"
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// A delay that never waits.
    pub fn none() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min_ms >= self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_ms..=self.max_ms))
    }
}

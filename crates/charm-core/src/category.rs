//! Category lists used by the catalog navigation and the create form.

use serde::{Deserialize, Serialize};

/// Sentinel category value that disables category filtering.
pub const ALL_CATEGORY: &str = "all";

/// A navigation entry: a display name and the value sent as a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub value: String,
}

impl Category {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        is_all(&self.value)
    }
}

const CATALOG_CATEGORY_NAMES: [&str; 16] = [
    "Science",
    "Art",
    "Literature",
    "Technology",
    "Education",
    "Entertainment",
    "Sports",
    "Music",
    "Cooking",
    "Mystery",
    "News",
    "AI",
    "Cars",
    "Bikes",
    "Writing",
    "Anime",
];

const CREATION_CATEGORIES: [&str; 11] = [
    "Maths",
    "WWE",
    "Science",
    "AI",
    "Humour",
    "Writing",
    "Literature",
    "Social",
    "Sports",
    "News",
    "Riddles",
];

/// Returns the catalog navigation list, starting with `All`.
pub fn catalog_categories() -> Vec<Category> {
    std::iter::once(Category::new("All", ALL_CATEGORY))
        .chain(CATALOG_CATEGORY_NAMES.iter().map(|n| Category::new(n, n)))
        .collect()
}

/// Categories offered by the create form.
pub fn creation_categories() -> &'static [&'static str] {
    &CREATION_CATEGORIES
}

/// Case-insensitive check for the `all` sentinel.
pub fn is_all(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(ALL_CATEGORY)
}

/// Resolves a user-supplied category to its canonical spelling.
///
/// Creation categories are checked first, then the catalog list. Returns
/// `None` for unknown values and for `all`.
pub fn canonical_category(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if is_all(value) {
        return None;
    }
    CREATION_CATEGORIES
        .iter()
        .chain(CATALOG_CATEGORY_NAMES.iter())
        .find(|c| c.eq_ignore_ascii_case(value))
        .copied()
}

/// Splits the navigation list into the always-visible entries and the
/// overflow shown behind a "more" toggle. `All` is excluded from both.
pub fn split_nav(limit: usize) -> (Vec<Category>, Vec<Category>) {
    let mut visible: Vec<Category> = catalog_categories()
        .into_iter()
        .filter(|c| !c.is_all())
        .collect();
    let overflow = if limit < visible.len() {
        visible.split_off(limit)
    } else {
        Vec::new()
    };
    (visible, overflow)
}

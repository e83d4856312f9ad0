//! Rubric models: the ordered set of scoring categories.

use serde::{Deserialize, Serialize};

/// A single scoring category. Ordering within a rubric is significant
/// (display and join order); duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub description: String,
}

impl Category {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Ordered set of categories a candidate is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RubricSet {
    categories: Vec<Category>,
}

impl RubricSet {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The fixed fallback rubric used when no rubric has been persisted or
    /// the persisted blob fails to parse.
    pub fn default_set() -> Self {
        Self::new(vec![
            Category::new("Clarity and conciseness"),
            Category::new("Engagement and hook"),
            Category::new("Hashtag relevance"),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Append a category to the end of the rubric.
    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Remove the category at `index`. Returns `false` (and changes nothing)
    /// when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.categories.len() {
            self.categories.remove(index);
            true
        } else {
            false
        }
    }

    /// Join category descriptions into the single instruction string handed
    /// to the scoring oracle.
    pub fn joined(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

//! Activity categories.
//!
//! Users maintain a short list of categories (work, chores, relaxation...)
//! each carrying a priority and a default duration. The day's candidate
//! activities are derived from this list; a duration may be overridden for
//! today only without changing the stored category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::CandidateActivity;

/// Lowest priority a category can carry.
pub const MIN_CATEGORY_PRIORITY: i64 = 0;
/// Highest priority a category can carry.
pub const MAX_CATEGORY_PRIORITY: i64 = 10;

/// Today-only duration overrides, keyed by category name (minutes).
pub type DurationOverrides = HashMap<String, i64>;

/// A user-maintained activity category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (unique within a catalog).
    pub name: String,
    /// Priority in `0..=10`.
    pub priority: i64,
    /// Duration used when no override is given (minutes).
    pub default_duration_minutes: i64,
}

impl Category {
    /// Creates a category. The priority is clamped into `0..=10`.
    pub fn new(name: impl Into<String>, priority: i64, default_duration_minutes: i64) -> Self {
        Self {
            name: name.into(),
            priority: clamp_priority(priority),
            default_duration_minutes,
        }
    }

    /// The candidate this category contributes today.
    pub fn to_candidate(&self, duration_override: Option<i64>) -> CandidateActivity {
        CandidateActivity::new(
            self.name.clone(),
            duration_override.unwrap_or(self.default_duration_minutes),
            self.priority,
        )
        .with_category(self.name.clone())
    }
}

/// An ordered list of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    /// Categories in display order.
    pub categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Adds a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Looks up a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Updates a category's priority, clamped into `0..=10`.
    ///
    /// Returns `false` if no category has that name.
    pub fn set_priority(&mut self, name: &str, priority: i64) -> bool {
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(category) => {
                category.priority = clamp_priority(priority);
                true
            }
            None => false,
        }
    }

    /// Candidates for today, one per category, in catalog order.
    ///
    /// Overrides replace the default duration for the matching category
    /// only in the returned candidates; the catalog is left untouched.
    pub fn candidates(&self, overrides: &DurationOverrides) -> Vec<CandidateActivity> {
        self.categories
            .iter()
            .map(|c| c.to_candidate(overrides.get(&c.name).copied()))
            .collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    /// Work, Chores and Relaxation.
    fn default() -> Self {
        Self::new()
            .with_category(Category::new("Work", 10, 60))
            .with_category(Category::new("Chores", 8, 30))
            .with_category(Category::new("Relaxation", 3, 45))
    }
}

fn clamp_priority(priority: i64) -> i64 {
    priority.clamp(MIN_CATEGORY_PRIORITY, MAX_CATEGORY_PRIORITY)
}

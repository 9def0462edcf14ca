//! Candidate activity model.
//!
//! A candidate activity (long-term task) is flexible work with a fixed
//! duration and a priority value but no time of its own. The solver
//! decides whether, and in which free block, it is placed.

use serde::{Deserialize, Serialize};

/// Largest accepted `priority_value`.
///
/// Keeps value sums over every candidate the solver can accept far from
/// `i64` overflow.
pub const MAX_PRIORITY_VALUE: i64 = 1_000_000_000;

/// A flexible, priority-weighted activity awaiting placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateActivity {
    /// Human-readable name.
    pub name: String,
    /// Time required (minutes, must be positive).
    pub duration_minutes: i64,
    /// Optimization weight, in `0..=MAX_PRIORITY_VALUE`.
    pub priority_value: i64,
    /// Category the activity was derived from, if any.
    #[serde(default)]
    pub category: Option<String>,
}

impl CandidateActivity {
    /// Creates a candidate activity.
    pub fn new(name: impl Into<String>, duration_minutes: i64, priority_value: i64) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            priority_value,
            category: None,
        }
    }

    /// Sets the source category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Sum of priority values across candidates (upper bound on any assignment).
///
/// Saturates at `i64::MAX` for unvalidated input.
pub fn total_value(items: &[CandidateActivity]) -> i64 {
    items
        .iter()
        .fold(0i64, |acc, i| acc.saturating_add(i.priority_value))
}

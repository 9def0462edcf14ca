//! Scheduled entry model.
//!
//! The materialized form of a pick: a named activity with concrete start
//! and end timestamps, ready for a timeline or table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A candidate activity placed at a concrete time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEntry {
    /// Activity name.
    pub name: String,
    /// Start timestamp (inclusive).
    pub start: NaiveDateTime,
    /// End timestamp (exclusive).
    pub end: NaiveDateTime,
    /// Priority value of the placed activity.
    pub priority: i64,
    /// Index of the source candidate.
    pub item_index: usize,
    /// Index of the free block the entry was packed into.
    pub block_index: usize,
}

impl ScheduledEntry {
    /// Duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }
}

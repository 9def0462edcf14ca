//! Fixed task (commitment) model.
//!
//! A fixed task is an immovable, time-bound commitment such as a meeting
//! or a class. Fixed tasks are never rescheduled; they only carve the day
//! into the free windows that flexible activities can fill.
//!
//! # Time Model
//! Start and end are wall-clock times of day on the planning day, with
//! minute precision. Either may be absent, in which case the task is
//! treated as unscheduled and ignored by free-window extraction.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A fixed, time-bound commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedTask {
    /// Human-readable name.
    pub name: String,
    /// Start time of day. `None` = unscheduled.
    #[serde(default, with = "crate::time::hhmm_opt")]
    pub start_time: Option<NaiveTime>,
    /// End time of day (exclusive). `None` = unscheduled.
    #[serde(default, with = "crate::time::hhmm_opt")]
    pub end_time: Option<NaiveTime>,
    /// Where the commitment takes place. Informational only.
    #[serde(default)]
    pub location: String,
    /// User-assigned priority. Informational only; fixed tasks are never optimized.
    #[serde(default)]
    pub priority: i32,
    /// Whether the user flagged this commitment as mandatory.
    #[serde(default)]
    pub mandatory: bool,
    /// Category label, if any.
    #[serde(default)]
    pub category: Option<String>,
}

impl FixedTask {
    /// Creates an unscheduled fixed task.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_time: None,
            end_time: None,
            location: String::new(),
            priority: 0,
            mandatory: false,
            category: None,
        }
    }

    /// Sets both start and end time.
    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the task as mandatory.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether both start and end time are present.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// The `[start, end)` interval, when both times are present.
    pub fn interval(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((self.start_time?, self.end_time?))
    }

    /// The interval anchored on a calendar date.
    pub fn interval_on(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (start, end) = self.interval()?;
        Some((date.and_time(start), date.and_time(end)))
    }

    /// Duration in minutes, when scheduled.
    pub fn duration_minutes(&self) -> Option<i64> {
        let (start, end) = self.interval()?;
        Some(end.signed_duration_since(start).num_minutes())
    }

    /// Whether two scheduled tasks intersect.
    ///
    /// Intervals are half-open, so back-to-back tasks do not overlap.
    /// Unscheduled tasks never overlap anything.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.interval(), other.interval()) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => a_start < b_end && b_start < a_end,
            _ => false,
        }
    }
}

/// Index pairs `(i, j)`, `i < j`, of fixed tasks whose intervals intersect.
pub fn overlapping_pairs(tasks: &[FixedTask]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in tasks.iter().enumerate() {
        for (j, b) in tasks.iter().enumerate().skip(i + 1) {
            if a.overlaps(b) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

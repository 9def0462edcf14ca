//! Free block and planning day models.
//!
//! A free block is a maximal span of the planning day not occupied by any
//! fixed task. Its capacity is the number of whole minutes it spans.
//!
//! # Interval Convention
//! Both `FreeBlock` and `PlanningDay` are half-open: `[start, end)`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::time::{self, MINUTES_PER_DAY};

/// The schedulable bounds of one day, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningDay {
    /// First schedulable instant.
    pub start: NaiveDateTime,
    /// End of the day (exclusive).
    pub end: NaiveDateTime,
}

impl PlanningDay {
    /// Creates a planning day with explicit bounds.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Midnight to the following midnight (1440 minutes).
    pub fn full(date: NaiveDate) -> Self {
        Self::between_minutes(date, 0, MINUTES_PER_DAY)
    }

    /// Bounds given as minutes after midnight of `date`.
    pub fn between_minutes(date: NaiveDate, start_minute: i64, end_minute: i64) -> Self {
        Self {
            start: time::at_minute(date, start_minute),
            end: time::at_minute(date, end_minute),
        }
    }

    /// Calendar date the day is anchored on.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Length of the day in minutes.
    #[inline]
    pub fn minutes(&self) -> i64 {
        time::minutes_between(self.start, self.end)
    }
}

/// An unoccupied window of the planning day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeBlock {
    /// Window start (inclusive).
    pub start: NaiveDateTime,
    /// Window end (exclusive).
    pub end: NaiveDateTime,
    /// Minutes available for activities (`end - start`, never negative).
    pub capacity_minutes: i64,
}

impl FreeBlock {
    /// Creates a block spanning `[start, end)`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            capacity_minutes: time::minutes_between(start, end).max(0),
        }
    }

    /// Creates a block of `minutes` length starting at `start`.
    pub fn starting_at(start: NaiveDateTime, minutes: i64) -> Self {
        Self::new(start, start + chrono::Duration::minutes(minutes.max(0)))
    }

    /// Whether a timestamp falls within this block.
    #[inline]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Whether an activity of `duration_minutes` fits in the empty block.
    #[inline]
    pub fn fits(&self, duration_minutes: i64) -> bool {
        self.capacity_minutes >= duration_minutes
    }
}

/// Sum of capacities across blocks.
pub fn total_capacity(blocks: &[FreeBlock]) -> i64 {
    blocks.iter().map(|b| b.capacity_minutes).sum()
}

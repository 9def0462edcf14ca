//! Plan quality metrics (KPIs).
//!
//! Summarizes how well the day's free time was used.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Free minutes | Sum of free-block capacities |
//! | Scheduled minutes | Sum of picked candidate durations |
//! | Utilization | Scheduled / free (0 when no free time) |
//! | Value capture | Total value / value of all candidates |
//! | Empty blocks | Free blocks with nothing placed |

use serde::{Deserialize, Serialize};

use super::diagnostics::{diagnose, InclusionStatus};
use crate::models::{total_capacity, total_value, Assignment, CandidateActivity, FreeBlock};

/// Plan performance indicators. Times are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanKpi {
    /// Total free time of the day.
    pub free_minutes: i64,
    /// Time filled with candidate activities.
    pub scheduled_minutes: i64,
    /// Fraction of free time filled (0.0..=1.0).
    pub utilization: f64,
    /// Value achieved by the assignment.
    pub total_value: i64,
    /// Value if every candidate had been placed.
    pub max_possible_value: i64,
    /// Number of candidates placed.
    pub scheduled_count: usize,
    /// Candidates longer than every free block.
    pub infeasible_count: usize,
    /// Candidates that fit but were left out.
    pub deprioritized_count: usize,
    /// Free blocks with nothing placed.
    pub empty_blocks: usize,
}

impl PlanKpi {
    /// Computes KPIs for an assignment.
    pub fn calculate(
        blocks: &[FreeBlock],
        items: &[CandidateActivity],
        assignment: &Assignment,
    ) -> Self {
        let free_minutes = total_capacity(blocks);
        let scheduled_minutes: i64 = (0..blocks.len())
            .map(|b| assignment.used_minutes(b, items))
            .sum();

        let mut infeasible_count = 0;
        let mut deprioritized_count = 0;
        for diagnostic in diagnose(blocks, items, assignment) {
            match diagnostic.status {
                InclusionStatus::Infeasible => infeasible_count += 1,
                InclusionStatus::Deprioritized => deprioritized_count += 1,
                InclusionStatus::Scheduled { .. } => {}
            }
        }

        let utilization = if free_minutes <= 0 {
            0.0
        } else {
            scheduled_minutes as f64 / free_minutes as f64
        };

        Self {
            free_minutes,
            scheduled_minutes,
            utilization,
            total_value: assignment.total_value,
            max_possible_value: total_value(items),
            scheduled_count: assignment.pick_count(),
            infeasible_count,
            deprioritized_count,
            empty_blocks: assignment.empty_block_count(blocks.len()),
        }
    }

    /// Fraction of the attainable value captured (1.0 when nothing was asked).
    pub fn value_capture(&self) -> f64 {
        if self.max_possible_value <= 0 {
            1.0
        } else {
            self.total_value as f64 / self.max_possible_value as f64
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_utilization: f64, min_value_capture: f64) -> bool {
        self.utilization >= min_utilization && self.value_capture() >= min_value_capture
    }
}

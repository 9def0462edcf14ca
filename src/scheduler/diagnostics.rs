//! Per-candidate inclusion diagnostics.
//!
//! Explains, for each candidate, whether it made it into the plan and, if
//! not, why. Infeasibility is judged against the raw block capacities,
//! independently of the solver's internal state.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, CandidateActivity, FreeBlock};

/// Outcome for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InclusionStatus {
    /// Placed into the given block.
    Scheduled { block_index: usize },
    /// No free block is long enough to hold it.
    Infeasible,
    /// It fits somewhere but the value-maximizing selection left it out.
    Deprioritized,
}

/// Inclusion report for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDiagnostic {
    /// Index into the candidate list.
    pub item_index: usize,
    /// Candidate name.
    pub name: String,
    #[serde(flatten)]
    pub status: InclusionStatus,
}

impl CandidateDiagnostic {
    /// Whether the candidate was placed.
    pub fn is_scheduled(&self) -> bool {
        matches!(self.status, InclusionStatus::Scheduled { .. })
    }
}

/// Classifies every candidate against the winning assignment.
pub fn diagnose(
    blocks: &[FreeBlock],
    items: &[CandidateActivity],
    assignment: &Assignment,
) -> Vec<CandidateDiagnostic> {
    items
        .iter()
        .enumerate()
        .map(|(item_index, item)| {
            let status = match assignment.pick_for_item(item_index) {
                Some(pick) => InclusionStatus::Scheduled {
                    block_index: pick.block_index,
                },
                None if blocks.iter().any(|b| b.fits(item.duration_minutes)) => {
                    InclusionStatus::Deprioritized
                }
                None => InclusionStatus::Infeasible,
            };
            CandidateDiagnostic {
                item_index,
                name: item.name.clone(),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::solve;
    use chrono::NaiveDate;

    fn blocks(capacities: &[i64]) -> Vec<FreeBlock> {
        let start = NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        capacities
            .iter()
            .enumerate()
            .map(|(i, &cap)| {
                FreeBlock::starting_at(start + chrono::Duration::hours(i as i64 * 4), cap)
            })
            .collect()
    }

    #[test]
    fn test_deprioritized_vs_scheduled() {
        let b = blocks(&[30, 30]);
        let items = vec![
            CandidateActivity::new("A", 30, 10),
            CandidateActivity::new("B", 30, 10),
            CandidateActivity::new("C", 30, 10),
        ];
        let assignment = solve(&b, &items).unwrap();
        let report = diagnose(&b, &items, &assignment);

        assert_eq!(assignment.total_value, 20);
        assert_eq!(report.iter().filter(|d| d.is_scheduled()).count(), 2);
        let left_out: Vec<_> = report.iter().filter(|d| !d.is_scheduled()).collect();
        assert_eq!(left_out.len(), 1);
        assert_eq!(left_out[0].status, InclusionStatus::Deprioritized);
    }

    #[test]
    fn test_all_scheduled_when_one_block_holds_two() {
        let b = blocks(&[30, 60]);
        let items = vec![
            CandidateActivity::new("A", 30, 10),
            CandidateActivity::new("B", 30, 10),
            CandidateActivity::new("C", 30, 10),
        ];
        let assignment = solve(&b, &items).unwrap();
        let report = diagnose(&b, &items, &assignment);

        assert_eq!(assignment.total_value, 30);
        assert!(report.iter().all(|d| d.is_scheduled()));
    }

    #[test]
    fn test_infeasible() {
        let b = blocks(&[30, 60]);
        let items = vec![CandidateActivity::new("Marathon", 200, 9)];
        let assignment = solve(&b, &items).unwrap();
        let report = diagnose(&b, &items, &assignment);

        assert_eq!(assignment.total_value, 0);
        assert_eq!(report[0].status, InclusionStatus::Infeasible);
        assert_eq!(report[0].name, "Marathon");
    }

    #[test]
    fn test_no_blocks_means_infeasible() {
        let items = vec![CandidateActivity::new("Nap", 20, 1)];
        let report = diagnose(&[], &items, &Assignment::empty());
        assert_eq!(report[0].status, InclusionStatus::Infeasible);
    }

    #[test]
    fn test_scheduled_reports_block() {
        let b = blocks(&[15, 90]);
        let items = vec![CandidateActivity::new("Run", 60, 4)];
        let assignment = solve(&b, &items).unwrap();
        let report = diagnose(&b, &items, &assignment);
        assert_eq!(report[0].status, InclusionStatus::Scheduled { block_index: 1 });
    }

    #[test]
    fn test_serialized_shape() {
        let d = CandidateDiagnostic {
            item_index: 2,
            name: "Read".into(),
            status: InclusionStatus::Scheduled { block_index: 1 },
        };
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["status"], "scheduled");
        assert_eq!(value["block_index"], 1);
        assert_eq!(value["item_index"], 2);
    }
}

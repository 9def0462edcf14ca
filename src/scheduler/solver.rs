//! Exact assignment of candidate activities to free blocks.
//!
//! A 0/1 multiple-knapsack: every free block is a bin with its own
//! capacity (minutes), every candidate is placed in at most one bin, and
//! total priority value is maximized. Candidates that fit nowhere are
//! skipped silently.
//!
//! # Algorithm
//!
//! Depth-first backtracking over candidates in index order. At each
//! candidate the search first skips it, then tries every block (in block
//! order) whose remaining capacity admits it, undoing the capacity change
//! and the pick on the way back. Each leaf is offered to the incumbent:
//!
//! - strictly greater total value replaces it;
//! - on equal value, [`TieBreak::FewestEmptyBlocks`] prefers fewer blocks
//!   left without picks, [`TieBreak::FirstFound`] keeps the incumbent.
//!
//! [`SearchMode::BranchAndBound`] walks the same tree in the same order but
//! skips subtrees whose bound (running value plus the value of every
//! remaining candidate) cannot displace the incumbent. Both modes return
//! the same assignment.
//!
//! # Complexity
//! O((b + 1)^n) for n candidates and b blocks. Inputs are rejected when
//! they exceed [`SolverConfig::max_candidates`] or when `(b + 1)^n` exceeds
//! [`SolverConfig::max_search_space`].

use tracing::debug;

use crate::config::{SearchMode, SolverConfig, TieBreak};
use crate::error::{PlanError, PlanResult};
use crate::models::{Assignment, CandidateActivity, FreeBlock, Pick};
use crate::validation;

/// Exact solver for the activity-to-block assignment.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_dayplan::models::{CandidateActivity, FreeBlock};
/// use u_dayplan::scheduler::AssignmentSolver;
///
/// let nine = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let blocks = vec![FreeBlock::starting_at(nine, 90)];
/// let items = vec![
///     CandidateActivity::new("Write", 60, 8),
///     CandidateActivity::new("Email", 45, 5),
/// ];
///
/// let assignment = AssignmentSolver::new().solve(&blocks, &items).unwrap();
/// assert_eq!(assignment.total_value, 8);
/// assert!(assignment.is_picked(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentSolver {
    config: SolverConfig,
}

impl AssignmentSolver {
    /// Creates a solver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given settings.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds the value-maximizing assignment.
    ///
    /// Empty `blocks` or `items` yield an empty assignment.
    ///
    /// # Errors
    /// - [`PlanError::Validation`] for non-positive durations, values
    ///   outside `0..=MAX_PRIORITY_VALUE` or unnamed candidates.
    /// - [`PlanError::TooManyCandidates`] / [`PlanError::SearchSpaceTooLarge`]
    ///   when the instance exceeds the configured bounds.
    pub fn solve(
        &self,
        blocks: &[FreeBlock],
        items: &[CandidateActivity],
    ) -> PlanResult<Assignment> {
        validation::validate_candidates(items).map_err(PlanError::validation)?;

        if blocks.is_empty() || items.is_empty() {
            return Ok(Assignment::empty());
        }
        self.check_bounds(blocks.len(), items.len())?;

        debug!(
            target: "u_dayplan::solver",
            items = items.len(),
            blocks = blocks.len(),
            mode = ?self.config.search_mode,
            tie_break = ?self.config.tie_break,
            "starting exact search"
        );

        let mut search = Search::new(blocks, items, &self.config);
        search.descend(0, 0);

        debug!(
            target: "u_dayplan::solver",
            nodes = search.nodes,
            total_value = search.best.assignment.total_value,
            picks = search.best.assignment.picks.len(),
            "search finished"
        );

        Ok(search.best.assignment)
    }

    fn check_bounds(&self, blocks: usize, items: usize) -> PlanResult<()> {
        if items > self.config.max_candidates {
            return Err(PlanError::too_many_candidates(
                items,
                self.config.max_candidates,
            ));
        }
        let estimate = search_space_estimate(blocks, items);
        if estimate > self.config.max_search_space {
            return Err(PlanError::search_space_too_large(
                items,
                blocks,
                estimate,
                self.config.max_search_space,
            ));
        }
        Ok(())
    }
}

/// Solves with default settings.
pub fn solve(blocks: &[FreeBlock], items: &[CandidateActivity]) -> PlanResult<Assignment> {
    AssignmentSolver::new().solve(blocks, items)
}

/// Worst-case leaf count `(blocks + 1)^items`, saturating at `u64::MAX`.
pub fn search_space_estimate(blocks: usize, items: usize) -> u64 {
    let base = (blocks as u64).saturating_add(1);
    u32::try_from(items)
        .ok()
        .and_then(|exp| base.checked_pow(exp))
        .unwrap_or(u64::MAX)
}

struct Incumbent {
    assignment: Assignment,
    empty_blocks: usize,
}

/// State of one `solve` call. Owned by the call, mutated in place and
/// restored on every backtrack.
struct Search<'a> {
    items: &'a [CandidateActivity],
    mode: SearchMode,
    tie_break: TieBreak,
    /// Remaining minutes per block.
    remaining: Vec<i64>,
    /// Picks per block, to count empty blocks at the leaves.
    load: Vec<usize>,
    used_blocks: usize,
    picks: Vec<Pick>,
    /// `suffix_value[i]` = total value of `items[i..]`.
    suffix_value: Vec<i64>,
    best: Incumbent,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(blocks: &[FreeBlock], items: &'a [CandidateActivity], config: &SolverConfig) -> Self {
        let mut suffix_value = vec![0; items.len() + 1];
        for idx in (0..items.len()).rev() {
            suffix_value[idx] = suffix_value[idx + 1] + items[idx].priority_value;
        }

        Self {
            items,
            mode: config.search_mode,
            tie_break: config.tie_break,
            remaining: blocks.iter().map(|b| b.capacity_minutes).collect(),
            load: vec![0; blocks.len()],
            used_blocks: 0,
            picks: Vec::with_capacity(items.len()),
            suffix_value,
            best: Incumbent {
                assignment: Assignment::empty(),
                empty_blocks: usize::MAX,
            },
            nodes: 0,
        }
    }

    fn descend(&mut self, index: usize, value: i64) {
        self.nodes += 1;

        if index == self.items.len() {
            self.offer(value);
            return;
        }

        if self.mode == SearchMode::BranchAndBound
            && !self.may_displace(value + self.suffix_value[index])
        {
            return;
        }

        // Skip this candidate
        self.descend(index + 1, value);

        // Place it in every block that still has room
        let duration = self.items[index].duration_minutes;
        let gain = self.items[index].priority_value;
        for block in 0..self.remaining.len() {
            if self.remaining[block] < duration {
                continue;
            }

            self.remaining[block] -= duration;
            self.push_pick(Pick::new(index, block));
            self.descend(index + 1, value + gain);
            self.pop_pick();
            self.remaining[block] += duration;
        }
    }

    fn push_pick(&mut self, pick: Pick) {
        if self.load[pick.block_index] == 0 {
            self.used_blocks += 1;
        }
        self.load[pick.block_index] += 1;
        self.picks.push(pick);
    }

    fn pop_pick(&mut self) {
        if let Some(pick) = self.picks.pop() {
            self.load[pick.block_index] -= 1;
            if self.load[pick.block_index] == 0 {
                self.used_blocks -= 1;
            }
        }
    }

    /// Whether a leaf worth `bound` could replace the incumbent.
    fn may_displace(&self, bound: i64) -> bool {
        let best = &self.best;
        match self.tie_break {
            TieBreak::FirstFound => bound > best.assignment.total_value,
            TieBreak::FewestEmptyBlocks => {
                bound > best.assignment.total_value
                    || (bound == best.assignment.total_value && best.empty_blocks > 0)
            }
        }
    }

    fn offer(&mut self, value: i64) {
        let empty_blocks = self.remaining.len() - self.used_blocks;
        let best = &self.best;

        let better = match self.tie_break {
            TieBreak::FirstFound => value > best.assignment.total_value,
            TieBreak::FewestEmptyBlocks => {
                value > best.assignment.total_value
                    || (value == best.assignment.total_value && empty_blocks < best.empty_blocks)
            }
        };

        if better {
            self.best = Incumbent {
                assignment: Assignment {
                    total_value: value,
                    picks: self.picks.clone(),
                },
                empty_blocks,
            };
        }
    }
}

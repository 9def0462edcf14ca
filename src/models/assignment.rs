//! Assignment (solver output) model.
//!
//! An assignment records which candidates were placed into which free
//! blocks, together with the total priority value achieved. It carries
//! no timestamps; materialization turns it into concrete entries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::CandidateActivity;

/// Placement of one candidate into one free block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pick {
    /// Index into the candidate list.
    pub item_index: usize,
    /// Index into the free block list.
    pub block_index: usize,
}

impl Pick {
    /// Creates a pick.
    pub fn new(item_index: usize, block_index: usize) -> Self {
        Self {
            item_index,
            block_index,
        }
    }
}

/// The winning selection of picks and its total value.
///
/// Picks are kept in the order the search produced them, which is
/// ascending `item_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Sum of `priority_value` over all picked candidates.
    pub total_value: i64,
    /// Committed placements.
    pub picks: Vec<Pick>,
}

impl Assignment {
    /// Creates an empty assignment (value 0, no picks).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The pick for a candidate, if it was placed.
    pub fn pick_for_item(&self, item_index: usize) -> Option<&Pick> {
        self.picks.iter().find(|p| p.item_index == item_index)
    }

    /// Whether a candidate was placed.
    pub fn is_picked(&self, item_index: usize) -> bool {
        self.pick_for_item(item_index).is_some()
    }

    /// Picks placed into one block, in pick order.
    pub fn picks_for_block(&self, block_index: usize) -> impl Iterator<Item = &Pick> + '_ {
        self.picks
            .iter()
            .filter(move |p| p.block_index == block_index)
    }

    /// Minutes consumed in one block.
    pub fn used_minutes(&self, block_index: usize, items: &[CandidateActivity]) -> i64 {
        self.picks_for_block(block_index)
            .filter_map(|p| items.get(p.item_index))
            .map(|i| i.duration_minutes)
            .sum()
    }

    /// Number of distinct blocks holding at least one pick.
    pub fn used_block_count(&self) -> usize {
        self.picks
            .iter()
            .map(|p| p.block_index)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of blocks (out of `block_count`) holding no pick.
    pub fn empty_block_count(&self, block_count: usize) -> usize {
        block_count.saturating_sub(self.used_block_count())
    }

    /// Number of placed candidates.
    pub fn pick_count(&self) -> usize {
        self.picks.len()
    }
}

//! Materialization of picks into timestamped entries.
//!
//! # Algorithm
//! For each block in order, take its picks in pick order and lay them out
//! back to back from the block start: each entry begins where the previous
//! one ended. Concatenating the blocks gives the day's entries in
//! chronological order.
//!
//! No optimization happens here. Capacity is guaranteed by the solver, so
//! packed entries never run past their block's end.

use chrono::Duration;

use crate::error::{PlanError, PlanResult};
use crate::models::{Assignment, CandidateActivity, FreeBlock, ScheduledEntry};

/// Projects an assignment onto concrete timestamps.
///
/// # Errors
/// [`PlanError::InvalidPick`] if a pick references a candidate or block
/// outside the given slices.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_dayplan::models::{Assignment, CandidateActivity, FreeBlock, Pick};
/// use u_dayplan::scheduler::materialize;
///
/// let nine = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let blocks = vec![FreeBlock::starting_at(nine, 90)];
/// let items = vec![CandidateActivity::new("Stretch", 30, 2)];
/// let assignment = Assignment { total_value: 2, picks: vec![Pick::new(0, 0)] };
///
/// let entries = materialize(&blocks, &items, &assignment).unwrap();
/// assert_eq!(entries[0].start, nine);
/// assert_eq!(entries[0].duration_minutes(), 30);
/// ```
pub fn materialize(
    blocks: &[FreeBlock],
    items: &[CandidateActivity],
    assignment: &Assignment,
) -> PlanResult<Vec<ScheduledEntry>> {
    for pick in &assignment.picks {
        if pick.block_index >= blocks.len() {
            return Err(PlanError::invalid_pick("block", pick.block_index));
        }
        if pick.item_index >= items.len() {
            return Err(PlanError::invalid_pick("candidate", pick.item_index));
        }
    }

    let mut entries = Vec::with_capacity(assignment.picks.len());

    for (block_index, block) in blocks.iter().enumerate() {
        let mut cursor = block.start;
        for pick in assignment.picks_for_block(block_index) {
            let item = &items[pick.item_index];
            let end = cursor + Duration::minutes(item.duration_minutes);
            entries.push(ScheduledEntry {
                name: item.name.clone(),
                start: cursor,
                end,
                priority: item.priority_value,
                item_index: pick.item_index,
                block_index,
            });
            cursor = end;
        }
    }

    Ok(entries)
}

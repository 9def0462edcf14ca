//! Free-block extraction.
//!
//! # Algorithm
//!
//! 1. Keep fixed tasks with both times; anchor them on the day's date.
//! 2. Stable-sort by start time (equal starts keep input order).
//! 3. Sweep a cursor from the day start. Before each task, the gap
//!    `[cursor, task.start)` is free if non-empty. The cursor then moves
//!    to `max(cursor, task.end)`, so nested and overlapping tasks merge.
//! 4. The remainder `[cursor, day.end)` is free if non-empty.
//!
//! Task intervals are clamped to the day bounds, so no block ever leaves
//! `[day_start, day_end)`.
//!
//! # Complexity
//! O(n log n) for n fixed tasks.

use chrono::NaiveDateTime;

use crate::models::{FixedTask, FreeBlock, PlanningDay};

/// Computes the free windows of a day around its fixed commitments.
///
/// Output blocks are chronological, pairwise disjoint, never empty, and
/// together cover exactly the day minus the union of task intervals.
/// Tasks without both times are ignored. Interval validity (`end > start`)
/// is not re-checked here; see [`crate::validation`].
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use u_dayplan::models::{FixedTask, PlanningDay};
/// use u_dayplan::scheduler::extract_free_blocks;
///
/// let day = PlanningDay::full(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let tasks = vec![FixedTask::new("Work").with_times(t(9), t(17))];
///
/// let blocks = extract_free_blocks(&tasks, day.start, day.end);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].capacity_minutes, 9 * 60);
/// assert_eq!(blocks[1].capacity_minutes, 7 * 60);
/// ```
pub fn extract_free_blocks(
    fixed_tasks: &[FixedTask],
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
) -> Vec<FreeBlock> {
    let date = day_start.date();
    let clamp = |at: NaiveDateTime| at.clamp(day_start, day_end.max(day_start));

    let mut intervals: Vec<(NaiveDateTime, NaiveDateTime)> = fixed_tasks
        .iter()
        .filter_map(|task| task.interval_on(date))
        .map(|(start, end)| (clamp(start), clamp(end)))
        .collect();
    intervals.sort_by_key(|&(start, _)| start);

    let mut blocks = Vec::new();
    let mut cursor = day_start;

    for (start, end) in intervals {
        if cursor < start {
            blocks.push(FreeBlock::new(cursor, start));
        }
        cursor = cursor.max(end);
    }

    if cursor < day_end {
        blocks.push(FreeBlock::new(cursor, day_end));
    }

    blocks
}

/// Free blocks of a [`PlanningDay`].
pub fn free_blocks_for_day(fixed_tasks: &[FixedTask], day: &PlanningDay) -> Vec<FreeBlock> {
    extract_free_blocks(fixed_tasks, day.start, day.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::total_capacity;
    use crate::time::at_minute;
    use chrono::{NaiveDate, NaiveTime};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn day() -> PlanningDay {
        PlanningDay::full(date())
    }

    fn task(name: &str, start: (u32, u32), end: (u32, u32)) -> FixedTask {
        FixedTask::new(name).with_times(
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    fn spans(blocks: &[FreeBlock]) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        blocks.iter().map(|b| (b.start, b.end)).collect()
    }

    #[test]
    fn test_no_tasks_whole_day_free() {
        let blocks = free_blocks_for_day(&[], &day());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].capacity_minutes, 1440);
    }

    #[test]
    fn test_unsorted_tasks() {
        let tasks = vec![
            task("Lunch", (12, 0), (13, 0)),
            task("Class", (9, 0), (10, 30)),
        ];
        let blocks = free_blocks_for_day(&tasks, &day());
        assert_eq!(
            spans(&blocks),
            vec![
                (at_minute(date(), 0), at_minute(date(), 540)),
                (at_minute(date(), 630), at_minute(date(), 720)),
                (at_minute(date(), 780), at_minute(date(), 1440)),
            ]
        );
        assert_eq!(blocks[1].capacity_minutes, 90);
    }

    #[test]
    fn test_unscheduled_tasks_ignored() {
        let mut half = FixedTask::new("Half");
        half.start_time = NaiveTime::from_hms_opt(8, 0, 0);
        let tasks = vec![FixedTask::new("Whenever"), half];

        let blocks = free_blocks_for_day(&tasks, &day());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].capacity_minutes, 1440);
    }

    #[test]
    fn test_nested_and_overlapping_tasks_merge() {
        let tasks = vec![
            task("Outer", (9, 0), (12, 0)),
            task("Inner", (10, 0), (11, 0)),
            task("Overlap", (11, 30), (13, 0)),
        ];
        let blocks = free_blocks_for_day(&tasks, &day());
        assert_eq!(
            spans(&blocks),
            vec![
                (at_minute(date(), 0), at_minute(date(), 540)),
                (at_minute(date(), 780), at_minute(date(), 1440)),
            ]
        );
    }

    #[test]
    fn test_back_to_back_tasks_leave_no_zero_gap() {
        let tasks = vec![task("A", (9, 0), (10, 0)), task("B", (10, 0), (11, 0))];
        let blocks = free_blocks_for_day(&tasks, &day());
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.capacity_minutes > 0));
    }

    #[test]
    fn test_task_at_day_edges() {
        let tasks = vec![task("Sleep", (0, 0), (7, 0)), task("Late", (22, 0), (23, 59))];
        let blocks = free_blocks_for_day(&tasks, &day());
        assert_eq!(
            spans(&blocks),
            vec![
                (at_minute(date(), 420), at_minute(date(), 1320)),
                (at_minute(date(), 1439), at_minute(date(), 1440)),
            ]
        );
    }

    #[test]
    fn test_equal_start_times() {
        let tasks = vec![task("Short", (9, 0), (9, 30)), task("Long", (9, 0), (11, 0))];
        let reversed: Vec<FixedTask> = tasks.iter().rev().cloned().collect();

        let a = free_blocks_for_day(&tasks, &day());
        let b = free_blocks_for_day(&reversed, &day());
        assert_eq!(a, b);
        assert_eq!(a[1].start, at_minute(date(), 660));
    }

    #[test]
    fn test_partial_day_clamps_tasks() {
        let day = PlanningDay::between_minutes(date(), 7 * 60, 22 * 60);
        let tasks = vec![
            task("Early", (5, 0), (8, 0)),
            task("Before", (3, 0), (4, 0)),
            task("Late", (21, 0), (23, 30)),
            task("After", (23, 0), (23, 45)),
        ];
        let blocks = free_blocks_for_day(&tasks, &day);
        assert_eq!(
            spans(&blocks),
            vec![(at_minute(date(), 480), at_minute(date(), 1260))]
        );
    }

    #[test]
    fn test_covers_day_minus_fixed_time() {
        let tasks = vec![
            task("A", (6, 15), (7, 0)),
            task("B", (9, 0), (12, 30)),
            task("C", (14, 0), (15, 10)),
            task("D", (19, 45), (21, 0)),
        ];
        let fixed: i64 = tasks.iter().filter_map(|t| t.duration_minutes()).sum();
        let blocks = free_blocks_for_day(&tasks, &day());

        assert_eq!(total_capacity(&blocks) + fixed, 1440);
        for pair in blocks.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn test_idempotent() {
        let tasks = vec![task("B", (13, 0), (14, 0)), task("A", (8, 0), (9, 0))];
        assert_eq!(
            free_blocks_for_day(&tasks, &day()),
            free_blocks_for_day(&tasks, &day())
        );
    }
}

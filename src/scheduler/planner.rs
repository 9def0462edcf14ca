//! Day planning pipeline.
//!
//! # Algorithm
//!
//! 1. Validate fixed tasks and candidates (all issues reported together).
//! 2. Extract the day's free blocks around the fixed tasks.
//! 3. Solve the candidate-to-block assignment exactly.
//! 4. Materialize picks into back-to-back timestamped entries.
//! 5. Diagnose every candidate and compute KPIs.
//!
//! Every call recomputes from scratch; nothing is cached between plans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{diagnose, extract_free_blocks, materialize, AssignmentSolver, CandidateDiagnostic, PlanKpi};
use crate::config::{PlannerConfig, SolverConfig};
use crate::error::{PlanError, PlanResult};
use crate::models::{
    overlapping_pairs, Assignment, CandidateActivity, FixedTask, FreeBlock, PlanningDay,
    ScheduledEntry,
};
use crate::validation;

/// Input container for planning one day.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Schedulable bounds of the day.
    pub day: PlanningDay,
    /// Immovable commitments.
    pub fixed_tasks: Vec<FixedTask>,
    /// Flexible activities to place.
    pub candidates: Vec<CandidateActivity>,
}

impl PlanRequest {
    /// Creates a request covering `date` from midnight to midnight.
    pub fn new(date: NaiveDate) -> Self {
        Self::for_day(PlanningDay::full(date))
    }

    /// Creates a request with explicit day bounds.
    pub fn for_day(day: PlanningDay) -> Self {
        Self {
            day,
            fixed_tasks: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// Sets the fixed tasks.
    pub fn with_fixed_tasks(mut self, tasks: Vec<FixedTask>) -> Self {
        self.fixed_tasks = tasks;
        self
    }

    /// Adds one fixed task.
    pub fn with_fixed_task(mut self, task: FixedTask) -> Self {
        self.fixed_tasks.push(task);
        self
    }

    /// Sets the candidates.
    pub fn with_candidates(mut self, candidates: Vec<CandidateActivity>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Adds one candidate.
    pub fn with_candidate(mut self, candidate: CandidateActivity) -> Self {
        self.candidates.push(candidate);
        self
    }
}

/// A planned day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day bounds the plan covers.
    pub day: PlanningDay,
    /// Free windows around the fixed tasks.
    pub free_blocks: Vec<FreeBlock>,
    /// Winning selection.
    pub assignment: Assignment,
    /// Timestamped activities, chronological.
    pub entries: Vec<ScheduledEntry>,
    /// Per-candidate inclusion report.
    pub diagnostics: Vec<CandidateDiagnostic>,
    /// Plan quality metrics.
    pub kpi: PlanKpi,
}

/// Runs the full planning pipeline.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use u_dayplan::models::{CandidateActivity, FixedTask};
/// use u_dayplan::scheduler::{DayPlanner, PlanRequest};
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let request = PlanRequest::new(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
///     .with_fixed_task(FixedTask::new("Sleep").with_times(t(0), t(8)))
///     .with_fixed_task(FixedTask::new("Office").with_times(t(9), t(23)))
///     .with_candidate(CandidateActivity::new("Run", 45, 6))
///     .with_candidate(CandidateActivity::new("Piano", 30, 4));
///
/// let plan = DayPlanner::new().plan(&request).unwrap();
/// assert_eq!(plan.free_blocks.len(), 2);
/// assert_eq!(plan.assignment.total_value, 10);
/// assert_eq!(plan.entries.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DayPlanner {
    solver: AssignmentSolver,
}

impl DayPlanner {
    /// Creates a planner with default solver settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets solver settings.
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver = AssignmentSolver::with_config(config);
        self
    }

    /// Creates a planner from a full configuration.
    ///
    /// Day bounds in the configuration are applied by
    /// [`DayPlanner::request_for`].
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new().with_solver_config(config.solver.clone())
    }

    /// Builds an empty request for `date` using the configured day bounds.
    pub fn request_for(config: &PlannerConfig, date: NaiveDate) -> PlanRequest {
        PlanRequest::for_day(PlanningDay::between_minutes(
            date,
            config.day.start_minute,
            config.day.end_minute,
        ))
    }

    /// Plans a day.
    ///
    /// # Errors
    /// Validation failures and oversized inputs; see [`PlanError`].
    pub fn plan(&self, request: &PlanRequest) -> PlanResult<DayPlan> {
        validation::validate_input(&request.fixed_tasks, &request.candidates)
            .map_err(PlanError::validation)?;

        for (a, b) in overlapping_pairs(&request.fixed_tasks) {
            warn!(
                target: "u_dayplan::planner",
                first = %request.fixed_tasks[a].name,
                second = %request.fixed_tasks[b].name,
                "fixed tasks overlap"
            );
        }

        let free_blocks = extract_free_blocks(&request.fixed_tasks, request.day.start, request.day.end);
        let assignment = self.solver.solve(&free_blocks, &request.candidates)?;
        let entries = materialize(&free_blocks, &request.candidates, &assignment)?;
        let diagnostics = diagnose(&free_blocks, &request.candidates, &assignment);
        let kpi = PlanKpi::calculate(&free_blocks, &request.candidates, &assignment);

        info!(
            target: "u_dayplan::planner",
            date = %request.day.date(),
            free_blocks = free_blocks.len(),
            free_minutes = kpi.free_minutes,
            candidates = request.candidates.len(),
            scheduled = kpi.scheduled_count,
            total_value = kpi.total_value,
            "day planned"
        );

        Ok(DayPlan {
            day: request.day,
            free_blocks,
            assignment,
            entries,
            diagnostics,
            kpi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SearchMode, TieBreak};
    use crate::models::CategoryCatalog;
    use crate::scheduler::InclusionStatus;
    use crate::time::at_minute;
    use crate::validation::ValidationErrorKind;
    use chrono::NaiveTime;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    fn task(name: &str, start: (u32, u32), end: (u32, u32)) -> FixedTask {
        FixedTask::new(name).with_times(
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    /// Day with a single 90-minute gap at 09:00-10:30.
    fn narrow_day() -> PlanRequest {
        PlanRequest::new(date())
            .with_fixed_task(task("Night", (0, 0), (9, 0)))
            .with_fixed_task(task("Busy", (10, 30), (23, 59)))
    }

    #[test]
    fn test_plan_end_to_end() {
        let request = narrow_day()
            .with_candidate(CandidateActivity::new("Read", 30, 4))
            .with_candidate(CandidateActivity::new("Walk", 45, 3))
            .with_candidate(CandidateActivity::new("Marathon", 300, 10));

        let plan = DayPlanner::new().plan(&request).unwrap();

        // 09:00-10:30 and 23:59-24:00
        assert_eq!(plan.free_blocks.len(), 2);
        assert_eq!(plan.free_blocks[0].capacity_minutes, 90);
        assert_eq!(plan.assignment.total_value, 7);

        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.entries[0].name, "Read");
        assert_eq!(plan.entries[0].start, at_minute(date(), 540));
        assert_eq!(plan.entries[0].end, at_minute(date(), 570));
        assert_eq!(plan.entries[1].name, "Walk");
        assert_eq!(plan.entries[1].end, at_minute(date(), 615));

        assert_eq!(plan.diagnostics[2].status, InclusionStatus::Infeasible);
        assert_eq!(plan.kpi.infeasible_count, 1);
        assert_eq!(plan.kpi.scheduled_minutes, 75);
    }

    #[test]
    fn test_plan_rejects_invalid_input() {
        let request = PlanRequest::new(date())
            .with_fixed_task(task("Backwards", (12, 0), (11, 0)))
            .with_candidate(CandidateActivity::new("Nothing", 0, 1));

        let err = DayPlanner::new().plan(&request).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInterval);
        assert_eq!(errors[1].kind, ValidationErrorKind::NonPositiveDuration);
    }

    #[test]
    fn test_plan_with_no_candidates() {
        let plan = DayPlanner::new().plan(&narrow_day()).unwrap();
        assert_eq!(plan.assignment, Assignment::empty());
        assert!(plan.entries.is_empty());
        assert!(plan.diagnostics.is_empty());
    }

    #[test]
    fn test_plan_fully_booked_day() {
        let request = PlanRequest::new(date())
            .with_fixed_task(task("Morning", (0, 0), (12, 0)))
            .with_fixed_task(task("Afternoon", (11, 0), (23, 59)))
            .with_fixed_task(task("Last", (23, 59), (23, 59)))
            .with_candidate(CandidateActivity::new("Nap", 20, 2));

        // "Last" is zero-length and therefore rejected
        assert!(DayPlanner::new().plan(&request).is_err());

        let request = PlanRequest::for_day(PlanningDay::between_minutes(date(), 0, 1439))
            .with_fixed_task(task("Morning", (0, 0), (12, 0)))
            .with_fixed_task(task("Afternoon", (11, 0), (23, 59)))
            .with_candidate(CandidateActivity::new("Nap", 20, 2));
        let plan = DayPlanner::new().plan(&request).unwrap();
        assert!(plan.free_blocks.is_empty());
        assert_eq!(plan.assignment.total_value, 0);
        assert_eq!(plan.diagnostics[0].status, InclusionStatus::Infeasible);
    }

    #[test]
    fn test_plan_from_category_catalog() {
        let catalog = CategoryCatalog::default();
        let request = PlanRequest::new(date())
            .with_fixed_task(task("Night", (0, 0), (8, 0)))
            .with_fixed_task(task("Day job", (9, 0), (22, 0)))
            .with_fixed_task(task("Sleep", (22, 30), (23, 59)))
            .with_candidates(catalog.candidates(&Default::default()));

        // Gaps: 08:00-09:00 (60), 22:00-22:30 (30), 23:59-24:00 (1)
        let plan = DayPlanner::new().plan(&request).unwrap();
        // Work (60, 10) in the first gap, Chores (30, 8) in the second
        assert_eq!(plan.assignment.total_value, 18);
        assert_eq!(plan.diagnostics[2].status, InclusionStatus::Deprioritized);
    }

    #[test]
    fn test_request_for_uses_config_bounds() {
        let config = PlannerConfig::from_toml_str("[day]\nstart_minute = 480\nend_minute = 1200\n")
            .unwrap();
        let request = DayPlanner::request_for(&config, date())
            .with_candidate(CandidateActivity::new("Focus", 60, 5));
        let plan = DayPlanner::from_config(&config).plan(&request).unwrap();

        assert_eq!(plan.free_blocks.len(), 1);
        assert_eq!(plan.free_blocks[0].start, at_minute(date(), 480));
        assert_eq!(plan.kpi.free_minutes, 720);
        assert_eq!(plan.entries[0].start, at_minute(date(), 480));
    }

    #[test]
    fn test_solver_config_is_applied() {
        let request = narrow_day()
            .with_candidates(vec![CandidateActivity::new("A", 10, 1); 4]);
        let planner = DayPlanner::new().with_solver_config(
            SolverConfig::default()
                .with_search_mode(SearchMode::BranchAndBound)
                .with_tie_break(TieBreak::FirstFound)
                .with_max_candidates(3),
        );
        assert!(matches!(
            planner.plan(&request),
            Err(PlanError::TooManyCandidates { count: 4, limit: 3 })
        ));
    }

    #[test]
    fn test_plan_serializes() {
        let request = narrow_day().with_candidate(CandidateActivity::new("Read", 30, 4));
        let plan = DayPlanner::new().plan(&request).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["entries"][0]["name"], "Read");
        assert_eq!(json["diagnostics"][0]["status"], "scheduled");
        assert_eq!(json["assignment"]["total_value"], 4);
    }
}

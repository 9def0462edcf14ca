//! Free-capacity scheduling.
//!
//! Turns a day's fixed commitments and a list of flexible, weighted
//! activities into a concrete plan. Data only flows forward:
//!
//! ```text
//! fixed tasks ─► free blocks ─► optimal picks ─► scheduled entries
//! ```
//!
//! # Components
//!
//! - [`extract_free_blocks`]: gaps between fixed tasks, in time order.
//! - [`AssignmentSolver`]: exact 0/1 multiple-knapsack by backtracking.
//! - [`materialize`]: packs each block's picks back to back.
//! - [`diagnose`]: scheduled / infeasible / deprioritized per candidate.
//! - [`PlanKpi`]: utilization and value capture.
//! - [`DayPlanner`]: the whole pipeline behind one call.
//!
//! # References
//!
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations", Ch. 6: 0-1 Multiple Knapsack Problem

mod diagnostics;
mod free_blocks;
mod kpi;
mod materialize;
mod planner;
mod solver;

pub use diagnostics::{diagnose, CandidateDiagnostic, InclusionStatus};
pub use free_blocks::{extract_free_blocks, free_blocks_for_day};
pub use kpi::PlanKpi;
pub use materialize::materialize;
pub use planner::{DayPlan, DayPlanner, PlanRequest};
pub use solver::{search_space_estimate, solve, AssignmentSolver};

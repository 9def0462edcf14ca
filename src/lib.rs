//! Personal day planner core for the U-Engine ecosystem.
//!
//! Users enter fixed, time-bound commitments and priority-weighted
//! flexible activities; this crate proposes how to fit the activities into
//! the day's remaining free time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `FixedTask`, `FreeBlock`, `CandidateActivity`,
//!   `Assignment`, `ScheduledEntry`, `CategoryCatalog`
//! - **`scheduler`**: Free-block extraction, exact assignment search,
//!   materialization, diagnostics, KPIs, and the `DayPlanner` pipeline
//! - **`validation`**: Boundary checks (inverted intervals, bad durations)
//! - **`config`**: TOML-loadable planner and solver settings
//! - **`time`**: `HH:MM` parsing and serde adapters
//!
//! # Scale
//!
//! The assignment search is exact and exhaustive, exponential in the number
//! of candidate activities. It is meant for a handful of activities and
//! free windows per day; larger inputs are rejected according to
//! [`config::SolverConfig`].

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod time;
pub mod validation;

pub use error::{PlanError, PlanResult};

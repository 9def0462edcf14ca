//! Planner configuration.
//!
//! Loaded from TOML; every field is optional and falls back to defaults.
//!
//! ```
//! use u_dayplan::config::{PlannerConfig, SearchMode, TieBreak};
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     [day]
//!     start_minute = 420
//!     end_minute = 1320
//!
//!     [solver]
//!     search_mode = "branch_and_bound"
//!     tie_break = "first_found"
//!     max_candidates = 8
//! "#).unwrap();
//!
//! assert_eq!(config.day.start_minute, 420);
//! assert_eq!(config.solver.search_mode, SearchMode::BranchAndBound);
//! assert_eq!(config.solver.tie_break, TieBreak::FirstFound);
//! assert_eq!(config.solver.max_search_space, 20_000_000);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::MINUTES_PER_DAY;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Values parsed but out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How the solver walks the assignment tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Visit every feasible assignment.
    #[default]
    Exhaustive,
    /// Same tree and result, skipping subtrees whose value bound cannot
    /// displace the incumbent.
    BranchAndBound,
}

/// Ranking among assignments with equal total value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer the assignment leaving fewer free blocks with no picks.
    /// Remaining ties go to the first found.
    #[default]
    FewestEmptyBlocks,
    /// Keep the first assignment found in search order.
    FirstFound,
}

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tree walk strategy.
    #[serde(default)]
    pub search_mode: SearchMode,
    /// Ranking among equal-value assignments.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Maximum number of candidate activities accepted.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    /// Maximum `(blocks + 1) ^ candidates` accepted.
    #[serde(default = "default_max_search_space")]
    pub max_search_space: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::default(),
            tie_break: TieBreak::default(),
            max_candidates: default_max_candidates(),
            max_search_space: default_max_search_space(),
        }
    }
}

impl SolverConfig {
    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the candidate limit.
    pub fn with_max_candidates(mut self, limit: usize) -> Self {
        self.max_candidates = limit;
        self
    }

    /// Sets the search space limit.
    pub fn with_max_search_space(mut self, limit: u64) -> Self {
        self.max_search_space = limit;
        self
    }
}

/// Schedulable bounds of the day, in minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConfig {
    /// First schedulable minute.
    #[serde(default)]
    pub start_minute: i64,
    /// End of the day (exclusive), at most 1440.
    #[serde(default = "default_end_minute")]
    pub end_minute: i64,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            start_minute: 0,
            end_minute: default_end_minute(),
        }
    }
}

/// Top-level planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Day bounds.
    #[serde(default)]
    pub day: DayConfig,
    /// Solver settings.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let DayConfig {
            start_minute,
            end_minute,
        } = self.day;

        if start_minute < 0 || end_minute > MINUTES_PER_DAY {
            return Err(ConfigError::Invalid(format!(
                "day bounds must lie within 0..={MINUTES_PER_DAY}, got {start_minute}..{end_minute}"
            )));
        }
        if start_minute >= end_minute {
            return Err(ConfigError::Invalid(format!(
                "day start {start_minute} must precede day end {end_minute}"
            )));
        }
        if self.solver.max_candidates == 0 {
            return Err(ConfigError::Invalid("max_candidates must be positive".into()));
        }
        if self.solver.max_search_space == 0 {
            return Err(ConfigError::Invalid("max_search_space must be positive".into()));
        }
        Ok(())
    }
}

fn default_max_candidates() -> usize {
    12
}

fn default_max_search_space() -> u64 {
    20_000_000
}

fn default_end_minute() -> i64 {
    MINUTES_PER_DAY
}

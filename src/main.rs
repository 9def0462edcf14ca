//! u-dayplan - plan one day from a JSON day file.
//!
//! Reads fixed tasks and candidate activities (or a category list), fits
//! the activities into the free time and prints the plan as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_dayplan::config::PlannerConfig;
use u_dayplan::models::{
    CandidateActivity, Category, CategoryCatalog, DurationOverrides, FixedTask,
};
use u_dayplan::scheduler::{DayPlanner, PlanRequest};

#[derive(Parser, Debug)]
#[command(name = "u-dayplan", about = "Fit flexible activities into a day's free time", version)]
struct Cli {
    /// Day file (JSON) with fixed tasks and candidates
    #[arg(short, long)]
    input: PathBuf,
    /// Planner configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Date to plan (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Contents of a day file.
#[derive(Debug, Default, Deserialize)]
struct DayInput {
    #[serde(default)]
    fixed_tasks: Vec<FixedTask>,
    #[serde(default)]
    candidates: Vec<CandidateActivity>,
    /// Categories contribute one candidate each, after `candidates`.
    #[serde(default)]
    categories: Vec<Category>,
    /// Today-only durations per category name.
    #[serde(default)]
    duration_overrides: DurationOverrides,
}

impl DayInput {
    fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading day file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing day file {}", path.display()))
    }

    fn into_request(self, request: PlanRequest) -> PlanRequest {
        let catalog = self
            .categories
            .into_iter()
            .fold(CategoryCatalog::new(), |catalog, c| {
                catalog.with_category(Category::new(c.name, c.priority, c.default_duration_minutes))
            });

        let mut candidates = self.candidates;
        candidates.extend(catalog.candidates(&self.duration_overrides));

        request
            .with_fixed_tasks(self.fixed_tasks)
            .with_candidates(candidates)
    }
}

fn init_logging(verbose: bool) {
    let default_directives = if verbose { "info,u_dayplan=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let input = DayInput::load(&cli.input)?;
    info!(
        fixed_tasks = input.fixed_tasks.len(),
        candidates = input.candidates.len(),
        categories = input.categories.len(),
        %date,
        "day file loaded"
    );

    let request = input.into_request(DayPlanner::request_for(&config, date));
    let plan = DayPlanner::from_config(&config)
        .plan(&request)
        .context("planning failed")?;

    Ok(serde_json::to_string_pretty(&plan)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = run(cli)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_all_flags() {
        let cli = Cli::parse_from([
            "u-dayplan",
            "--input",
            "day.json",
            "--config",
            "planner.toml",
            "--date",
            "2025-05-01",
            "-v",
        ]);
        assert_eq!(cli.input, PathBuf::from("day.json"));
        assert_eq!(cli.config, Some(PathBuf::from("planner.toml")));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 5, 1));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["u-dayplan"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["u-dayplan", "-i", "day.json", "-d", "May 1st"]).is_err());
    }

    #[test]
    fn test_day_input_into_request() {
        let json = r#"{
            "fixed_tasks": [
                {"name": "Class", "start_time": "09:00", "end_time": "10:30", "location": "Hall B"},
                {"name": "Errand", "start_time": null, "end_time": null}
            ],
            "candidates": [{"name": "Read", "duration_minutes": 30, "priority_value": 4}],
            "categories": [
                {"name": "Work", "priority": 15, "default_duration_minutes": 60},
                {"name": "Chores", "priority": 8, "default_duration_minutes": 30}
            ],
            "duration_overrides": {"Work": 90}
        }"#;
        let input: DayInput = serde_json::from_str(json).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let request = input.into_request(PlanRequest::new(date));

        assert_eq!(request.fixed_tasks.len(), 2);
        assert_eq!(request.candidates.len(), 3);
        assert_eq!(request.candidates[0].name, "Read");
        assert_eq!(request.candidates[1].duration_minutes, 90);
        assert_eq!(request.candidates[1].priority_value, 10); // clamped
        assert_eq!(request.candidates[2].duration_minutes, 30);
    }

    #[test]
    fn test_empty_day_input() {
        let input: DayInput = serde_json::from_str("{}").unwrap();
        let request = input.into_request(PlanRequest::new(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()));
        assert!(request.fixed_tasks.is_empty());
        assert!(request.candidates.is_empty());
    }
}

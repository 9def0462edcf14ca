//! Input validation for day planning.
//!
//! The extractor and solver trust their inputs. This module checks them at
//! the boundary and reports every problem at once:
//! - Fixed tasks whose end is not after their start
//! - Candidates with a non-positive duration
//! - Candidates with a negative or oversized priority value
//! - Candidates without a name
//!
//! Fixed tasks missing one or both times are not errors; they are simply
//! unscheduled and skipped by free-block extraction.

use thiserror::Error;

use crate::models::{CandidateActivity, FixedTask, MAX_PRIORITY_VALUE};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A fixed task ends at or before its start.
    InvalidInterval,
    /// A candidate's duration is zero or negative.
    NonPositiveDuration,
    /// A candidate's priority value is negative.
    NegativePriority,
    /// A candidate's priority value exceeds [`MAX_PRIORITY_VALUE`].
    PriorityTooLarge,
    /// A candidate has an empty name.
    MissingName,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates fixed tasks.
///
/// Only tasks with both times present are checked.
pub fn validate_fixed_tasks(tasks: &[FixedTask]) -> ValidationResult {
    let errors = fixed_task_errors(tasks);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates candidate activities.
pub fn validate_candidates(items: &[CandidateActivity]) -> ValidationResult {
    let errors = candidate_errors(items);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates both lists, collecting every issue.
pub fn validate_input(tasks: &[FixedTask], items: &[CandidateActivity]) -> ValidationResult {
    let mut errors = fixed_task_errors(tasks);
    errors.extend(candidate_errors(items));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn fixed_task_errors(tasks: &[FixedTask]) -> Vec<ValidationError> {
    tasks
        .iter()
        .filter_map(|task| {
            let (start, end) = task.interval()?;
            (end <= start).then(|| {
                ValidationError::new(
                    ValidationErrorKind::InvalidInterval,
                    format!(
                        "Fixed task '{}' ends at {} which is not after its start {}",
                        task.name,
                        crate::time::format_hhmm(end),
                        crate::time::format_hhmm(start)
                    ),
                )
            })
        })
        .collect()
}

fn candidate_errors(items: &[CandidateActivity]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Candidate #{idx} has no name"),
            ));
        }
        if item.duration_minutes <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Candidate '{}' has non-positive duration {} min",
                    item.name, item.duration_minutes
                ),
            ));
        }
        if item.priority_value < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!(
                    "Candidate '{}' has negative priority value {}",
                    item.name, item.priority_value
                ),
            ));
        }
        if item.priority_value > MAX_PRIORITY_VALUE {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityTooLarge,
                format!(
                    "Candidate '{}' has priority value {} above the maximum {}",
                    item.name, item.priority_value, MAX_PRIORITY_VALUE
                ),
            ));
        }
    }

    errors
}

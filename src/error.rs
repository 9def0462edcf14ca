//! Error types for planning.
//!
//! Infeasibility is not an error: a candidate that fits nowhere is simply
//! absent from the assignment. Errors are reserved for malformed input,
//! inputs too large for exact search, and inconsistent assignments.

use thiserror::Error;
use tracing::warn;

use crate::validation::ValidationError;

/// Result alias for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Planning failure.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Input failed boundary validation. Holds every issue found.
    #[error("invalid planning input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// More candidates than exact search is allowed to handle.
    #[error("too many candidate activities: {count} (limit: {limit})")]
    TooManyCandidates { count: usize, limit: usize },

    /// Worst-case search tree exceeds the configured bound.
    #[error(
        "search space too large: {items} candidates over {blocks} free blocks \
         (estimate {estimate}, limit {limit})"
    )]
    SearchSpaceTooLarge {
        items: usize,
        blocks: usize,
        estimate: u64,
        limit: u64,
    },

    /// An assignment references a candidate or block that does not exist.
    #[error("pick references unknown {kind} index {index}")]
    InvalidPick { kind: &'static str, index: usize },
}

impl PlanError {
    /// Validation failure carrying every issue found.
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        warn!(target: "u_dayplan::validation", count = errors.len(), "planning input rejected");
        PlanError::Validation(errors)
    }

    /// Candidate count above the configured limit.
    pub fn too_many_candidates(count: usize, limit: usize) -> Self {
        warn!(target: "u_dayplan::solver", count, limit, "too many candidates for exact search");
        PlanError::TooManyCandidates { count, limit }
    }

    /// Search tree estimate above the configured bound.
    pub fn search_space_too_large(items: usize, blocks: usize, estimate: u64, limit: u64) -> Self {
        warn!(
            target: "u_dayplan::solver",
            items, blocks, estimate, limit,
            "search space exceeds configured bound"
        );
        PlanError::SearchSpaceTooLarge {
            items,
            blocks,
            estimate,
            limit,
        }
    }

    /// Pick referencing a missing `kind` ("block" or "candidate") at `index`.
    pub fn invalid_pick(kind: &'static str, index: usize) -> Self {
        warn!(target: "u_dayplan::materialize", kind, index, "assignment references unknown index");
        PlanError::InvalidPick { kind, index }
    }

    /// Validation issues, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            PlanError::Validation(errors) => Some(errors.as_slice()),
            _ => None,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = PlanError::validation(vec![
            ValidationError::new(ValidationErrorKind::InvalidInterval, "A ends before it starts"),
            ValidationError::new(ValidationErrorKind::NonPositiveDuration, "B has no duration"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid planning input: A ends before it starts; B has no duration"
        );
        assert_eq!(err.validation_errors().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_limit_errors_display() {
        let err = PlanError::too_many_candidates(20, 12);
        assert_eq!(err.to_string(), "too many candidate activities: 20 (limit: 12)");
        assert!(err.validation_errors().is_none());

        let err = PlanError::invalid_pick("block", 9);
        assert_eq!(err.to_string(), "pick references unknown block index 9");
    }
}

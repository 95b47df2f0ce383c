//! Contest scoring formats
//!
//! A `ScoreFormat` turns a participation's stored per-problem data into the
//! breakdown shown on the scoreboard. The output is aligned positionally to
//! the ordered problem list, so callers must always go through
//! [`checked_breakdown`], which enforces the length contract instead of
//! trusting the format blindly.

mod default_format;

pub use default_format::DefaultFormat;

use serde::Serialize;

use crate::constants::DEFAULT_FORMAT_NAME;
use crate::models::{ContestParticipation, ContestProblem};

/// One participation's result on one problem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemScore {
    pub points: f64,
    /// Seconds from the participation start to the scoring submission
    pub time: Option<i64>,
    pub solved: bool,
    pub partial: bool,
}

/// Scoring format failures
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("unknown scoring format: {0}")]
    UnknownFormat(String),

    #[error("invalid scoring format config: {0}")]
    InvalidConfig(String),

    #[error("format produced {actual} breakdown entries for {expected} problems")]
    BreakdownMismatch { expected: usize, actual: usize },
}

/// A pluggable contest scoring format
pub trait ScoreFormat: Send + Sync {
    /// Produce one entry per problem, in problem order. `None` means the
    /// participation never attempted that problem.
    fn problem_breakdown(
        &self,
        participation: &ContestParticipation,
        problems: &[ContestProblem],
    ) -> Vec<Option<ProblemScore>>;
}

/// Resolve a contest's configured format by name
pub fn format_for(
    name: &str,
    config: &serde_json::Value,
) -> Result<Box<dyn ScoreFormat>, ScoreError> {
    match name {
        DEFAULT_FORMAT_NAME | "" => Ok(Box::new(DefaultFormat::from_config(config, true)?)),
        // IOI scoring is the default breakdown without cumulative time
        "ioi" => Ok(Box::new(DefaultFormat::from_config(config, false)?)),
        other => Err(ScoreError::UnknownFormat(other.to_string())),
    }
}

/// Call the format and verify the positional-alignment invariant
pub fn checked_breakdown(
    format: &dyn ScoreFormat,
    participation: &ContestParticipation,
    problems: &[ContestProblem],
) -> Result<Vec<Option<ProblemScore>>, ScoreError> {
    let breakdown = format.problem_breakdown(participation, problems);
    if breakdown.len() != problems.len() {
        return Err(ScoreError::BreakdownMismatch {
            expected: problems.len(),
            actual: breakdown.len(),
        });
    }
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    struct TruncatingFormat;

    impl ScoreFormat for TruncatingFormat {
        fn problem_breakdown(
            &self,
            _participation: &ContestParticipation,
            _problems: &[ContestProblem],
        ) -> Vec<Option<ProblemScore>> {
            vec![]
        }
    }

    fn participation() -> ContestParticipation {
        ContestParticipation {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            profile_id: Uuid::new_v4(),
            score: 0.0,
            cumtime: 0,
            is_disqualified: false,
            r#virtual: 0,
            format_data: serde_json::json!({}),
            username: "alice".to_string(),
        }
    }

    fn problem(order: i32) -> ContestProblem {
        ContestProblem {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            points: 100,
            partial: false,
            display_order: order,
            problem_code: format!("p{order}"),
            problem_name: format!("P{order}"),
        }
    }

    #[test]
    fn length_mismatch_is_a_defined_error() {
        let err = checked_breakdown(&TruncatingFormat, &participation(), &[problem(0), problem(1)])
            .unwrap_err();
        match err {
            ScoreError::BreakdownMismatch { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_format_name_is_rejected() {
        let err = format_for("topcoder", &serde_json::json!({})).err().unwrap();
        assert!(matches!(err, ScoreError::UnknownFormat(name) if name == "topcoder"));
    }

    #[test]
    fn empty_format_name_falls_back_to_default() {
        assert!(format_for("", &serde_json::json!({})).is_ok());
    }
}

//! Default scoring format
//!
//! Reads the judge's per-problem results out of the participation's stored
//! format data: a JSON object keyed by contest-problem id, each value
//! carrying the points earned and the submission time in seconds.

use serde::Deserialize;

use super::{ProblemScore, ScoreError, ScoreFormat};
use crate::models::{ContestParticipation, ContestProblem};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DefaultFormatConfig {
    cumtime: Option<bool>,
}

/// Highest-submission-wins scoring with optional cumulative time
#[derive(Debug, Clone)]
pub struct DefaultFormat {
    cumtime: bool,
}

#[derive(Debug, Deserialize)]
struct StoredResult {
    #[serde(default)]
    points: f64,
    #[serde(default)]
    time: Option<i64>,
}

impl DefaultFormat {
    pub fn from_config(
        config: &serde_json::Value,
        cumtime_default: bool,
    ) -> Result<Self, ScoreError> {
        let parsed: DefaultFormatConfig = serde_json::from_value(config.clone())
            .map_err(|e| ScoreError::InvalidConfig(e.to_string()))?;
        Ok(Self {
            cumtime: parsed.cumtime.unwrap_or(cumtime_default),
        })
    }
}

impl ScoreFormat for DefaultFormat {
    fn problem_breakdown(
        &self,
        participation: &ContestParticipation,
        problems: &[ContestProblem],
    ) -> Vec<Option<ProblemScore>> {
        problems
            .iter()
            .map(|problem| {
                let stored = participation
                    .format_data
                    .get(problem.id.to_string())
                    .and_then(|v| serde_json::from_value::<StoredResult>(v.clone()).ok())?;
                let total = f64::from(problem.points);
                Some(ProblemScore {
                    points: stored.points,
                    time: if self.cumtime { stored.time } else { None },
                    solved: total > 0.0 && stored.points >= total,
                    partial: problem.partial && stored.points > 0.0 && stored.points < total,
                })
            })
            .collect()
    }
}

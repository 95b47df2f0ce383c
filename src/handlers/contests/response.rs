//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::ProblemScore;

/// Contest list entry, keyed by contest key in the response mapping
#[derive(Debug, Serialize)]
pub struct ContestSummary {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Rendered `days:hours:minutes`, `null` for unlimited windows
    pub time_limit: Option<String>,
    pub labels: Vec<String>,
}

/// Contest detail response
#[derive(Debug, Serialize)]
pub struct ContestDetailResponse {
    /// Whole seconds here, unlike the lossy repr on the list endpoint
    pub time_limit: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub tags: Vec<String>,
    pub is_rated: bool,
    pub rate_all: bool,
    pub has_rating: bool,
    pub rating_floor: Option<i32>,
    pub rating_ceiling: Option<i32>,
    pub format: ContestFormat,
    /// Empty unless the requester may see the problem list
    pub problems: Vec<ContestProblemSummary>,
    /// Empty unless the requester may see the full scoreboard
    pub rankings: Vec<RankingEntry>,
}

/// Scoring format block
#[derive(Debug, Serialize)]
pub struct ContestFormat {
    pub name: String,
    pub config: serde_json::Value,
}

/// One attached problem
#[derive(Debug, Serialize)]
pub struct ContestProblemSummary {
    pub points: i32,
    pub partial: bool,
    pub name: String,
    pub code: String,
}

/// One scoreboard row, ordered by (score desc, cumtime asc)
#[derive(Debug, Serialize)]
pub struct RankingEntry {
    pub user: String,
    pub points: f64,
    pub cumtime: i64,
    pub is_disqualified: bool,
    /// Positionally aligned to the problems array
    pub solutions: Vec<Option<ProblemScore>>,
}

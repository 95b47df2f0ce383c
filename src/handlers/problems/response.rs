//! Problem response DTOs

use serde::Serialize;

/// Problem list entry, keyed by problem code in the response mapping
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub points: f64,
    pub partial: bool,
    pub name: String,
    pub group: String,
}

/// Problem detail response. The scoring fields are omitted entirely (not
/// nulled) while the requester is inside a live contest.
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    pub name: String,
    pub authors: Vec<String>,
    pub group: String,
    /// Seconds
    pub time_limit: f64,
    /// Kilobytes
    pub memory_limit: i64,
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial: Option<bool>,
}

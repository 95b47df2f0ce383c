//! User response DTOs

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

/// User list entry, keyed by username in the response mapping
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub points: f64,
    pub performance_points: f64,
    pub rank: String,
}

/// User detail response
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub points: f64,
    pub performance_points: f64,
    pub rank: String,
    /// Codes of fully solved public, non-organization-private problems
    pub solved_problems: Vec<String>,
    pub organizations: Vec<Uuid>,
    /// Real name; present only for requesters holding the view-name
    /// capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub contests: ContestsBlock,
}

/// Rating block of the user detail response
#[derive(Debug, Serialize)]
pub struct ContestsBlock {
    pub current_rating: Option<i32>,
    pub volatility: Option<i32>,
    /// Keyed by contest key; empty for unlisted profiles
    pub history: BTreeMap<String, RatingHistoryEntry>,
}

/// One rating-history entry; null for unrated runs
#[derive(Debug, Serialize)]
pub struct RatingHistoryEntry {
    pub rating: Option<i32>,
    pub volatility: Option<i32>,
}

/// One row of the user-submissions mapping, keyed by submission id
#[derive(Debug, Serialize)]
pub struct UserSubmissionSummary {
    pub problem: String,
    pub time: Option<f64>,
    pub memory: Option<f64>,
    pub points: Option<f64>,
    pub language: String,
    pub status: String,
    pub result: Option<String>,
}

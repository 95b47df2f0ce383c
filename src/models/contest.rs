//! Contest models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Contest database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: Uuid,
    pub key: String,
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub time_limit_secs: Option<i64>,
    pub tags: Vec<String>,
    pub is_visible: bool,
    pub is_private: bool,
    pub is_organization_private: bool,
    pub is_scoreboard_public: bool,
    pub private_contestants: Vec<Uuid>,
    pub organizations: Vec<Uuid>,
    pub organizers: Vec<Uuid>,
    pub is_rated: bool,
    pub rate_all: bool,
    pub rating_floor: Option<i32>,
    pub rating_ceiling: Option<i32>,
    pub format_name: String,
    pub format_config: serde_json::Value,
}

impl Contest {
    /// Check if the contest window has closed
    pub fn ended(&self) -> bool {
        Utc::now() >= self.end_time
    }

    /// Per-participant time limit, if the contest has one
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::seconds)
    }
}

/// A problem attached to a contest, joined with the problem's display fields.
///
/// `display_order` drives both the problems array and the positional
/// alignment of score breakdowns, so every fetch must order by it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestProblem {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub problem_id: Uuid,
    pub points: i32,
    pub partial: bool,
    pub display_order: i32,
    pub problem_code: String,
    pub problem_name: String,
}

/// A profile's run of a contest, joined with the owner's username
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestParticipation {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub profile_id: Uuid,
    pub score: f64,
    pub cumtime: i64,
    pub is_disqualified: bool,
    /// 0 marks the real, scored run; positive values are practice runs
    pub r#virtual: i32,
    pub format_data: serde_json::Value,
    pub username: String,
}

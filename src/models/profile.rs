//! Profile model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Profile database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub points: f64,
    pub performance_points: f64,
    pub display_rank: String,
    /// Unlisted profiles are excluded from the user list and rating history
    pub is_unlisted: bool,
    pub organizations: Vec<Uuid>,
    pub capabilities: Vec<String>,
    /// Non-null while the profile is inside a live contest window; this
    /// suppresses problem point/type disclosure and submission detail
    pub current_contest_id: Option<Uuid>,
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
}

//! Problem model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub group_name: String,
    pub authors: Vec<Uuid>,
    pub types: Vec<String>,
    /// Time limit in seconds
    pub time_limit: f64,
    /// Memory limit in kilobytes
    pub memory_limit: i64,
    pub allowed_languages: Vec<String>,
    pub points: f64,
    pub partial: bool,
    pub is_public: bool,
    pub is_organization_private: bool,
    pub organizations: Vec<Uuid>,
}

impl Problem {
    /// Check if a profile authored this problem
    pub fn is_authored_by(&self, profile_id: Uuid) -> bool {
        self.authors.contains(&profile_id)
    }
}

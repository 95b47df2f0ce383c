//! Submission models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub problem_id: Uuid,
    /// Participation the submission was made under, if inside a contest
    pub participation_id: Option<Uuid>,
    pub time: Option<f64>,
    pub memory: Option<f64>,
    pub points: Option<f64>,
    pub language: String,
    pub status: String,
    pub result: Option<String>,
    #[serde(skip_serializing)]
    pub source: String,
    pub case_points: f64,
    pub case_total: f64,
    pub submitted_at: DateTime<Utc>,
}

/// Per-test-case result row, ordered by case number
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionTestCase {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub case_number: i32,
    pub status: String,
    pub time: f64,
    pub memory: f64,
    pub points: f64,
    pub total: f64,
}

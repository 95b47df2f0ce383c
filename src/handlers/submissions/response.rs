//! Submission response DTOs

use serde::Serialize;

/// Full submission detail
#[derive(Debug, Serialize)]
pub struct SubmissionDetailResponse {
    pub problem: String,
    pub user: String,
    pub time: Option<f64>,
    pub memory: Option<f64>,
    pub points: Option<f64>,
    /// The problem's full point value, next to the earned points
    pub total: f64,
    pub language: String,
    pub status: String,
    pub result: Option<String>,
    /// Ordered by case number
    pub cases: Vec<SubmissionCaseResult>,
}

/// Per-test-case result
#[derive(Debug, Serialize)]
pub struct SubmissionCaseResult {
    pub case_number: i32,
    pub status: String,
    pub time: f64,
    pub memory: f64,
    pub points: f64,
    pub total: f64,
}

/// Submission source response
#[derive(Debug, Serialize)]
pub struct SubmissionSourceResponse {
    pub source: String,
}

//! Submission repository

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Contest, Submission, SubmissionTestCase},
};

/// Row for the user-submissions listing; problem visibility is baked into
/// the query itself, matching how the projection is specified.
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionListingRow {
    pub id: Uuid,
    pub problem_code: String,
    pub time: Option<f64>,
    pub memory: Option<f64>,
    pub points: Option<f64>,
    pub language: String,
    pub status: String,
    pub result: Option<String>,
}

/// Repository for submission read operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Find submission by id
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// A profile's submissions on public, non-organization-private problems
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: &Uuid,
    ) -> AppResult<Vec<SubmissionListingRow>> {
        let rows = sqlx::query_as::<_, SubmissionListingRow>(
            r#"
            SELECT
                s.id, p.code AS problem_code, s.time, s.memory, s.points,
                s.language, s.status, s.result
            FROM submissions s
            JOIN problems p ON p.id = s.problem_id
            WHERE s.profile_id = $1
              AND p.is_public = TRUE
              AND p.is_organization_private = FALSE
            ORDER BY s.submitted_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Per-test-case results ordered by case number
    pub async fn test_cases(
        pool: &PgPool,
        submission_id: &Uuid,
    ) -> AppResult<Vec<SubmissionTestCase>> {
        let cases = sqlx::query_as::<_, SubmissionTestCase>(
            r#"
            SELECT * FROM submission_test_cases
            WHERE submission_id = $1
            ORDER BY case_number
            "#,
        )
        .bind(submission_id)
        .fetch_all(pool)
        .await?;

        Ok(cases)
    }

    /// The contest a participation belongs to, for submissions made inside
    /// a contest window
    pub async fn contest_for_participation(
        pool: &PgPool,
        participation_id: &Uuid,
    ) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            SELECT c.*
            FROM contests c
            JOIN contest_participations cp ON cp.contest_id = c.id
            WHERE cp.id = $1
            "#,
        )
        .bind(participation_id)
        .fetch_optional(pool)
        .await?;

        Ok(contest)
    }
}

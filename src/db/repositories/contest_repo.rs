//! Contest repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Contest, ContestParticipation, ContestProblem},
};

/// Repository for contest read operations
pub struct ContestRepository;

impl ContestRepository {
    /// Fetch all contests flagged visible. The privacy conjunction is
    /// applied in Rust by the visibility policy, not here. The description
    /// column is deferred (blanked) since list projections never use it.
    pub async fn list_visible(pool: &PgPool) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT
                id, key, name, '' AS description, start_time, end_time,
                time_limit_secs, tags, is_visible, is_private,
                is_organization_private, is_scoreboard_public,
                private_contestants, organizations, organizers, is_rated,
                rate_all, rating_floor, rating_ceiling, format_name,
                format_config
            FROM contests
            WHERE is_visible = TRUE
            ORDER BY key
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(contests)
    }

    /// Find contest by its public key
    pub async fn find_by_key(pool: &PgPool, key: &str) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE key = $1"#)
            .bind(key)
            .fetch_optional(pool)
            .await?;

        Ok(contest)
    }

    /// Find contest by row id
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(contest)
    }

    /// Attached problems in display order. Breakdown alignment depends on
    /// this ordering, so it must never change.
    pub async fn problems_for(pool: &PgPool, contest_id: &Uuid) -> AppResult<Vec<ContestProblem>> {
        let problems = sqlx::query_as::<_, ContestProblem>(
            r#"
            SELECT
                cp.id, cp.contest_id, cp.problem_id, cp.points, cp.partial,
                cp.display_order, p.code AS problem_code, p.name AS problem_name
            FROM contest_problems cp
            JOIN problems p ON p.id = cp.problem_id
            WHERE cp.contest_id = $1
            ORDER BY cp.display_order
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Real (non-virtual) runs by listed profiles, joined with usernames.
    /// Ranking order is applied by the contest service.
    pub async fn real_participations(
        pool: &PgPool,
        contest_id: &Uuid,
    ) -> AppResult<Vec<ContestParticipation>> {
        let participations = sqlx::query_as::<_, ContestParticipation>(
            r#"
            SELECT
                cp.id, cp.contest_id, cp.profile_id, cp.score, cp.cumtime,
                cp.is_disqualified, cp.virtual, cp.format_data,
                pr.username AS username
            FROM contest_participations cp
            JOIN profiles pr ON pr.id = cp.profile_id
            WHERE cp.contest_id = $1 AND cp.virtual = 0 AND pr.is_unlisted = FALSE
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(participations)
    }

    /// Whether any rating records exist for the contest
    pub async fn has_ratings(pool: &PgPool, contest_id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM ratings WHERE contest_id = $1)"#,
        )
        .bind(contest_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}

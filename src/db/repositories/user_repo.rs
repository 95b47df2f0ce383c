//! User repository

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Profile, Rating},
};

/// One rating-history row: the profile's real run in a fully public
/// contest, with the rating snapshot if the contest was rated.
#[derive(Debug, Clone, FromRow)]
pub struct RatingHistoryRow {
    pub contest_key: String,
    pub rating: Option<i32>,
    pub volatility: Option<i32>,
}

/// Repository for profile and rating read operations
pub struct UserRepository;

impl UserRepository {
    /// All listed profiles; unlisted ones never appear in the user list
    pub async fn list_listed(pool: &PgPool) -> AppResult<Vec<Profile>> {
        let profiles = sqlx::query_as::<_, Profile>(
            r#"SELECT * FROM profiles WHERE is_unlisted = FALSE ORDER BY username"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(profiles)
    }

    /// Find profile by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(profile)
    }

    /// Find profile by row id
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(profile)
    }

    /// Find profile by its API token (session authentication)
    pub async fn find_by_api_token(pool: &PgPool, token: &str) -> AppResult<Option<Profile>> {
        let profile =
            sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles WHERE api_token = $1"#)
                .bind(token)
                .fetch_optional(pool)
                .await?;

        Ok(profile)
    }

    /// Distinct codes of publicly visible problems the profile has fully
    /// solved (full case credit required, not merely a positive score)
    pub async fn solved_problem_codes(pool: &PgPool, profile_id: &Uuid) -> AppResult<Vec<String>> {
        let codes: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT p.code
            FROM submissions s
            JOIN problems p ON p.id = s.problem_id
            WHERE s.profile_id = $1
              AND s.case_total > 0
              AND s.case_points = s.case_total
              AND p.is_public = TRUE
              AND p.is_organization_private = FALSE
            ORDER BY p.code
            "#,
        )
        .bind(profile_id)
        .fetch_all(pool)
        .await?;

        Ok(codes)
    }

    /// Most recent rating record, i.e. the profile's current rating
    pub async fn last_rating(pool: &PgPool, profile_id: &Uuid) -> AppResult<Option<Rating>> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            SELECT * FROM ratings
            WHERE profile_id = $1
            ORDER BY last_rated DESC
            LIMIT 1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(pool)
        .await?;

        Ok(rating)
    }

    /// Rating history over real runs in visible, non-private,
    /// non-organization-private contests, keyed by contest
    pub async fn rating_history(
        pool: &PgPool,
        profile_id: &Uuid,
    ) -> AppResult<Vec<RatingHistoryRow>> {
        let rows = sqlx::query_as::<_, RatingHistoryRow>(
            r#"
            SELECT c.key AS contest_key, r.rating, r.volatility
            FROM contest_participations cp
            JOIN contests c ON c.id = cp.contest_id
            LEFT JOIN ratings r
                ON r.contest_id = cp.contest_id AND r.profile_id = cp.profile_id
            WHERE cp.profile_id = $1
              AND cp.virtual = 0
              AND c.is_visible = TRUE
              AND c.is_private = FALSE
              AND c.is_organization_private = FALSE
            ORDER BY c.key
            "#,
        )
        .bind(profile_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

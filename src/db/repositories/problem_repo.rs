//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Problem};

/// Repository for problem read operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Fetch problem candidates for the list projection, optionally
    /// narrowed by a full-text query. Accessibility filtering happens in
    /// Rust via the visibility policy. Descriptions are deferred.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT
                id, code, name, '' AS description, group_name, authors, types,
                time_limit, memory_limit, allowed_languages, points, partial,
                is_public, is_organization_private, organizations
            FROM problems
            WHERE $1::text IS NULL
               OR to_tsvector('english', name || ' ' || description)
                  @@ plainto_tsquery('english', $1)
            ORDER BY code
            "#,
        )
        .bind(search)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Find problem by its public code
    pub async fn find_by_code(pool: &PgPool, code: &str) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE code = $1"#)
            .bind(code)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by row id
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Usernames for a problem's author set, in username order
    pub async fn author_usernames(pool: &PgPool, authors: &[Uuid]) -> AppResult<Vec<String>> {
        let usernames: Vec<String> = sqlx::query_scalar(
            r#"SELECT username FROM profiles WHERE id = ANY($1) ORDER BY username"#,
        )
        .bind(authors)
        .fetch_all(pool)
        .await?;

        Ok(usernames)
    }
}

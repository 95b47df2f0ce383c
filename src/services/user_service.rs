//! User projections

use std::collections::BTreeMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        submission_repo::SubmissionListingRow, user_repo::RatingHistoryRow, SubmissionRepository,
        UserRepository,
    },
    error::{AppError, AppResult},
    handlers::users::response::{
        ContestsBlock, RatingHistoryEntry, UserDetailResponse, UserSubmissionSummary, UserSummary,
    },
    models::{Capability, Identity, Profile, Rating},
};

/// User read-model service
pub struct UserService;

impl UserService {
    /// All listed profiles, keyed by username
    pub async fn list(pool: &PgPool) -> AppResult<BTreeMap<String, UserSummary>> {
        let profiles = UserRepository::list_listed(pool).await?;

        Ok(profiles
            .into_iter()
            .map(|p| {
                let summary = UserSummary {
                    points: p.points,
                    performance_points: p.performance_points,
                    rank: p.display_rank.clone(),
                };
                (p.username, summary)
            })
            .collect())
    }

    /// User detail; unlike contests and problems there is no accessibility
    /// gate here, only existence
    pub async fn detail(
        pool: &PgPool,
        identity: &Identity,
        username: &str,
    ) -> AppResult<UserDetailResponse> {
        let profile = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let solved = UserRepository::solved_problem_codes(pool, &profile.id).await?;
        let last_rating = UserRepository::last_rating(pool, &profile.id).await?;
        let history = if profile.is_unlisted {
            vec![]
        } else {
            UserRepository::rating_history(pool, &profile.id).await?
        };

        Ok(Self::shape_detail(
            &profile,
            solved,
            last_rating.as_ref(),
            history,
            identity,
        ))
    }

    /// A profile's submissions on publicly visible problems, keyed by
    /// submission id. Deliberately looser than submission detail: there is
    /// no per-submission accessibility check and no contest masking here,
    /// only the problem-visibility filter baked into the query.
    pub async fn submissions(
        pool: &PgPool,
        username: &str,
    ) -> AppResult<BTreeMap<Uuid, UserSubmissionSummary>> {
        let profile = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let rows = SubmissionRepository::list_for_profile(pool, &profile.id).await?;
        Ok(Self::summarize_submissions(rows))
    }

    /// Pure listing projection. Takes no identity: every fetched row is
    /// shown as-is.
    fn summarize_submissions(
        rows: Vec<SubmissionListingRow>,
    ) -> BTreeMap<Uuid, UserSubmissionSummary> {
        rows.into_iter()
            .map(|r| {
                let summary = UserSubmissionSummary {
                    problem: r.problem_code,
                    time: r.time,
                    memory: r.memory,
                    points: r.points,
                    language: r.language,
                    status: r.status,
                    result: r.result,
                };
                (r.id, summary)
            })
            .collect()
    }

    /// Pure detail projection
    fn shape_detail(
        profile: &Profile,
        solved: Vec<String>,
        last_rating: Option<&Rating>,
        history: Vec<RatingHistoryRow>,
        identity: &Identity,
    ) -> UserDetailResponse {
        UserDetailResponse {
            points: profile.points,
            performance_points: profile.performance_points,
            rank: profile.display_rank.clone(),
            solved_problems: solved,
            organizations: profile.organizations.clone(),
            name: identity
                .has(Capability::ViewName)
                .then(|| profile.full_name.clone()),
            contests: ContestsBlock {
                current_rating: last_rating.map(|r| r.rating),
                volatility: last_rating.map(|r| r.volatility),
                history: history
                    .into_iter()
                    .map(|row| {
                        (
                            row.contest_key,
                            RatingHistoryEntry {
                                rating: row.rating,
                                volatility: row.volatility,
                            },
                        )
                    })
                    .collect(),
            },
        }
    }
}

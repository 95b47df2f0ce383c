//! Submission projections
//!
//! Detail and source share the same masking gate: an inaccessible
//! submission, or any requester currently inside a contest, gets an empty
//! object back instead of an error. Only a genuinely unknown id is a 404.

use anyhow::anyhow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::submissions::response::{
        SubmissionCaseResult, SubmissionDetailResponse, SubmissionSourceResponse,
    },
    models::{Contest, Identity, Problem, Submission},
    policy,
};

/// Submission read-model service
pub struct SubmissionService;

impl SubmissionService {
    /// Full submission detail; `None` means masked
    pub async fn detail(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
    ) -> AppResult<Option<SubmissionDetailResponse>> {
        let (submission, problem, contest) = Self::fetch_context(pool, id).await?;

        if policy::submission_masked(&submission, &problem, contest.as_ref(), identity) {
            return Ok(None);
        }

        let owner = UserRepository::find_by_id(pool, &submission.profile_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(anyhow!("submission {id} references a missing profile"))
            })?;
        let cases = SubmissionRepository::test_cases(pool, id).await?;

        Ok(Some(SubmissionDetailResponse {
            problem: problem.code,
            user: owner.username,
            time: submission.time,
            memory: submission.memory,
            points: submission.points,
            total: problem.points,
            language: submission.language,
            status: submission.status,
            result: submission.result,
            cases: cases
                .into_iter()
                .map(|c| SubmissionCaseResult {
                    case_number: c.case_number,
                    status: c.status,
                    time: c.time,
                    memory: c.memory,
                    points: c.points,
                    total: c.total,
                })
                .collect(),
        }))
    }

    /// Submission source; `None` means masked, same gate as detail
    pub async fn source(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
    ) -> AppResult<Option<SubmissionSourceResponse>> {
        let (submission, problem, contest) = Self::fetch_context(pool, id).await?;

        if policy::submission_masked(&submission, &problem, contest.as_ref(), identity) {
            return Ok(None);
        }

        Ok(Some(SubmissionSourceResponse {
            source: Self::normalize_source(&submission.source),
        }))
    }

    /// Fetch the submission plus the rows the accessibility check needs
    async fn fetch_context(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<(Submission, Problem, Option<Contest>)> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let problem = ProblemRepository::find_by_id(pool, &submission.problem_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(anyhow!("submission {id} references a missing problem"))
            })?;

        let contest = match submission.participation_id {
            Some(participation_id) => {
                SubmissionRepository::contest_for_participation(pool, &participation_id).await?
            }
            None => None,
        };

        Ok((submission, problem, contest))
    }

    /// Strip carriage returns so clients always get `\n` line endings
    fn normalize_source(source: &str) -> String {
        source.replace('\r', "")
    }
}

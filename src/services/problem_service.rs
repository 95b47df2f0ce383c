//! Problem projections

use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::{
    db::repositories::ProblemRepository,
    error::{AppError, AppResult},
    handlers::problems::response::{ProblemDetailResponse, ProblemSummary},
    models::{Identity, Problem},
    policy,
};

/// Problem read-model service
pub struct ProblemService;

impl ProblemService {
    /// Problems visible to the identity, keyed by code. The search filter
    /// is applied only when the feature flag is on and the query is
    /// non-empty after trimming.
    pub async fn list(
        pool: &PgPool,
        identity: &Identity,
        search: Option<&str>,
        enable_fts: bool,
    ) -> AppResult<BTreeMap<String, ProblemSummary>> {
        let query = if enable_fts {
            search.map(str::trim).filter(|q| !q.is_empty())
        } else {
            None
        };
        let problems = ProblemRepository::list(pool, query).await?;

        Ok(problems
            .into_iter()
            .filter(|p| policy::problem_accessible(p, identity))
            .map(|p| {
                let summary = ProblemSummary {
                    points: p.points,
                    partial: p.partial,
                    name: p.name.clone(),
                    group: p.group_name.clone(),
                };
                (p.code, summary)
            })
            .collect())
    }

    /// Problem detail; 404 when the code is unknown or the problem is not
    /// accessible to the identity
    pub async fn detail(
        pool: &PgPool,
        identity: &Identity,
        code: &str,
    ) -> AppResult<ProblemDetailResponse> {
        let problem = ProblemRepository::find_by_code(pool, code)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        if !policy::problem_accessible(&problem, identity) {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let authors = ProblemRepository::author_usernames(pool, &problem.authors).await?;
        Ok(Self::shape_detail(&problem, authors, identity))
    }

    /// Pure detail projection: while the requester is in a contest, the
    /// types/points/partial fields vanish from the response
    fn shape_detail(
        problem: &Problem,
        authors: Vec<String>,
        identity: &Identity,
    ) -> ProblemDetailResponse {
        let suppress = policy::suppress_problem_scoring_fields(identity);
        ProblemDetailResponse {
            name: problem.name.clone(),
            authors,
            group: problem.group_name.clone(),
            time_limit: problem.time_limit,
            memory_limit: problem.memory_limit,
            languages: problem.allowed_languages.clone(),
            types: (!suppress).then(|| problem.types.clone()),
            points: (!suppress).then_some(problem.points),
            partial: (!suppress).then_some(problem.partial),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::Uuid;

    use super::*;
    use crate::models::ActingUser;

    fn problem() -> Problem {
        Problem {
            id: Uuid::new_v4(),
            code: "aplusb".to_string(),
            name: "A Plus B".to_string(),
            description: String::new(),
            group_name: "Beginner".to_string(),
            authors: vec![],
            types: vec!["Math".to_string()],
            time_limit: 2.0,
            memory_limit: 262144,
            allowed_languages: vec!["rust".to_string(), "cpp".to_string()],
            points: 100.0,
            partial: true,
            is_public: true,
            is_organization_private: false,
            organizations: vec![],
        }
    }

    fn idle_user() -> Identity {
        Identity::User(ActingUser {
            profile_id: Uuid::new_v4(),
            username: "alice".to_string(),
            capabilities: HashSet::new(),
            organizations: vec![],
            current_contest_id: None,
        })
    }

    #[test]
    fn idle_requester_sees_scoring_fields() {
        let detail = ProblemService::shape_detail(&problem(), vec![], &idle_user());
        assert_eq!(detail.points, Some(100.0));
        assert_eq!(detail.partial, Some(true));
        assert_eq!(detail.types.as_deref(), Some(&["Math".to_string()][..]));
    }

    #[test]
    fn in_contest_requester_loses_scoring_fields_but_keeps_limits() {
        let mut identity = idle_user();
        if let Identity::User(ref mut u) = identity {
            u.current_contest_id = Some(Uuid::new_v4());
        }
        let detail = ProblemService::shape_detail(&problem(), vec![], &identity);
        assert!(detail.points.is_none());
        assert!(detail.partial.is_none());
        assert!(detail.types.is_none());
        assert_eq!(detail.time_limit, 2.0);
        assert_eq!(detail.memory_limit, 262144);

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("points").is_none());
        assert!(json.get("languages").is_some());
    }
}

//! Contest projections

use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::{
    db::repositories::ContestRepository,
    error::{AppError, AppResult},
    handlers::contests::response::{
        ContestDetailResponse, ContestFormat, ContestProblemSummary, ContestSummary, RankingEntry,
    },
    models::{Contest, ContestParticipation, ContestProblem, Identity},
    policy, scoring,
    utils::contest_duration_repr,
};

/// Contest read-model service
pub struct ContestService;

impl ContestService {
    /// Contests visible to the identity, keyed by contest key
    pub async fn list(
        pool: &PgPool,
        identity: &Identity,
    ) -> AppResult<BTreeMap<String, ContestSummary>> {
        let contests = ContestRepository::list_visible(pool).await?;

        Ok(contests
            .into_iter()
            .filter(|c| policy::contest_accessible(c, identity))
            .map(|c| {
                let summary = Self::summarize(&c);
                (c.key, summary)
            })
            .collect())
    }

    /// Contest detail; 404 both when the key is unknown and when the
    /// contest is not accessible, so the two are indistinguishable.
    pub async fn detail(
        pool: &PgPool,
        identity: &Identity,
        key: &str,
    ) -> AppResult<ContestDetailResponse> {
        let contest = ContestRepository::find_by_key(pool, key)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        if !policy::contest_accessible(&contest, identity) {
            return Err(AppError::NotFound("Contest not found".to_string()));
        }

        let can_see_rankings = policy::can_see_full_scoreboard(&contest, identity);
        let can_see_problems = policy::can_see_problem_list(&contest, identity);

        // Problems are fetched even when hidden from the response: the
        // scoreboard breakdown is positionally aligned to them.
        let problems = ContestRepository::problems_for(pool, &contest.id).await?;
        let has_rating = ContestRepository::has_ratings(pool, &contest.id).await?;

        let rankings = if can_see_rankings {
            let mut participations = ContestRepository::real_participations(pool, &contest.id).await?;
            Self::sort_rankings(&mut participations);

            let format = scoring::format_for(&contest.format_name, &contest.format_config)
                .map_err(AppError::Scoring)?;
            participations
                .into_iter()
                .map(|p| {
                    let solutions = scoring::checked_breakdown(format.as_ref(), &p, &problems)?;
                    Ok(RankingEntry {
                        user: p.username,
                        points: p.score,
                        cumtime: p.cumtime,
                        is_disqualified: p.is_disqualified,
                        solutions,
                    })
                })
                .collect::<Result<Vec<_>, scoring::ScoreError>>()
                .map_err(AppError::Scoring)?
        } else {
            vec![]
        };

        Ok(Self::project_detail(
            &contest,
            has_rating,
            &problems,
            rankings,
            can_see_problems,
        ))
    }

    /// Pure list projection of one contest row
    fn summarize(contest: &Contest) -> ContestSummary {
        ContestSummary {
            name: contest.name.clone(),
            start_time: contest.start_time,
            end_time: contest.end_time,
            time_limit: contest.time_limit().map(contest_duration_repr),
            labels: contest.tags.clone(),
        }
    }

    /// Ranking order: score descending, ties broken by cumulative time
    /// ascending. Stable so equal rows keep their fetch order.
    fn sort_rankings(participations: &mut [ContestParticipation]) {
        participations.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cumtime.cmp(&b.cumtime))
        });
    }

    /// Pure detail projection; the problems array is emptied (not skipped)
    /// when the requester may not see it yet
    fn project_detail(
        contest: &Contest,
        has_rating: bool,
        problems: &[ContestProblem],
        rankings: Vec<RankingEntry>,
        can_see_problems: bool,
    ) -> ContestDetailResponse {
        ContestDetailResponse {
            time_limit: contest.time_limit_secs,
            start_time: contest.start_time,
            end_time: contest.end_time,
            tags: contest.tags.clone(),
            is_rated: contest.is_rated,
            rate_all: contest.is_rated && contest.rate_all,
            has_rating,
            rating_floor: contest.rating_floor,
            rating_ceiling: contest.rating_ceiling,
            format: ContestFormat {
                name: contest.format_name.clone(),
                config: contest.format_config.clone(),
            },
            problems: if can_see_problems {
                problems
                    .iter()
                    .map(|p| ContestProblemSummary {
                        points: p.points,
                        partial: p.partial,
                        name: p.problem_name.clone(),
                        code: p.problem_code.clone(),
                    })
                    .collect()
            } else {
                vec![]
            },
            rankings,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;

    fn contest() -> Contest {
        let now = Utc::now();
        Contest {
            id: Uuid::new_v4(),
            key: "abc123".to_string(),
            name: "ABC 123".to_string(),
            description: String::new(),
            start_time: now - Duration::hours(3),
            end_time: now - Duration::hours(1),
            time_limit_secs: Some(86400 + 2 * 3600 + 30 * 60),
            tags: vec!["rated".to_string()],
            is_visible: true,
            is_private: false,
            is_organization_private: false,
            is_scoreboard_public: false,
            private_contestants: vec![],
            organizations: vec![],
            organizers: vec![],
            is_rated: false,
            rate_all: true,
            rating_floor: None,
            rating_ceiling: None,
            format_name: "default".to_string(),
            format_config: serde_json::json!({}),
        }
    }

    fn participation(score: f64, cumtime: i64, username: &str) -> ContestParticipation {
        ContestParticipation {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            profile_id: Uuid::new_v4(),
            score,
            cumtime,
            is_disqualified: false,
            r#virtual: 0,
            format_data: serde_json::json!({}),
            username: username.to_string(),
        }
    }

    fn problem(order: i32) -> ContestProblem {
        ContestProblem {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            points: 100,
            partial: false,
            display_order: order,
            problem_code: format!("p{order}"),
            problem_name: format!("P{order}"),
        }
    }

    #[test]
    fn summary_renders_the_lossy_time_limit_repr() {
        let summary = ContestService::summarize(&contest());
        assert_eq!(summary.time_limit.as_deref(), Some("01:02:30"));
        assert_eq!(summary.labels, vec!["rated"]);

        let mut unlimited = contest();
        unlimited.time_limit_secs = None;
        assert!(ContestService::summarize(&unlimited).time_limit.is_none());
    }

    #[test]
    fn rankings_sort_by_score_desc_then_cumtime_asc() {
        let mut rows = vec![
            participation(50.0, 100, "carol"),
            participation(100.0, 500, "bob"),
            participation(100.0, 200, "alice"),
            participation(50.0, 100, "dave"),
        ];
        ContestService::sort_rankings(&mut rows);
        let order: Vec<&str> = rows.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(order, vec!["alice", "bob", "carol", "dave"]);
    }

    #[test]
    fn problems_array_empties_when_not_visible() {
        let c = contest();
        let problems = vec![problem(0), problem(1)];

        let shown = ContestService::project_detail(&c, false, &problems, vec![], true);
        assert_eq!(shown.problems.len(), 2);
        assert_eq!(shown.problems[0].code, "p0");

        let hidden = ContestService::project_detail(&c, false, &problems, vec![], false);
        assert!(hidden.problems.is_empty());
    }

    #[test]
    fn rate_all_reported_only_for_rated_contests() {
        let unrated = ContestService::project_detail(&contest(), false, &[], vec![], true);
        assert!(!unrated.rate_all);

        let mut c = contest();
        c.is_rated = true;
        let rated = ContestService::project_detail(&c, true, &[], vec![], true);
        assert!(rated.rate_all);
        assert!(rated.has_rating);
    }
}

//! Problem handler implementations

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    handlers::params::IdentityParams,
    middleware::auth::SessionIdentity,
    services::{IdentityService, ProblemService},
    state::AppState,
};

use super::response::{ProblemDetailResponse, ProblemSummary};

/// List problems visible to the requester, keyed by problem code.
///
/// `search` may be repeated; the terms are joined with a single space
/// before matching. The filter only applies when full-text search is
/// enabled in the configuration.
pub async fn list_problems(
    State(state): State<AppState>,
    Query(params): Query<IdentityParams>,
    Query(raw_params): Query<Vec<(String, String)>>,
    SessionIdentity(session): SessionIdentity,
) -> AppResult<Json<BTreeMap<String, ProblemSummary>>> {
    let identity = IdentityService::resolve(
        state.db(),
        params.id.as_deref(),
        params.token.as_deref(),
        session,
    )
    .await?;

    let search = raw_params
        .iter()
        .filter(|(key, _)| key == "search")
        .map(|(_, value)| value.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let search = (!search.is_empty()).then_some(search);

    let problems = ProblemService::list(
        state.db(),
        &identity,
        search.as_deref(),
        state.config().api.enable_fts,
    )
    .await?;
    Ok(Json(problems))
}

/// Get a specific problem by code
pub async fn get_problem(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<IdentityParams>,
    SessionIdentity(session): SessionIdentity,
) -> AppResult<Json<ProblemDetailResponse>> {
    let identity = IdentityService::resolve(
        state.db(),
        params.id.as_deref(),
        params.token.as_deref(),
        session,
    )
    .await?;

    let problem = ProblemService::detail(state.db(), &identity, &code).await?;
    Ok(Json(problem))
}

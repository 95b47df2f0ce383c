//! Contest handler implementations

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    handlers::params::IdentityParams,
    middleware::auth::SessionIdentity,
    services::{ContestService, IdentityService},
    state::AppState,
};

use super::response::{ContestDetailResponse, ContestSummary};

/// List contests visible to the requester, keyed by contest key
pub async fn list_contests(
    State(state): State<AppState>,
    Query(params): Query<IdentityParams>,
    SessionIdentity(session): SessionIdentity,
) -> AppResult<Json<BTreeMap<String, ContestSummary>>> {
    let identity = IdentityService::resolve(
        state.db(),
        params.id.as_deref(),
        params.token.as_deref(),
        session,
    )
    .await?;

    let contests = ContestService::list(state.db(), &identity).await?;
    Ok(Json(contests))
}

/// Get a specific contest by key
pub async fn get_contest(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<IdentityParams>,
    SessionIdentity(session): SessionIdentity,
) -> AppResult<Json<ContestDetailResponse>> {
    let identity = IdentityService::resolve(
        state.db(),
        params.id.as_deref(),
        params.token.as_deref(),
        session,
    )
    .await?;

    let contest = ContestService::detail(state.db(), &identity, &key).await?;
    Ok(Json(contest))
}

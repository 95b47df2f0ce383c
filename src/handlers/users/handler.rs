//! User handler implementations

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::params::IdentityParams,
    middleware::auth::SessionIdentity,
    services::{IdentityService, UserService},
    state::AppState,
};

use super::response::{UserDetailResponse, UserSubmissionSummary, UserSummary};

/// List all listed users, keyed by username
pub async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, UserSummary>>> {
    let users = UserService::list(state.db()).await?;
    Ok(Json(users))
}

/// Get a specific user by username
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<IdentityParams>,
    SessionIdentity(session): SessionIdentity,
) -> AppResult<Json<UserDetailResponse>> {
    let identity = IdentityService::resolve(
        state.db(),
        params.id.as_deref(),
        params.token.as_deref(),
        session,
    )
    .await?;

    let user = UserService::detail(state.db(), &identity, &username).await?;
    Ok(Json(user))
}

/// List a user's submissions on publicly visible problems, keyed by
/// submission id. No requester identity is consulted here.
pub async fn get_user_submissions(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<BTreeMap<Uuid, UserSubmissionSummary>>> {
    let submissions = UserService::submissions(state.db(), &username).await?;
    Ok(Json(submissions))
}

//! Submission handler implementations
//!
//! Both endpoints answer 200 with `{}` when the submission is masked, so a
//! masked submission is indistinguishable from one with no data. 404 is
//! reserved for ids that do not exist at all.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::params::IdentityParams,
    middleware::auth::SessionIdentity,
    services::{IdentityService, SubmissionService},
    state::AppState,
};

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

fn to_json<T: serde::Serialize>(value: T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| anyhow::Error::from(e).into())
}

/// Get full submission detail, or `{}` when masked
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<IdentityParams>,
    SessionIdentity(session): SessionIdentity,
) -> AppResult<Json<serde_json::Value>> {
    let identity = IdentityService::resolve(
        state.db(),
        params.id.as_deref(),
        params.token.as_deref(),
        session,
    )
    .await?;

    match SubmissionService::detail(state.db(), &identity, &id).await? {
        Some(detail) => Ok(Json(to_json(detail)?)),
        None => Ok(Json(empty_object())),
    }
}

/// Get submission source, or `{}` when masked
pub async fn get_submission_source(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<IdentityParams>,
    SessionIdentity(session): SessionIdentity,
) -> AppResult<Json<serde_json::Value>> {
    let identity = IdentityService::resolve(
        state.db(),
        params.id.as_deref(),
        params.token.as_deref(),
        session,
    )
    .await?;

    match SubmissionService::source(state.db(), &identity, &id).await? {
        Some(source) => Ok(Json(to_json(source)?)),
        None => Ok(Json(empty_object())),
    }
}

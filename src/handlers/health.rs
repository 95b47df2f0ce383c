//! Liveness probe
//!
//! The one route that is not a resource mapping. It ignores identity
//! entirely and reports the running version, so deployments of the API
//! slice can be told apart without touching the database.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

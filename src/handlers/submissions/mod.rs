//! Submission handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Submission routes. There is intentionally no list route: submissions
/// are only reachable by id or through a user's submission listing.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(handler::get_submission))
        .route("/{id}/src", get(handler::get_submission_source))
}

//! Problem handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/{code}", get(handler::get_problem))
}

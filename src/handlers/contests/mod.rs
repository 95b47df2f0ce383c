//! Contest handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_contests))
        .route("/{key}", get(handler::get_contest))
}

//! User handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users))
        .route("/{username}", get(handler::get_user))
        .route("/{username}/submissions", get(handler::get_user_submissions))
}

//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.
//! Every route is a read; all accept the `id`/`token` identity-override
//! query parameters.

pub mod contests;
pub mod health;
pub mod params;
pub mod problems;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/contests", contests::routes())
        .nest("/problems", problems::routes())
        .nest("/users", users::routes())
        .nest("/submissions", submissions::routes())
}

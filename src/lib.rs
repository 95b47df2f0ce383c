//! Arbiter API - Read-only judge platform JSON API
//!
//! This library exposes a competitive-programming judge's contests,
//! problems, users, and submissions as JSON resources. It never writes:
//! judging, rating, and registration belong to the judge backend; this
//! service only decides, for a given requester, what subset of which
//! entities may be returned and in what shape.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Projectors applying the visibility policy
//! - **Policy**: Pure visibility predicates shared by all projectors
//! - **Repositories**: Read-only database access
//! - **Models**: Domain models and the request identity

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod scoring;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

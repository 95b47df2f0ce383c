//! HTTP middleware

pub mod auth;

pub use auth::{session_auth_middleware, SessionIdentity};

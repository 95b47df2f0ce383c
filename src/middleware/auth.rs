//! Session authentication middleware
//!
//! Resolves `Authorization: Bearer <api_token>` to a session identity. The
//! whole API is readable anonymously, so this never rejects a request; an
//! unknown or absent token simply leaves the session anonymous. Handlers
//! may still upgrade the identity via the `id`/`token` query override.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{db::repositories::UserRepository, models::Identity, state::AppState};

/// Session identity extractor; defaults to anonymous (never fails)
pub struct SessionIdentity(pub Identity);

impl<S> FromRequestParts<S> for SessionIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionIdentity(
            parts
                .extensions
                .get::<Identity>()
                .cloned()
                .unwrap_or(Identity::Anonymous),
        ))
    }
}

/// Optional session authentication (doesn't fail if no token)
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
    {
        match UserRepository::find_by_api_token(state.db(), token).await {
            Ok(Some(profile)) => {
                debug!(username = %profile.username, "Session resolved from API token");
                request.extensions_mut().insert(Identity::from_profile(&profile));
            }
            Ok(None) => {
                debug!("Unknown API token; continuing anonymously");
            }
            Err(e) => {
                debug!(error = ?e, "Token lookup failed; continuing anonymously");
            }
        }
    }

    next.run(request).await
}

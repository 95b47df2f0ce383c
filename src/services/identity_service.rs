//! Identity resolution
//!
//! Turns a request into its acting identity. The `id` + `token` query
//! parameters let server-to-server callers impersonate a profile without a
//! session; any miss or token mismatch silently degrades to the ambient
//! session identity. That permissiveness is deliberate, long-standing
//! behavior: the override is a convenience channel, never an auth boundary,
//! so it must not produce errors a prober could learn from.

use sqlx::PgPool;

use crate::{
    db::repositories::UserRepository,
    error::AppResult,
    models::{Identity, Profile},
};

/// Identity resolution service
pub struct IdentityService;

impl IdentityService {
    /// Resolve the acting identity for a request. Never fails on a bad
    /// override; only genuine database errors propagate.
    pub async fn resolve(
        pool: &PgPool,
        username: Option<&str>,
        token: Option<&str>,
        session: Identity,
    ) -> AppResult<Identity> {
        let (Some(username), Some(token)) = (username, token) else {
            return Ok(session);
        };
        let profile = UserRepository::find_by_username(pool, username).await?;
        Ok(Self::apply_override(profile.as_ref(), token, session))
    }

    /// Pure override step: the supplied token must equal the profile's
    /// stored token exactly, otherwise the session identity stands.
    fn apply_override(profile: Option<&Profile>, token: &str, session: Identity) -> Identity {
        match profile {
            Some(p) if p.api_token.as_deref() == Some(token) => Identity::from_profile(p),
            _ => session,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::Capability;

    fn profile(token: Option<&str>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            full_name: "Alice".to_string(),
            points: 0.0,
            performance_points: 0.0,
            display_rank: "user".to_string(),
            is_unlisted: false,
            organizations: vec![],
            capabilities: vec!["view_name".to_string(), "bogus".to_string()],
            current_contest_id: None,
            api_token: token.map(str::to_string),
        }
    }

    #[test]
    fn matching_token_impersonates_the_profile() {
        let p = profile(Some("s3cret"));
        let resolved =
            IdentityService::apply_override(Some(&p), "s3cret", Identity::Anonymous);
        let user = resolved.user().expect("should resolve to the profile");
        assert_eq!(user.profile_id, p.id);
        assert!(resolved.has(Capability::ViewName));
    }

    #[test]
    fn mismatched_token_falls_back_to_session() {
        let p = profile(Some("s3cret"));
        let resolved =
            IdentityService::apply_override(Some(&p), "wrong", Identity::Anonymous);
        assert!(resolved.user().is_none());
    }

    #[test]
    fn missing_profile_or_stored_token_falls_back() {
        let resolved = IdentityService::apply_override(None, "s3cret", Identity::Anonymous);
        assert!(resolved.user().is_none());

        let tokenless = profile(None);
        let resolved =
            IdentityService::apply_override(Some(&tokenless), "s3cret", Identity::Anonymous);
        assert!(resolved.user().is_none());
    }

    #[test]
    fn fallback_preserves_an_authenticated_session() {
        let session_profile = profile(Some("mine"));
        let session = Identity::from_profile(&session_profile);
        let other = profile(Some("theirs"));

        let resolved = IdentityService::apply_override(Some(&other), "wrong", session);
        assert_eq!(resolved.profile_id(), Some(session_profile.id));
    }

    #[test]
    fn unknown_capability_strings_are_dropped() {
        let p = profile(Some("s3cret"));
        let resolved =
            IdentityService::apply_override(Some(&p), "s3cret", Identity::Anonymous);
        assert_eq!(resolved.user().unwrap().capabilities.len(), 1);
    }
}

//! Acting identity for a request
//!
//! An identity is resolved once per request (session auth, optionally
//! overridden by `id`/`token` query parameters) and is immutable afterwards.
//! All visibility decisions are made against it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Profile;

/// Granted permission flags, stored as strings on the profile row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// May see profiles' real names
    ViewName,
    /// May edit (and therefore fully see) any contest
    EditAllContests,
    /// May see private contests without being invited
    SeePrivateContests,
    /// May see organization-restricted problems without membership
    SeeOrganizationProblem,
    /// May edit (and therefore fully see) any problem
    EditAllProblems,
    /// May see any submission
    ViewAllSubmissions,
}

impl Capability {
    /// Parse a stored capability string; unknown strings are ignored by
    /// callers so stale rows cannot take the API down.
    pub fn parse(s: &str) -> Option<Self> {
        use crate::constants::capabilities;
        match s {
            capabilities::VIEW_NAME => Some(Self::ViewName),
            capabilities::EDIT_ALL_CONTESTS => Some(Self::EditAllContests),
            capabilities::SEE_PRIVATE_CONTESTS => Some(Self::SeePrivateContests),
            capabilities::SEE_ORGANIZATION_PROBLEM => Some(Self::SeeOrganizationProblem),
            capabilities::EDIT_ALL_PROBLEMS => Some(Self::EditAllProblems),
            capabilities::VIEW_ALL_SUBMISSIONS => Some(Self::ViewAllSubmissions),
            _ => None,
        }
    }
}

/// The fields of a profile that visibility decisions depend on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActingUser {
    pub profile_id: Uuid,
    pub username: String,
    pub capabilities: HashSet<Capability>,
    pub organizations: Vec<Uuid>,
    pub current_contest_id: Option<Uuid>,
}

/// Resolved acting principal for a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Identity {
    Anonymous,
    User(ActingUser),
}

impl Identity {
    /// Build an identity from a fetched profile row
    pub fn from_profile(profile: &Profile) -> Self {
        Self::User(ActingUser {
            profile_id: profile.id,
            username: profile.username.clone(),
            capabilities: profile
                .capabilities
                .iter()
                .filter_map(|s| Capability::parse(s))
                .collect(),
            organizations: profile.organizations.clone(),
            current_contest_id: profile.current_contest_id,
        })
    }

    pub fn user(&self) -> Option<&ActingUser> {
        match self {
            Self::Anonymous => None,
            Self::User(user) => Some(user),
        }
    }

    pub fn profile_id(&self) -> Option<Uuid> {
        self.user().map(|u| u.profile_id)
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.user()
            .is_some_and(|u| u.capabilities.contains(&capability))
    }

    /// The contest the identity is presently inside, if any
    pub fn current_contest_id(&self) -> Option<Uuid> {
        self.user().and_then(|u| u.current_contest_id)
    }

    pub fn organizations(&self) -> &[Uuid] {
        self.user().map(|u| u.organizations.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_capabilities() {
        assert_eq!(Capability::parse("view_name"), Some(Capability::ViewName));
        assert_eq!(
            Capability::parse("edit_all_contests"),
            Some(Capability::EditAllContests)
        );
        assert_eq!(Capability::parse("superuser"), None);
    }

    #[test]
    fn anonymous_has_nothing() {
        let identity = Identity::Anonymous;
        assert!(identity.user().is_none());
        assert!(!identity.has(Capability::ViewName));
        assert!(identity.current_contest_id().is_none());
        assert!(identity.organizations().is_empty());
    }
}

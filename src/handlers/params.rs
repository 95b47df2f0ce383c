//! Shared query parameters

use serde::Deserialize;

/// Identity-override query parameters, accepted on every endpoint.
/// `id` is a username; `token` must equal that profile's stored API token.
#[derive(Debug, Default, Deserialize)]
pub struct IdentityParams {
    pub id: Option<String>,
    pub token: Option<String>,
}

//! Rating model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rating record attached to a rated contest run. The most recent record
/// by `last_rated` is the profile's current rating.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub contest_id: Uuid,
    pub rating: i32,
    pub volatility: i32,
    pub last_rated: DateTime<Utc>,
}

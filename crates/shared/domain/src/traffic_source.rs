//! Traffic source domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TRAFFIC_SOURCE_ACTIVE;

/// Traffic source owned by a user. Read-only in this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub id: i32,
    pub name: String,
    /// `1` = active, anything else = inactive
    pub status: i32,
    pub credentials: Option<String>,
    pub encrypted_credentials: Option<String>,
    pub settings: Option<String>,
    pub user_id: i32,
    pub traffic_source_type_id: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TrafficSource {
    /// Check if the source is flagged active
    pub fn is_active(&self) -> bool {
        self.status == TRAFFIC_SOURCE_ACTIVE
    }
}

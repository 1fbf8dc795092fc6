use crate::UserId;

use serde::{Deserialize, Serialize};

/// Identity data owned by the authentication service. Fetched, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

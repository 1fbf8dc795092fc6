use crate::{Result as SyncResult, SyncError};

use profile_core::UserId;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const USER_CREATED: &str = "UserCreated";

/// Payload of a `UserCreated` event published by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreated {
    pub user_id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    UserCreated(UserCreated),
    /// Well-formed envelope with an event type this service does not handle.
    Unknown { event_type: String },
}

impl InboundEvent {
    /// Parse a message body: a JSON object with a string `event_type`.
    pub fn parse(body: &[u8]) -> SyncResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SyncError::malformed(format!("invalid JSON: {}", e)))?;

        let event_type = value
            .get("event_type")
            .and_then(Value::as_str)
            .ok_or_else(|| SyncError::malformed("missing string field event_type"))?
            .to_string();

        match event_type.as_str() {
            USER_CREATED => serde_json::from_value(value)
                .map(Self::UserCreated)
                .map_err(|e| SyncError::malformed(format!("invalid UserCreated payload: {}", e))),
            _ => Ok(Self::Unknown { event_type }),
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            Self::UserCreated(_) => USER_CREATED,
            Self::Unknown { event_type } => event_type,
        }
    }
}

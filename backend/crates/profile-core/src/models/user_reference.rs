use serde::{Deserialize, Serialize};

/// Identifier assigned to a user by the external identity service.
pub type UserId = i64;

/// Local row asserting that a user with this id exists upstream.
///
/// Badges and learning goals foreign-key to this row, so it must exist before
/// either is written. The service never owns any other identity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserReference {
    pub id: UserId,
}

impl UserReference {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

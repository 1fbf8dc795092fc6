use crate::IdentityError;

use profile_core::{IdentityRecord, UserId};

use async_trait::async_trait;

/// Result of asking the identity service about a user.
#[derive(Debug)]
pub enum IdentityLookup {
    Found(IdentityRecord),
    /// The service answered and the user does not exist.
    NotFound,
    /// The service could not answer (network error, timeout, bad status or body).
    Unavailable(IdentityError),
}

impl IdentityLookup {
    /// Collapses both absence kinds into `None`.
    pub fn into_record(self) -> Option<IdentityRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound | Self::Unavailable(_) => None,
        }
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

/// Outbound client for the external identity service.
///
/// Implementations never return an error: every failure is folded into
/// [`IdentityLookup::Unavailable`]. There is no retry at this layer.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    async fn lookup_user(&self, id: UserId) -> IdentityLookup;

    /// Absent when the user does not exist *or* the service is unreachable.
    async fn fetch_user(&self, id: UserId) -> Option<IdentityRecord> {
        self.lookup_user(id).await.into_record()
    }
}

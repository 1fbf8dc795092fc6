use profile_core::UserId;
use profile_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Reference store error: {source}")]
    Store {
        #[from]
        source: DbError,
    },

    /// Create reported a conflict but the row could not be read back.
    #[error("Reference for user {user_id} vanished after conflicting create {location}")]
    ReferenceVanished {
        user_id: UserId,
        location: ErrorLocation,
    },

    #[error("Malformed event: {message} {location}")]
    MalformedEvent {
        message: String,
        location: ErrorLocation,
    },

    #[error("Message broker error: {message} {location}")]
    Broker {
        message: String,
        location: ErrorLocation,
        #[source]
        source: lapin::Error,
    },
}

impl SyncError {
    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedEvent {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lapin::Error> for SyncError {
    #[track_caller]
    fn from(source: lapin::Error) -> Self {
        Self::Broker {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

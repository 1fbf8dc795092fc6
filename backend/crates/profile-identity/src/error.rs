use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why the identity service could not give a definitive answer.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity service request failed: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Identity service returned status {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Identity service response could not be decoded: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Short machine-readable reason, used for logs and metrics labels.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Http { source, .. } if source.is_timeout() => "timeout",
            Self::Http { .. } => "unreachable",
            Self::Status { .. } => "bad_status",
            Self::Decode { .. } => "bad_body",
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        IdentityError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;

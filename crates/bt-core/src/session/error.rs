use crate::session::store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Reasons a persisted session cannot be turned into a usable identity.
///
/// Every variant forces re-authentication.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("No stored session {location}")]
    NotFound { location: ErrorLocation },

    #[error("Stored session is malformed: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored session has no user id (keys: {available_keys:?}) {location}")]
    MissingUserId {
        available_keys: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Failed to read stored session: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// User-facing prompt shown before redirecting to login.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Session Expired. Please log in again.",
            Self::Malformed { .. } | Self::MissingUserId { .. } => {
                "Your saved session is unreadable. Please log in again."
            }
            Self::Store { .. } => {
                "Unable to read your saved session. \
                   Check file permissions and log in again."
            }
        }
    }

    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found() -> Self {
        Self::NotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Malformed error at caller location.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MissingUserId error at caller location.
    #[track_caller]
    pub fn missing_user_id(available_keys: Vec<String>) -> Self {
        Self::MissingUserId {
            available_keys,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for IdentityError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;

use bt_core::{CoreError, FetchError, IdentityError, NavigationIntent, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from client construction and account mutations.
///
/// Reads never produce these; a failed read becomes a failed resource slot.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid input: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Request failed: {source} {location}")]
    Fetch {
        #[source]
        source: FetchError,
        location: ErrorLocation,
    },

    #[error("Session error: {source} {location}")]
    Session {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    #[error("Local store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("No password reset in progress {location}")]
    ResetNotStarted { location: ErrorLocation },
}

impl ClientError {
    #[track_caller]
    pub fn from_build(err: reqwest::Error) -> Self {
        Self::Build {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn reset_not_started() -> Self {
        Self::ResetNotStarted {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for an alert or inline form error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Build { .. } => String::from("Unable to start the HTTP client."),
            Self::Validation { source, .. } => source.user_message(),
            Self::Fetch { source, .. } => source.user_message(),
            Self::Session { source, .. } => source.recovery_hint().to_string(),
            Self::Store { .. } => String::from("Unable to access local storage."),
            Self::ResetNotStarted { .. } => {
                String::from("Reset email not found. Please start the reset process again.")
            }
        }
    }

    /// Where the user should be sent after seeing the error, if anywhere.
    pub fn navigation_intent(&self) -> Option<NavigationIntent> {
        match self {
            Self::Session { .. } => Some(NavigationIntent::RedirectToLogin),
            Self::ResetNotStarted { .. } => Some(NavigationIntent::RedirectToPasswordReset),
            _ => None,
        }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<FetchError> for ClientError {
    #[track_caller]
    fn from(source: FetchError) -> Self {
        Self::Fetch {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IdentityError> for ClientError {
    #[track_caller]
    fn from(source: IdentityError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ClientError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

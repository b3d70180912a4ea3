use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Classified failure of one remote request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure: connection refused, DNS, timeout.
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    /// Non-2xx status, with the server's `message` when it sent one.
    #[error("Server error: HTTP {status}: {} {location}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    /// Body was not valid JSON for the expected shape.
    #[error("Decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl FetchError {
    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short classification used in notices and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Server { .. } => "server",
            Self::Decode { .. } => "decode",
        }
    }

    /// Message suitable for an alert or inline form error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => NETWORK_MESSAGE.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Server { status, .. } => format!("Server error: {status}"),
            Self::Decode { .. } => "Unexpected response from server.".to_string(),
        }
    }
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

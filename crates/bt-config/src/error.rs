use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Section of `config.toml` a setting belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Api,
    Defaults,
    Storage,
}

impl ConfigSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Defaults => "defaults",
            Self::Storage => "storage",
        }
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid [{}] setting: {message} {location}", section.as_str())]
    InvalidSetting {
        section: ConfigSection,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot locate the .budget directory: {source} {location}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot read budget config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed budget config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Rejected `[api]` value: base URL, timeout or endpoint template
    #[track_caller]
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::invalid(ConfigSection::Api, message.into())
    }

    /// Rejected `[defaults]` value
    #[track_caller]
    pub fn defaults<S: Into<String>>(message: S) -> Self {
        Self::invalid(ConfigSection::Defaults, message.into())
    }

    /// Rejected `[storage]` value
    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::invalid(ConfigSection::Storage, message.into())
    }

    #[track_caller]
    pub fn working_dir(source: std::io::Error) -> Self {
        Self::WorkingDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Section whose value failed validation, if any.
    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            Self::InvalidSetting { section, .. } => Some(*section),
            _ => None,
        }
    }

    #[track_caller]
    fn invalid(section: ConfigSection, message: String) -> Self {
        Self::InvalidSetting {
            section,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

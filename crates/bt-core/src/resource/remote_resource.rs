use crate::{FetchError, FetchResult, ResourceNotice};

use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Pending,
    Loaded,
    Failed,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

/// Slot for one fetched resource.
///
/// A payload exists exactly when the slot is `Loaded`.
#[derive(Debug, Default)]
pub enum RemoteResource<T> {
    #[default]
    Pending,
    Loaded(T),
    Failed(FetchError),
}

impl<T> RemoteResource<T> {
    pub fn status(&self) -> ResourceStatus {
        match self {
            Self::Pending => ResourceStatus::Pending,
            Self::Loaded(_) => ResourceStatus::Loaded,
            Self::Failed(_) => ResourceStatus::Failed,
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteResource<U> {
        match self {
            Self::Pending => RemoteResource::Pending,
            Self::Loaded(payload) => RemoteResource::Loaded(f(payload)),
            Self::Failed(error) => RemoteResource::Failed(error),
        }
    }

    /// Payload when loaded; otherwise records a notice for `name` and
    /// returns `None` so the caller can substitute its default.
    pub(crate) fn loaded_or_notice(
        &self,
        name: &str,
        notices: &mut Vec<ResourceNotice>,
    ) -> Option<&T> {
        match self {
            Self::Loaded(payload) => Some(payload),
            Self::Failed(error) => {
                warn!("Resource '{name}' failed, using default: {error}");
                notices.push(ResourceNotice::failed(name, error));
                None
            }
            Self::Pending => {
                warn!("Resource '{name}' still pending at aggregation, using default");
                notices.push(ResourceNotice::pending(name));
                None
            }
        }
    }
}

impl<T> From<FetchResult<T>> for RemoteResource<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            Ok(payload) => Self::Loaded(payload),
            Err(error) => Self::Failed(error),
        }
    }
}

use crate::FetchError;

use serde::Serialize;

/// Non-blocking notice for a view model field that fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceNotice {
    pub resource: String,
    pub reason: String,
}

impl ResourceNotice {
    pub fn failed(resource: &str, error: &FetchError) -> Self {
        Self {
            resource: resource.to_string(),
            reason: format!("{} error: {}", error.kind(), error.user_message()),
        }
    }

    pub fn pending(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            reason: String::from("not loaded"),
        }
    }
}

//! bt-client
//!
//! HTTP access to the budget API, the account mutations, and the screen
//! loaders that gate fetches behind a session check.

pub(crate) mod client;
pub(crate) mod endpoint;
pub(crate) mod lifetime;
pub(crate) mod screen;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ClientError, ClientResult, logout};
pub use endpoint::EndpointTemplate;
pub use lifetime::{ScreenLifetime, TeardownGuard};
pub use screen::{Screen, ScreenOutcome, view_defaults};

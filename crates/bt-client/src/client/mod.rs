pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod mutations;

pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use mutations::logout;

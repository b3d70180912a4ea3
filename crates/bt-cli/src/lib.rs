//! bt-cli library
//!
//! Command definitions and dispatch for the `budget` binary, exported so
//! the commands can be driven from tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;


pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};

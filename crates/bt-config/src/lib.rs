mod api_config;
mod config;
mod defaults_config;
mod endpoints_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use defaults_config::DefaultsConfig;
pub use endpoints_config::EndpointsConfig;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

/// Placeholder substituted with the session's user id in endpoint templates.
pub const USER_ID_PLACEHOLDER: &str = "{user_id}";

const CONFIG_DIR_ENV: &str = "BT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".budget";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1010";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 120;

const DEFAULT_MONTHLY_BUDGET: f64 = 4000.0;

const DEFAULT_STORAGE_DIR: &str = "store";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

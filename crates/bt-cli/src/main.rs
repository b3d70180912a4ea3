//! budget - budget tracker CLI
//!
//! # Examples
//!
//! ```bash
//! budget login --email jane@example.com --password secret1
//! budget dashboard --pretty
//! budget transactions --type expense --search food
//! budget add expense --amount 12.50 --description Lunch --category Food
//! ```

use bt_cli::{Cli, CliResult, logger, run};
use bt_config::{Config, LogLevel};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e.user_message());
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let result = run(cli.command, &config).await.and_then(|value| {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    });

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed: {e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Load config, apply command-line overrides, then validate.
fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;

    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = LogLevel::parse_lenient(level);
    }

    config.validate()?;
    Ok(config)
}

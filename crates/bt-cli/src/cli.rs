use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "budget")]
#[command(about = "Budget tracker client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and BT_API_BASE_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Log level for stderr output (overrides config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

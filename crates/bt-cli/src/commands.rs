use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the stored session
    Whoami,

    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Balance, budget and recent transactions
    Dashboard,

    /// Transaction history
    Transactions {
        /// Which transactions to show
        #[arg(long = "type", value_enum, default_value_t = FilterArg::All)]
        kind: FilterArg,
        /// Case-insensitive match on name or category
        #[arg(long)]
        search: Option<String>,
    },

    /// Monthly report and historical trend
    Analytics,

    /// Record an income or expense
    Add {
        #[arg(value_enum)]
        kind: KindArg,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
    },

    /// Password reset flow
    Reset {
        #[command(subcommand)]
        action: ResetCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResetCommands {
    /// Send a reset code to an email
    Request {
        #[arg(long)]
        email: String,
    },
    /// Send the code again
    Resend,
    /// Check the code received by email
    Verify {
        #[arg(long)]
        code: String,
    },
    /// Set the new password
    Complete {
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterArg {
    All,
    Income,
    Expense,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Income,
    Expense,
}

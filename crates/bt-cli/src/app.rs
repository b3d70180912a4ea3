//! Command dispatch. Every command resolves to a JSON value for stdout.

use crate::commands::{Commands, FilterArg, KindArg, ResetCommands};
use crate::{CliError, CliResult};

use bt_client::{ApiClient, Screen, ScreenLifetime, ScreenOutcome, logout, view_defaults};
use bt_config::Config;
use bt_core::{
    FileStore, GuardState, KeyValueStore, Session, SessionGuard, TransactionDraft,
    TransactionFilter, TransactionQuery, TransactionType,
};

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Value, json};

impl From<FilterArg> for TransactionFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Income => Self::Income,
            FilterArg::Expense => Self::Expense,
        }
    }
}

impl From<KindArg> for TransactionType {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => Self::Income,
            KindArg::Expense => Self::Expense,
        }
    }
}

/// Run one command against the configured API and file-backed store.
pub async fn run(command: Commands, config: &Config) -> CliResult<Value> {
    let store = FileStore::new(config.storage_path()?);
    let client = ApiClient::new(&config.api)?;
    debug!("Using API at {}", client.base_url());

    execute(command, config, &client, &store).await
}

/// Dispatch with explicit dependencies.
pub async fn execute(
    command: Commands,
    config: &Config,
    client: &ApiClient,
    store: &dyn KeyValueStore,
) -> CliResult<Value> {
    match command {
        Commands::Login { email, password } => {
            let session = client.login(store, &email, &password).await?;
            Ok(serde_json::to_value(session)?)
        }

        Commands::Logout => {
            let intent = logout(store)?;
            Ok(json!({ "navigation": intent }))
        }

        Commands::Whoami => {
            let session = guarded_session(store)?;
            Ok(serde_json::to_value(session)?)
        }

        Commands::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            client
                .register(&username, &email, &password, &confirm_password)
                .await?;
            Ok(json!({ "registered": email.trim() }))
        }

        Commands::Dashboard => {
            let defaults = view_defaults(&config.defaults);
            let lifetime = ScreenLifetime::new();
            let mut screen = Screen::mount(client, store, &lifetime);
            let outcome = screen.load_dashboard(&defaults).await;
            view_model(&screen, outcome)
        }

        Commands::Transactions { kind, search } => {
            let query = TransactionQuery {
                filter: kind.into(),
                search: search.unwrap_or_default(),
            };
            let lifetime = ScreenLifetime::new();
            let mut screen = Screen::mount(client, store, &lifetime);
            let outcome = screen.load_transactions(&query).await;
            view_model(&screen, outcome)
        }

        Commands::Analytics => {
            let lifetime = ScreenLifetime::new();
            let mut screen = Screen::mount(client, store, &lifetime);
            let outcome = screen.load_analytics().await;
            view_model(&screen, outcome)
        }

        Commands::Add {
            kind,
            amount,
            description,
            category,
        } => {
            let session = guarded_session(store)?;
            let draft = TransactionDraft::new(kind.into(), &amount, &description, &category)
                .map_err(bt_client::ClientError::from)?;
            let intent = client.create_transaction(&session, &draft).await?;
            Ok(json!({
                "type": draft.kind,
                "amount": draft.amount,
                "description": draft.description,
                "category": draft.category,
                "navigation": intent,
            }))
        }

        Commands::Reset { action } => reset(action, client, store).await,
    }
}

async fn reset(
    action: ResetCommands,
    client: &ApiClient,
    store: &dyn KeyValueStore,
) -> CliResult<Value> {
    match action {
        ResetCommands::Request { email } => {
            client.request_password_reset(store, &email).await?;
            Ok(json!({ "reset_code_sent": email.trim() }))
        }
        ResetCommands::Resend => {
            client.resend_reset_code(store).await?;
            Ok(json!({ "reset_code_sent": true }))
        }
        ResetCommands::Verify { code } => {
            client.verify_reset_code(store, &code).await?;
            Ok(json!({ "code_verified": true }))
        }
        ResetCommands::Complete {
            password,
            confirm_password,
        } => {
            let intent = client
                .reset_password(store, &password, &confirm_password)
                .await?;
            Ok(json!({ "password_reset": true, "navigation": intent }))
        }
    }
}

/// Session for commands that act outside a screen. An invalid session is
/// acknowledged before the prompt is reported, same as a screen load.
fn guarded_session(store: &dyn KeyValueStore) -> CliResult<Session> {
    let mut guard = SessionGuard::new();
    if let GuardState::Valid(session) = guard.check(store) {
        return Ok(session.clone());
    }

    if let Some(intent) = guard.acknowledge_invalid(store) {
        debug!("Session cleared, next: {intent:?}");
    }
    Err(CliError::reauthenticate(guard.recovery_hint()))
}

/// Unwrap a screen outcome. An invalid session is acknowledged here,
/// which clears the cached session before reporting the prompt.
fn view_model<T: Serialize>(screen: &Screen<'_>, outcome: ScreenOutcome<T>) -> CliResult<Value> {
    match outcome {
        ScreenOutcome::Ready(view_model) => Ok(serde_json::to_value(view_model)?),
        ScreenOutcome::Reauthenticate { hint } => {
            if let Some(intent) = screen.acknowledge_invalid() {
                debug!("Session cleared, next: {intent:?}");
            }
            Err(CliError::reauthenticate(hint))
        }
        ScreenOutcome::Abandoned => {
            warn!("Screen load abandoned");
            Err(CliError::abandoned())
        }
    }
}

//! Session-gated screen loads.
//!
//! A [`Screen`] owns the session guard for one mounted screen. Each load
//! checks the session first and issues no request when it is unusable;
//! otherwise the screen's sibling fetches run concurrently, are awaited
//! together, and are aggregated once all have settled. A teardown while
//! fetches are in flight drops them and skips aggregation.

use crate::{ApiClient, ScreenLifetime, TeardownGuard};

use bt_config::DefaultsConfig;
use bt_core::{
    AnalyticsResources, AnalyticsViewModel, DashboardResources, DashboardViewModel, GuardState,
    KeyValueStore, NavigationIntent, Session, SessionGuard, TransactionQuery,
    TransactionsResources, TransactionsViewModel, ViewDefaults, aggregate_analytics,
    aggregate_dashboard, aggregate_transactions,
};

use std::future::Future;

use chrono::Utc;
use log::info;
use serde::Serialize;

/// Result of one screen load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum ScreenOutcome<T> {
    /// All fetches settled; the view model is fully populated.
    Ready(T),
    /// No usable session. Show `hint`, then call
    /// [`Screen::acknowledge_invalid`].
    Reauthenticate { hint: String },
    /// The screen was torn down before its fetches settled.
    Abandoned,
}

impl<T> ScreenOutcome<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(view_model) => Some(view_model),
            _ => None,
        }
    }
}

/// Aggregation defaults from the `[defaults]` config section.
pub fn view_defaults(config: &DefaultsConfig) -> ViewDefaults {
    ViewDefaults {
        monthly_budget: config.monthly_budget,
    }
}

pub struct Screen<'a> {
    client: &'a ApiClient,
    store: &'a dyn KeyValueStore,
    guard: SessionGuard,
    teardown: TeardownGuard,
}

impl<'a> Screen<'a> {
    /// Mount a screen with an unchecked session guard.
    pub fn mount(
        client: &'a ApiClient,
        store: &'a dyn KeyValueStore,
        lifetime: &ScreenLifetime,
    ) -> Self {
        Self {
            client,
            store,
            guard: SessionGuard::new(),
            teardown: lifetime.subscribe(),
        }
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Clear the cached session after the re-authentication prompt.
    pub fn acknowledge_invalid(&self) -> Option<NavigationIntent> {
        self.guard.acknowledge_invalid(self.store)
    }

    /// Balance, budget and recent transactions.
    pub async fn load_dashboard(
        &mut self,
        defaults: &ViewDefaults,
    ) -> ScreenOutcome<DashboardViewModel> {
        let session = match self.checked_session() {
            Ok(session) => session,
            Err(outcome) => return outcome,
        };
        let client = self.client;

        let fetches = async {
            let (balance, budget, transactions) = tokio::join!(
                client.balance(&session),
                client.budget(&session),
                client.recent_transactions(&session),
            );
            DashboardResources {
                balance,
                budget,
                transactions,
            }
        };

        match self.until_teardown(fetches).await {
            Some(resources) => {
                ScreenOutcome::Ready(aggregate_dashboard(&resources, defaults, Utc::now()))
            }
            None => ScreenOutcome::Abandoned,
        }
    }

    /// Full transaction history, filtered by `query`.
    pub async fn load_transactions(
        &mut self,
        query: &TransactionQuery,
    ) -> ScreenOutcome<TransactionsViewModel> {
        let session = match self.checked_session() {
            Ok(session) => session,
            Err(outcome) => return outcome,
        };
        let client = self.client;

        let fetches = async {
            TransactionsResources {
                transactions: client.all_transactions(&session).await,
            }
        };

        match self.until_teardown(fetches).await {
            Some(resources) => {
                ScreenOutcome::Ready(aggregate_transactions(&resources, query, Utc::now()))
            }
            None => ScreenOutcome::Abandoned,
        }
    }

    /// Current month report and historical trend.
    pub async fn load_analytics(&mut self) -> ScreenOutcome<AnalyticsViewModel> {
        let session = match self.checked_session() {
            Ok(session) => session,
            Err(outcome) => return outcome,
        };
        let client = self.client;

        let fetches = async {
            let (report, historical) = tokio::join!(
                client.monthly_report(&session),
                client.historical_reports(&session),
            );
            AnalyticsResources { report, historical }
        };

        match self.until_teardown(fetches).await {
            Some(resources) => ScreenOutcome::Ready(aggregate_analytics(&resources, Utc::now())),
            None => ScreenOutcome::Abandoned,
        }
    }

    fn checked_session<T>(&mut self) -> Result<Session, ScreenOutcome<T>> {
        if self.teardown.is_torn_down() {
            info!("Screen already torn down, load skipped");
            return Err(ScreenOutcome::Abandoned);
        }

        if let GuardState::Valid(session) = self.guard.check(self.store) {
            return Ok(session.clone());
        }

        info!("Load skipped, no usable session");
        Err(ScreenOutcome::Reauthenticate {
            hint: self.guard.recovery_hint().to_string(),
        })
    }

    /// Run `fetches` unless the screen is torn down first.
    async fn until_teardown<F: Future>(&mut self, fetches: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.teardown.wait() => {
                info!("Screen torn down, abandoning in-flight requests");
                None
            }
            output = fetches => Some(output),
        }
    }
}

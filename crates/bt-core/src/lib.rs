pub mod aggregate;
pub mod error;
pub mod models;
pub mod resource;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use aggregate::analytics::{
    AnalyticsResources, AnalyticsViewModel, CategoryShare, HistoryPoint, aggregate_analytics,
};
pub use aggregate::dashboard::{DashboardResources, DashboardViewModel, aggregate_dashboard};
pub use aggregate::date_label::relative_date_label;
pub use aggregate::percent::budget_used_percent;
pub use aggregate::transaction_row::TransactionRow;
pub use aggregate::transactions::{
    TransactionFilter, TransactionQuery, TransactionsResources, TransactionsViewModel,
    aggregate_transactions,
};
pub use aggregate::view_defaults::ViewDefaults;
pub use error::{CoreError, Result};
pub use models::balance::BalanceSnapshot;
pub use models::budget::BudgetSnapshot;
pub use models::report::{CategoryTotal, HistoricalReport, HistoricalReports, MonthlyReport, ReportInsights};
pub use models::transaction::{Transaction, TransactionList};
pub use models::transaction_draft::TransactionDraft;
pub use models::transaction_type::TransactionType;
pub use resource::fetch_error::{FetchError, FetchResult};
pub use resource::notice::ResourceNotice;
pub use resource::remote_resource::{RemoteResource, ResourceStatus};
pub use session::error::{IdentityError, Result as IdentityResult};
pub use session::file_store::FileStore;
pub use session::guard::{GuardState, SessionGuard};
pub use session::identity::{
    RESET_EMAIL_KEY, SESSION_KEY, USER_ID_FIELDS, clear_session, persist_login_record,
    persist_session, resolve_identity,
};
pub use session::memory_store::MemoryStore;
pub use session::navigation::NavigationIntent;
pub use session::session::Session;
pub use session::store::{KeyValueStore, StoreError, StoreResult};

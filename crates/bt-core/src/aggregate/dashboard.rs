use crate::aggregate::percent::budget_used_percent;
use crate::{
    BalanceSnapshot, BudgetSnapshot, RemoteResource, ResourceNotice, TransactionList,
    TransactionRow, ViewDefaults,
};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Resources behind the dashboard, one slot per sibling fetch.
#[derive(Debug, Default)]
pub struct DashboardResources {
    pub balance: RemoteResource<BalanceSnapshot>,
    pub budget: RemoteResource<BudgetSnapshot>,
    pub transactions: RemoteResource<TransactionList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining: f64,
    pub monthly_budget: f64,
    pub budget_used_percent: f64,
    pub recent_transactions: Vec<TransactionRow>,
    pub notices: Vec<ResourceNotice>,
}

/// Merges balance, budget and recent transactions.
///
/// A loaded budget that is missing or zero is treated like a failed one,
/// since the server reports no budget for a month without income.
pub fn aggregate_dashboard(
    resources: &DashboardResources,
    defaults: &ViewDefaults,
    now: DateTime<Utc>,
) -> DashboardViewModel {
    let mut notices = Vec::new();

    let (total_income, total_expenses) = resources
        .balance
        .loaded_or_notice("balance", &mut notices)
        .map(|b| (b.total_income, b.total_expenses))
        .unwrap_or((0.0, 0.0));

    let monthly_budget = resources
        .budget
        .loaded_or_notice("budget", &mut notices)
        .and_then(|b| b.monthly_budget)
        .filter(|budget| *budget != 0.0)
        .unwrap_or(defaults.monthly_budget);

    let recent_transactions = resources
        .transactions
        .loaded_or_notice("transactions", &mut notices)
        .map(|list| TransactionRow::rows_newest_first(&list.transactions, now))
        .unwrap_or_default();

    DashboardViewModel {
        total_income,
        total_expenses,
        remaining: total_income - total_expenses,
        monthly_budget,
        budget_used_percent: budget_used_percent(total_expenses, monthly_budget),
        recent_transactions,
        notices,
    }
}

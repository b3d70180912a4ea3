use crate::{
    CoreError, RemoteResource, ResourceNotice, Result as CoreResult, Transaction, TransactionList,
    TransactionRow, TransactionType,
};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl FromStr for TransactionFilter {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(CoreError::InvalidTransactionType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Screen-local filter state for the transaction list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub filter: TransactionFilter,
    /// Case-insensitive match against name or category; empty matches all.
    pub search: String,
}

impl TransactionQuery {
    fn matches(&self, transaction: &Transaction) -> bool {
        if !self.filter.matches(transaction.kind) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || transaction.name.to_lowercase().contains(&needle)
            || transaction.category.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Default)]
pub struct TransactionsResources {
    pub transactions: RemoteResource<TransactionList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsViewModel {
    pub filter: TransactionFilter,
    pub search: String,
    pub transactions: Vec<TransactionRow>,
    /// Totals over the visible rows.
    pub total_income: f64,
    pub total_expenses: f64,
    pub net: f64,
    pub notices: Vec<ResourceNotice>,
}

pub fn aggregate_transactions(
    resources: &TransactionsResources,
    query: &TransactionQuery,
    now: DateTime<Utc>,
) -> TransactionsViewModel {
    let mut notices = Vec::new();

    let transactions = resources
        .transactions
        .loaded_or_notice("transactions", &mut notices)
        .map(|list| {
            TransactionRow::rows_newest_first(
                list.transactions.iter().filter(|t| query.matches(t)),
                now,
            )
        })
        .unwrap_or_default();

    let total_for = |kind: TransactionType| -> f64 {
        transactions
            .iter()
            .filter(|row| row.kind == kind)
            .map(|row| row.amount)
            .sum()
    };
    let total_income = total_for(TransactionType::Income);
    let total_expenses = total_for(TransactionType::Expense);

    TransactionsViewModel {
        filter: query.filter,
        search: query.search.clone(),
        transactions,
        total_income,
        total_expenses,
        net: total_income - total_expenses,
        notices,
    }
}

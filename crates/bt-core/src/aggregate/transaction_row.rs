use crate::{Transaction, TransactionType, relative_date_label};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A transaction prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub kind: TransactionType,
    /// Always positive; `kind` carries the sign.
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub date_label: String,
}

impl TransactionRow {
    pub fn from_transaction(transaction: &Transaction, now: DateTime<Utc>) -> Self {
        Self {
            id: transaction.id.clone(),
            name: transaction.name.clone(),
            category: transaction.category.clone(),
            kind: transaction.kind,
            amount: transaction.amount.abs(),
            date: transaction.date,
            date_label: relative_date_label(transaction.date, now),
        }
    }

    /// Rows newest first; ties keep their received order.
    pub(crate) fn rows_newest_first<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        now: DateTime<Utc>,
    ) -> Vec<Self> {
        let mut rows: Vec<Self> = transactions
            .into_iter()
            .map(|t| Self::from_transaction(t, now))
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }
}

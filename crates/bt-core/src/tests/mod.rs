mod models;

use crate::{Transaction, TransactionType};

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp.
pub(crate) fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .unwrap()
        .with_timezone(&Utc)
}

pub(crate) fn transaction(
    id: &str,
    name: &str,
    category: &str,
    kind: TransactionType,
    amount: f64,
    date: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        name: name.to_string(),
        amount,
        category: category.to_string(),
        date,
        kind,
    }
}

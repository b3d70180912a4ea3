use crate::TransactionType;
use crate::models::lenient::{f64_or_zero, string_or_number, timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_CATEGORY: &str = "Other";

fn default_category() -> String {
    String::from(DEFAULT_CATEGORY)
}

/// A transaction as received from the API. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Created records echo the submitted `description` instead of `name`.
    #[serde(alias = "description")]
    pub name: String,
    #[serde(deserialize_with = "f64_or_zero")]
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(deserialize_with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Body of the recent/all transactions endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

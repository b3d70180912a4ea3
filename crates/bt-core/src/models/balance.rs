use crate::models::lenient::f64_or_zero;

use serde::{Deserialize, Serialize};

/// Body of the balance endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceSnapshot {
    #[serde(deserialize_with = "f64_or_zero")]
    pub total_income: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub total_expenses: f64,
    /// Server-side figure; the view model recomputes its own.
    #[serde(deserialize_with = "f64_or_zero")]
    pub remaining: f64,
}

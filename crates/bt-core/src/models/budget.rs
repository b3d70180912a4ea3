use crate::models::lenient::optional_f64;

use serde::{Deserialize, Serialize};

/// Body of the budget endpoint. The server derives the budget from the
/// current month's income and omits it when there is none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetSnapshot {
    #[serde(deserialize_with = "optional_f64")]
    pub monthly_budget: Option<f64>,
}

use crate::models::lenient::f64_or_zero;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryTotal {
    pub name: String,
    #[serde(deserialize_with = "f64_or_zero")]
    pub total: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportInsights {
    pub is_profitable: bool,
    pub savings_health: String,
    pub spending_efficiency: String,
}

/// Body of the monthly report endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyReport {
    pub year: Option<i32>,
    pub month: Option<u32>,
    #[serde(deserialize_with = "f64_or_zero")]
    pub total_income: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub total_expenses: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub net_balance: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub savings_rate: f64,
    pub categories: Vec<CategoryTotal>,
    pub insights: Option<ReportInsights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricalReport {
    pub year: i32,
    pub month: u32,
    #[serde(deserialize_with = "f64_or_zero")]
    pub total_income: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub total_expenses: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub net_balance: f64,
}

/// Body of the historical reports endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalReports {
    pub reports: Vec<HistoricalReport>,
}

use crate::aggregate::percent::ratio_percent;
use crate::{HistoricalReports, MonthlyReport, RemoteResource, ReportInsights, ResourceNotice};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

const UNKNOWN_INSIGHT: &str = "unknown";
const HISTORY_LABEL_FORMAT: &str = "%b %Y";

#[derive(Debug, Default)]
pub struct AnalyticsResources {
    pub report: RemoteResource<MonthlyReport>,
    pub historical: RemoteResource<HistoricalReports>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub total: f64,
    /// Share of the month's expenses.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsViewModel {
    pub year: i32,
    pub month: u32,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub savings_rate: f64,
    pub categories: Vec<CategoryShare>,
    pub insights: ReportInsights,
    pub history: Vec<HistoryPoint>,
    pub notices: Vec<ResourceNotice>,
}

/// Merges the current month's report with the historical trend.
///
/// Net balance, savings rate and category shares are recomputed from the
/// base totals so they stay consistent with each other.
pub fn aggregate_analytics(resources: &AnalyticsResources, now: DateTime<Utc>) -> AnalyticsViewModel {
    let mut notices = Vec::new();

    let report = resources.report.loaded_or_notice("report", &mut notices);
    let history = resources
        .historical
        .loaded_or_notice("historical", &mut notices)
        .map(history_points)
        .unwrap_or_default();

    let year = report.and_then(|r| r.year).unwrap_or(now.year());
    let month = report.and_then(|r| r.month).unwrap_or(now.month());
    let total_income = report.map(|r| r.total_income).unwrap_or(0.0);
    let total_expenses = report.map(|r| r.total_expenses).unwrap_or(0.0);
    let net_balance = total_income - total_expenses;

    let mut categories: Vec<CategoryShare> = report
        .map(|r| r.categories.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|c| CategoryShare {
            name: c.name.clone(),
            total: c.total,
            percentage: ratio_percent(c.total, total_expenses),
        })
        .collect();
    categories.sort_by(|a, b| b.total.total_cmp(&a.total));

    let insights = match report.and_then(|r| r.insights.as_ref()) {
        Some(insights) => ReportInsights {
            is_profitable: net_balance > 0.0,
            ..insights.clone()
        },
        None => ReportInsights {
            is_profitable: net_balance > 0.0,
            savings_health: String::from(UNKNOWN_INSIGHT),
            spending_efficiency: String::from(UNKNOWN_INSIGHT),
        },
    };

    AnalyticsViewModel {
        year,
        month,
        total_income,
        total_expenses,
        net_balance,
        savings_rate: ratio_percent(net_balance, total_income),
        categories,
        insights,
        history,
        notices,
    }
}

/// Oldest month first.
fn history_points(historical: &HistoricalReports) -> Vec<HistoryPoint> {
    let mut points: Vec<HistoryPoint> = historical
        .reports
        .iter()
        .map(|r| HistoryPoint {
            year: r.year,
            month: r.month,
            label: month_label(r.year, r.month),
            total_income: r.total_income,
            total_expenses: r.total_expenses,
            net_balance: r.total_income - r.total_expenses,
        })
        .collect();
    points.sort_by_key(|p| (p.year, p.month));
    points
}

fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format(HISTORY_LABEL_FORMAT).to_string(),
        None => format!("{month}/{year}"),
    }
}

use crate::{
    BalanceSnapshot, BudgetSnapshot, HistoricalReports, MonthlyReport, TransactionDraft,
    TransactionList, TransactionType,
};

use crate::models::lenient::parse_timestamp;

use std::str::FromStr;

use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_transaction_type_as_str() {
    assert_eq!(TransactionType::Income.as_str(), "income");
    assert_eq!(TransactionType::Expense.as_str(), "expense");
}

#[test]
fn test_transaction_type_from_str() {
    assert_eq!(
        TransactionType::from_str("income").unwrap(),
        TransactionType::Income
    );
    assert_eq!(
        TransactionType::from_str("expense").unwrap(),
        TransactionType::Expense
    );
    assert!(TransactionType::from_str("transfer").is_err());
}

#[test]
fn test_balance_missing_and_null_fields_default_to_zero() {
    let balance: BalanceSnapshot =
        serde_json::from_value(json!({ "totalIncome": 5000, "totalExpenses": null })).unwrap();

    assert_eq!(balance.total_income, 5000.0);
    assert_eq!(balance.total_expenses, 0.0);
    assert_eq!(balance.remaining, 0.0);
}

#[test]
fn test_balance_accepts_decimal_strings() {
    let balance: BalanceSnapshot = serde_json::from_value(
        json!({ "totalIncome": "5000.50", "totalExpenses": "3200.25", "remaining": "1800.25" }),
    )
    .unwrap();

    assert_eq!(balance.total_income, 5000.5);
    assert_eq!(balance.total_expenses, 3200.25);
}

#[test]
fn test_budget_missing_is_none() {
    let budget: BudgetSnapshot = serde_json::from_value(json!({})).unwrap();

    assert_eq!(budget.monthly_budget, None);
}

#[test]
fn test_transaction_list_decodes_mixed_id_types_and_description_alias() {
    let list: TransactionList = serde_json::from_value(json!({
        "transactions": [
            {
                "id": 17,
                "name": "Groceries",
                "amount": 54.2,
                "category": "Food",
                "date": "2024-03-14T09:30:00.000Z",
                "type": "expense"
            },
            {
                "id": "tx-2",
                "description": "March salary",
                "amount": "2500",
                "date": "2024-03-01T00:00:00Z",
                "type": "income"
            }
        ]
    }))
    .unwrap();

    assert_eq!(list.transactions.len(), 2);
    assert_eq!(list.transactions[0].id, "17");
    assert_eq!(list.transactions[1].name, "March salary");
    assert_eq!(list.transactions[1].amount, 2500.0);
    assert_eq!(list.transactions[1].category, "Other");
    assert_eq!(list.transactions[1].kind, TransactionType::Income);
}

#[test]
fn test_transaction_list_accepts_timestamps_without_offset() {
    let list: TransactionList = serde_json::from_value(json!({
        "transactions": [
            { "id": 1, "name": "Rent", "amount": 900, "date": "2024-03-14T09:30:00Z", "type": "expense" },
            { "id": 2, "name": "Coffee", "amount": 4, "date": "2024-03-14T09:30:00", "type": "expense" },
            { "id": 3, "name": "Lunch", "amount": 12, "date": "2024-03-14 09:30:00", "type": "expense" },
            { "id": 4, "name": "Bonus", "amount": 300, "date": "2024-03-14", "type": "income" }
        ]
    }))
    .unwrap();

    let expected = Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap();
    assert_eq!(list.transactions.len(), 4);
    assert_eq!(list.transactions[0].date, expected);
    assert_eq!(list.transactions[1].date, expected);
    assert_eq!(list.transactions[2].date, expected);
    assert_eq!(
        list.transactions[3].date,
        Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_parse_timestamp_normalizes_offsets_and_fractions() {
    assert_eq!(
        parse_timestamp("2024-03-14T11:30:00+02:00"),
        Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).single()
    );
    assert_eq!(
        parse_timestamp("2024-03-14 09:30:00.250").map(|d| d.timestamp_millis() % 1000),
        Some(250)
    );
    assert_eq!(parse_timestamp("14/03/2024"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn test_transaction_with_unparseable_date_fails_to_decode() {
    let result = serde_json::from_value::<TransactionList>(json!({
        "transactions": [{
            "id": 1, "name": "x", "amount": 1, "date": "yesterday", "type": "expense"
        }]
    }));

    assert!(result.is_err());
}

#[test]
fn test_transaction_list_missing_key_is_empty() {
    let list: TransactionList = serde_json::from_value(json!({ "count": 0 })).unwrap();

    assert!(list.transactions.is_empty());
}

#[test]
fn test_transaction_with_unknown_type_fails_to_decode() {
    let result = serde_json::from_value::<TransactionList>(json!({
        "transactions": [{
            "id": 1, "name": "x", "amount": 1, "date": "2024-03-14T09:30:00Z", "type": "refund"
        }]
    }));

    assert!(result.is_err());
}

#[test]
fn test_monthly_report_decodes_nested_shapes() {
    let report: MonthlyReport = serde_json::from_value(json!({
        "year": 2024,
        "month": 3,
        "totalIncome": 5000,
        "totalExpenses": 3200,
        "categories": [{ "name": "Food", "total": 800, "percentage": 25 }],
        "insights": { "isProfitable": true, "savingsHealth": "good", "spendingEfficiency": "fair" }
    }))
    .unwrap();

    assert_eq!(report.year, Some(2024));
    assert_eq!(report.categories[0].name, "Food");
    assert_eq!(report.insights.unwrap().savings_health, "good");
}

#[test]
fn test_historical_reports_missing_key_is_empty() {
    let reports: HistoricalReports = serde_json::from_value(json!({})).unwrap();

    assert!(reports.reports.is_empty());
}

#[test]
fn test_transaction_draft_valid_input_is_trimmed() {
    let draft =
        TransactionDraft::new(TransactionType::Expense, " 12.50 ", " Lunch ", "Food").unwrap();

    assert_eq!(draft.amount, 12.5);
    assert_eq!(draft.description, "Lunch");
    assert_eq!(draft.category, "Food");
}

#[test]
fn test_transaction_draft_rejects_missing_fields() {
    let err = TransactionDraft::new(TransactionType::Income, "10", "", "Salary").unwrap_err();

    assert_eq!(err.user_message(), "Please fill in all fields");
}

#[test]
fn test_transaction_draft_rejects_non_positive_or_garbage_amounts() {
    for amount in ["0", "-5", "abc", "inf", "NaN"] {
        let err = TransactionDraft::new(TransactionType::Expense, amount, "x", "Food").unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid amount", "amount {amount}");
    }
}

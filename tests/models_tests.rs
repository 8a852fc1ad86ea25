// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use spendtrack::models::{
    ExpenseCategory, IncomeCategory, Kind, NewTransaction, Transaction, TransactionType,
    lookup_category,
};

#[test]
fn kind_rejects_mismatched_category() {
    assert!(Kind::from_parts(TransactionType::Income, "FOOD").is_err());
    assert!(Kind::from_parts(TransactionType::Expense, "SALARY").is_err());
}

#[test]
fn kind_accepts_matching_category_case_insensitively() {
    assert_eq!(
        Kind::from_parts(TransactionType::Expense, "food").unwrap(),
        Kind::Expense(ExpenseCategory::Food)
    );
    assert_eq!(
        Kind::from_parts(TransactionType::Income, "Salary").unwrap(),
        Kind::Income(IncomeCategory::Salary)
    );
}

#[test]
fn lookup_resolves_either_category_set() {
    assert_eq!(
        lookup_category("RENT").unwrap(),
        Kind::Expense(ExpenseCategory::Rent)
    );
    assert_eq!(
        lookup_category("gift").unwrap(),
        Kind::Income(IncomeCategory::Gift)
    );
    assert!(lookup_category("YACHTS").is_err());
}

#[test]
fn transaction_decodes_flat_wire_shape() {
    let tx: Transaction = serde_json::from_str(
        r#"{"id":7,"amount":100.5,"type":"EXPENSE","category":"FOOD","date":"2025-03-02","notes":null,"createdAt":"2025-03-02T10:00:00"}"#,
    )
    .unwrap();
    assert_eq!(tx.id, 7);
    assert_eq!(tx.kind, Kind::Expense(ExpenseCategory::Food));
    assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
    assert_eq!(tx.notes, None);
}

#[test]
fn transaction_with_invalid_pairing_fails_to_decode() {
    let result: Result<Transaction, _> = serde_json::from_str(
        r#"{"id":7,"amount":10,"type":"INCOME","category":"FOOD","date":"2025-03-02"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn new_transaction_serializes_flat_pair_and_plain_date() {
    let new = NewTransaction {
        amount: "250".parse().unwrap(),
        kind: Kind::Income(IncomeCategory::Freelance),
        date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        notes: Some("site work".to_string()),
    };
    let json = serde_json::to_string(&new).unwrap();
    assert!(json.contains(r#""type":"INCOME""#));
    assert!(json.contains(r#""category":"FREELANCE""#));
    assert!(json.contains(r#""date":"2025-03-02""#));
    assert!(json.contains(r#""notes":"site work""#));
}

#[test]
fn absent_notes_are_omitted_from_create_payload() {
    let new = NewTransaction {
        amount: "10".parse().unwrap(),
        kind: Kind::Expense(ExpenseCategory::Misc),
        date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        notes: None,
    };
    let json = serde_json::to_string(&new).unwrap();
    assert!(!json.contains("notes"));
}

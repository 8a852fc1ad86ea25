// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            _ => Err(format!(
                "unknown transaction type '{s}', expected INCOME or EXPENSE"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpenseCategory {
    Food,
    Travel,
    Rent,
    Shopping,
    Utilities,
    Entertainment,
    Healthcare,
    Education,
    Misc,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Food,
        ExpenseCategory::Travel,
        ExpenseCategory::Rent,
        ExpenseCategory::Shopping,
        ExpenseCategory::Utilities,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Education,
        ExpenseCategory::Misc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "FOOD",
            ExpenseCategory::Travel => "TRAVEL",
            ExpenseCategory::Rent => "RENT",
            ExpenseCategory::Shopping => "SHOPPING",
            ExpenseCategory::Utilities => "UTILITIES",
            ExpenseCategory::Entertainment => "ENTERTAINMENT",
            ExpenseCategory::Healthcare => "HEALTHCARE",
            ExpenseCategory::Education => "EDUCATION",
            ExpenseCategory::Misc => "MISC",
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown expense category '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investment,
    Gift,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 5] = [
        IncomeCategory::Salary,
        IncomeCategory::Freelance,
        IncomeCategory::Investment,
        IncomeCategory::Gift,
        IncomeCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncomeCategory::Salary => "SALARY",
            IncomeCategory::Freelance => "FREELANCE",
            IncomeCategory::Investment => "INVESTMENT",
            IncomeCategory::Gift => "GIFT",
            IncomeCategory::Other => "OTHER",
        }
    }
}

impl std::str::FromStr for IncomeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown income category '{s}'"))
    }
}

/// A transaction's type together with its category. Each type carries its own
/// closed category enum, so a type/category mismatch cannot be constructed.
/// On the wire this is the flat `{"type": ..., "category": ...}` pair the
/// backend speaks; the pairing is re-checked on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KindParts", into = "KindParts")]
pub enum Kind {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Kind {
    pub fn transaction_type(self) -> TransactionType {
        match self {
            Kind::Income(_) => TransactionType::Income,
            Kind::Expense(_) => TransactionType::Expense,
        }
    }

    pub fn category_name(self) -> &'static str {
        match self {
            Kind::Income(c) => c.as_str(),
            Kind::Expense(c) => c.as_str(),
        }
    }

    pub fn from_parts(kind: TransactionType, category: &str) -> Result<Self, String> {
        match kind {
            TransactionType::Income => category.parse().map(Kind::Income).map_err(|_| {
                format!(
                    "'{category}' is not an income category (expected one of {})",
                    name_list(IncomeCategory::ALL.iter().map(|c| c.as_str()))
                )
            }),
            TransactionType::Expense => category.parse().map(Kind::Expense).map_err(|_| {
                format!(
                    "'{category}' is not an expense category (expected one of {})",
                    name_list(ExpenseCategory::ALL.iter().map(|c| c.as_str()))
                )
            }),
        }
    }
}

/// Resolve a bare category name to its kind, whichever type it belongs to.
pub fn lookup_category(name: &str) -> Result<Kind, String> {
    name.parse::<ExpenseCategory>()
        .map(Kind::Expense)
        .or_else(|_| name.parse::<IncomeCategory>().map(Kind::Income))
        .map_err(|_| format!("unknown category '{name}'"))
}

fn name_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[derive(Serialize, Deserialize)]
struct KindParts {
    #[serde(rename = "type")]
    kind: TransactionType,
    category: String,
}

impl TryFrom<KindParts> for Kind {
    type Error = String;

    fn try_from(parts: KindParts) -> Result<Self, Self::Error> {
        Kind::from_parts(parts.kind, &parts.category)
    }
}

impl From<Kind> for KindParts {
    fn from(kind: Kind) -> Self {
        KindParts {
            kind: kind.transaction_type(),
            category: kind.category_name().to_string(),
        }
    }
}

/// A record as the backend returns it. Immutable in this client: records are
/// created and deleted, never edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    #[serde(flatten)]
    pub kind: Kind,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for creating a record; the backend assigns the id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    #[serde(flatten)]
    pub kind: Kind,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The minimal user identity persisted alongside the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: i64,
    pub email: String,
    pub name: String,
}

/// Response body of /auth/login and /auth/signup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub email: String,
    pub name: String,
}

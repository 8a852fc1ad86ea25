// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Kind, Transaction};

/// The monthly aggregate exactly as the backend sends it. Every field may be
/// absent or null; normalization happens in [Summary::from_payload].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryPayload {
    pub total_income: Option<Decimal>,
    pub total_expense: Option<Decimal>,
    pub net_savings: Option<Decimal>,
    pub expense_breakdown: Option<Vec<CategoryTotal>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: Decimal,
}

/// Normalized monthly summary handed to presentation code: numbers are never
/// absent and the breakdown is always a sequence, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_savings: Decimal,
    pub expense_breakdown: Vec<CategoryTotal>,
}

impl Summary {
    /// Missing numerics become zero and a missing breakdown becomes an empty
    /// sequence. Net savings is recomputed from the two totals so the
    /// `income - expense` identity holds whatever the payload carried.
    pub fn from_payload(payload: SummaryPayload) -> Self {
        let total_income = payload.total_income.unwrap_or_default();
        let total_expense = payload.total_expense.unwrap_or_default();
        Summary {
            total_income,
            total_expense,
            net_savings: total_income - total_expense,
            expense_breakdown: payload.expense_breakdown.unwrap_or_default(),
        }
    }

    /// Derive the same shape from a live transaction list, for callers that
    /// already hold repository results. Breakdown covers expense categories
    /// only, largest spend first.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        let mut per_category: Vec<(&'static str, Decimal)> = Vec::new();

        for tx in transactions {
            match tx.kind {
                Kind::Income(_) => total_income += tx.amount,
                Kind::Expense(_) => {
                    total_expense += tx.amount;
                    let name = tx.kind.category_name();
                    match per_category.iter_mut().find(|(n, _)| *n == name) {
                        Some((_, total)) => *total += tx.amount,
                        None => per_category.push((name, tx.amount)),
                    }
                }
            }
        }
        per_category.sort_by(|a, b| b.1.cmp(&a.1));

        Summary {
            total_income,
            total_expense,
            net_savings: total_income - total_expense,
            expense_breakdown: per_category
                .into_iter()
                .map(|(category, total_amount)| CategoryTotal {
                    category: category.to_string(),
                    total_amount,
                })
                .collect(),
        }
    }
}

// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Kind, NewTransaction, Transaction, TransactionType};
use crate::summary::{Summary, SummaryPayload};

/// Server-side filter for a listing. Exactly one applies per request; the
/// ordering of results is backend-defined (newest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxFilter {
    All,
    ByType(TransactionType),
    ByCategory(Kind),
    ByDateRange { start: NaiveDate, end: NaiveDate },
}

impl TxFilter {
    fn path(&self) -> String {
        match self {
            TxFilter::All => "/transactions".to_string(),
            TxFilter::ByType(t) => format!("/transactions/type/{}", t.as_str()),
            TxFilter::ByCategory(kind) => {
                format!("/transactions/category/{}", kind.category_name())
            }
            TxFilter::ByDateRange { start, end } => {
                format!("/transactions/date-range?startDate={start}&endDate={end}")
            }
        }
    }
}

/// All reads and writes of transaction records, routed through the gateway.
/// Holds no local copy of the data; every call is a fresh pull.
pub struct TransactionRepo<'a> {
    api: &'a ApiClient<'a>,
}

impl<'a> TransactionRepo<'a> {
    pub fn new(api: &'a ApiClient<'a>) -> Self {
        Self { api }
    }

    pub fn create(&self, new: &NewTransaction) -> Result<Transaction, ApiError> {
        if new.amount <= Decimal::ZERO {
            return Err(ApiError::validation(format!(
                "amount must be positive, got {}",
                new.amount
            )));
        }
        self.api.post("/transactions", new)
    }

    /// An empty result is a valid, non-error state.
    pub fn list(&self, filter: &TxFilter) -> Result<Vec<Transaction>, ApiError> {
        self.api.get(&filter.path())
    }

    /// Removal is authoritative only after the backend acknowledges it; the
    /// caller must not drop the record from any local view until this returns
    /// Ok.
    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/transactions/{id}"))
    }

    /// Backend-computed aggregate for the given month, or the current
    /// calendar month when unspecified. Preferred over recomputing from a
    /// possibly-partial local list since the backend holds the full record
    /// set.
    pub fn month_summary(&self, month: Option<(i32, u32)>) -> Result<Summary, ApiError> {
        let path = match month {
            Some((year, month)) => {
                if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
                    return Err(ApiError::validation(format!(
                        "invalid month {year}-{month:02}"
                    )));
                }
                format!("/transactions/summary/{year}/{month}")
            }
            None => "/transactions/summary/current".to_string(),
        };
        let payload: SummaryPayload = self.api.get(&path)?;
        Ok(Summary::from_payload(payload))
    }
}

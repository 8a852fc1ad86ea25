// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Classified failure returned by the session and data layers.
///
/// Every failure carries a human-readable message and a kind the caller can
/// branch on; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Local input validation; never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// The backend rejected the credentials (401/403). On a login this means
    /// bad credentials; on an authenticated call it means the stored token is
    /// no longer accepted.
    #[error("{message}")]
    Auth { message: String },

    /// The backend has no such resource (404).
    #[error("{0}")]
    NotFound(String),

    /// Any other 4xx rejection.
    #[error("request rejected ({status}): {message}")]
    Request { status: u16, message: String },

    /// 5xx, timeout or connectivity failure. Transient; a later retry may
    /// succeed, but this layer never retries on its own.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Unavailable(_))
    }
}

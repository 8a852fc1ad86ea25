// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod report;
pub mod tx;

use crate::error::ApiError;
use crate::session::{SessionManager, SessionState};

/// Commands that need a session bail out early instead of letting the
/// request fail with a guaranteed 401.
pub(crate) fn require_login(session: &SessionManager) -> anyhow::Result<()> {
    if session.state() != SessionState::Authenticated {
        anyhow::bail!("Not logged in. Run `spendtrack login` first.");
    }
    Ok(())
}

/// An auth rejection on an authenticated call means the persisted token is no
/// longer valid; drop the session so the next run starts anonymous.
pub(crate) fn classify_failure(session: &mut SessionManager, err: ApiError) -> anyhow::Error {
    if err.is_auth() {
        session.logout();
        return anyhow::anyhow!("Session expired. Please log in again.");
    }
    anyhow::Error::new(err)
}

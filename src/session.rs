// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use serde::Serialize;

use crate::api::{ApiClient, SlowRequestNotice};
use crate::error::ApiError;
use crate::models::{AuthResponse, Profile};
use crate::store::CredentialStore;

const WAKE_NOTICE_DELAY: Duration = Duration::from_secs(3);
const WAKE_NOTICE: &str =
    "Still waiting on the server. It may be waking from idle; the first request can take up to a minute.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Owns the session lifecycle and is the sole writer of the credential store;
/// everything else reads the token through the API gateway.
pub struct SessionManager<'a> {
    store: &'a CredentialStore,
    api: &'a ApiClient<'a>,
    state: SessionState,
}

impl<'a> SessionManager<'a> {
    pub fn new(store: &'a CredentialStore, api: &'a ApiClient<'a>) -> Self {
        Self {
            store,
            api,
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn profile(&self) -> Option<Profile> {
        self.store.profile()
    }

    /// Resolve the persisted session at startup, before anything renders.
    /// A locally stored token is trusted without re-validation; the first
    /// authenticated call proves it wrong soon enough.
    pub fn bootstrap(&mut self) -> SessionState {
        self.state = if self.store.token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        };
        self.state
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Profile, ApiError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::validation("email and password are required"));
        }
        self.state = SessionState::Authenticating;
        let _notice = SlowRequestNotice::arm(WAKE_NOTICE_DELAY, WAKE_NOTICE);
        let result = self.api.post("/auth/login", &LoginRequest { email, password });
        self.finish_auth(result)
    }

    /// Identical contract to [login], against the signup endpoint.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<Profile, ApiError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::validation("name, email and password are required"));
        }
        self.state = SessionState::Authenticating;
        let _notice = SlowRequestNotice::arm(WAKE_NOTICE_DELAY, WAKE_NOTICE);
        let result = self.api.post(
            "/auth/signup",
            &SignupRequest {
                name,
                email,
                password,
            },
        );
        self.finish_auth(result)
    }

    /// Local session disposal. Always succeeds and is safe to repeat; no
    /// backend acknowledgment is involved.
    pub fn logout(&mut self) {
        self.store.clear();
        self.state = SessionState::Anonymous;
    }

    fn finish_auth(&mut self, result: Result<AuthResponse, ApiError>) -> Result<Profile, ApiError> {
        match result {
            Ok(auth) => {
                let profile = Profile {
                    user_id: auth.user_id,
                    email: auth.email,
                    name: auth.name,
                };
                self.store.save(&auth.token, &profile);
                self.state = SessionState::Authenticated;
                Ok(profile)
            }
            Err(e) => {
                self.state = SessionState::Anonymous;
                Err(e)
            }
        }
    }
}

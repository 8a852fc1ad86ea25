// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::store::CredentialStore;

const UA: &str = concat!(
    "spendtrack/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/spendtrack/spendtrack)"
);

const DEFAULT_BASE_URL: &str = "https://expensetrackerappbackend.onrender.com/api";

// Must outlive the backend's cold-start latency (~60s after idling), or the
// first request of the day fails on a perfectly healthy service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(75);

/// Resolved once at process start; the base path is not configurable after
/// that.
pub fn base_url() -> String {
    std::env::var("SPENDTRACK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Single point of outbound HTTP. Reads the current token from the credential
/// store before each dispatch and attaches it as a bearer credential when
/// present; classifies every failure into an [ApiError] kind. Performs no
/// retries and writes nothing.
pub struct ApiClient<'a> {
    base_url: String,
    http: reqwest::blocking::Client,
    store: &'a CredentialStore,
}

impl<'a> ApiClient<'a> {
    pub fn new(base_url: impl Into<String>, store: &'a CredentialStore) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(UA)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            store,
        })
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(Method::GET, path, None::<&()>)?;
        decode(resp)
    }

    pub fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(Method::POST, path, Some(body))?;
        decode(resp)
    }

    pub fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None::<&()>)?;
        Ok(())
    }

    fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method.clone(), url);
        if let Some(token) = self.store.token() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let started = Instant::now();
        let resp = req.send().map_err(classify_transport)?;
        let status = resp.status();
        tracing::debug!(
            "{} {} -> {} in {:?}",
            method,
            path,
            status.as_u16(),
            started.elapsed()
        );

        if status.is_success() {
            Ok(resp)
        } else {
            Err(classify_status(status, resp))
        }
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json()
        .map_err(|e| ApiError::Unavailable(format!("malformed response body: {e}")))
}

fn classify_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Unavailable("request timed out".to_string())
    } else if err.is_connect() {
        ApiError::Unavailable(format!("could not reach the server: {err}"))
    } else {
        ApiError::Unavailable(err.to_string())
    }
}

fn classify_status(status: StatusCode, resp: Response) -> ApiError {
    let message = server_message(resp).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth { message },
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        s if s.is_server_error() => ApiError::Unavailable(message),
        s => ApiError::Request {
            status: s.as_u16(),
            message,
        },
    }
}

// The backend reports errors as {"message": ...}; some proxies use "error".
fn server_message(resp: Response) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }
    let body: ErrorBody = resp.json().ok()?;
    body.message.or(body.error)
}

/// Cancellable one-shot timer that prints `message` to stderr unless dropped
/// within `delay`. Used to tell the user a cold backend is waking up instead
/// of letting a long first request look hung. Dropping it cancels the timer;
/// a response arriving first therefore suppresses the notice.
pub struct SlowRequestNotice {
    cancel: mpsc::Sender<()>,
    printer: Option<thread::JoinHandle<()>>,
}

impl SlowRequestNotice {
    pub fn arm(delay: Duration, message: impl Into<String>) -> Self {
        let (cancel, armed) = mpsc::channel();
        let message = message.into();
        let printer = thread::spawn(move || {
            if let Err(mpsc::RecvTimeoutError::Timeout) = armed.recv_timeout(delay) {
                eprintln!("{message}");
            }
        });
        Self {
            cancel,
            printer: Some(printer),
        }
    }
}

impl Drop for SlowRequestNotice {
    fn drop(&mut self) {
        let _ = self.cancel.send(());
        if let Some(printer) = self.printer.take() {
            let _ = printer.join();
        }
    }
}

// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{CannedResponse, TestServer};
use spendtrack::api::ApiClient;
use spendtrack::error::ApiError;
use spendtrack::models::Profile;
use spendtrack::store::CredentialStore;

fn store_with_token(token: &str) -> CredentialStore {
    let store = CredentialStore::open_in_memory().unwrap();
    store.save(
        token,
        &Profile {
            user_id: 1,
            email: "a@b.com".to_string(),
            name: "Ann".to_string(),
        },
    );
    store
}

#[test]
fn bearer_token_attached_when_present() {
    let store = store_with_token("t1");
    let server = TestServer::start(vec![CannedResponse::json(200, "[]")]);
    let api = ApiClient::new(server.base_url(), &store).unwrap();

    let _: Vec<serde_json::Value> = api.get("/transactions").unwrap();
    assert_eq!(
        server.requests()[0].authorization.as_deref(),
        Some("Bearer t1")
    );
}

#[test]
fn request_goes_out_unauthenticated_when_store_empty() {
    let store = CredentialStore::open_in_memory().unwrap();
    let server = TestServer::start(vec![CannedResponse::json(200, "[]")]);
    let api = ApiClient::new(server.base_url(), &store).unwrap();

    let _: Vec<serde_json::Value> = api.get("/transactions").unwrap();
    assert_eq!(server.requests()[0].authorization, None);
}

#[test]
fn unauthorized_classifies_as_auth_and_keeps_token() {
    let store = store_with_token("stale");
    let server = TestServer::start(vec![CannedResponse::json(
        403,
        r#"{"message":"Token expired"}"#,
    )]);
    let api = ApiClient::new(server.base_url(), &store).unwrap();

    let err = api.get::<Vec<serde_json::Value>>("/transactions").unwrap_err();
    assert!(err.is_auth());
    assert_eq!(err.to_string(), "Token expired");
    // the gateway classifies; it never clears the session itself
    assert_eq!(store.token().as_deref(), Some("stale"));
}

#[test]
fn not_found_is_distinct_from_other_failures() {
    let store = store_with_token("t1");
    let server = TestServer::start(vec![CannedResponse::json(
        404,
        r#"{"message":"Transaction not found"}"#,
    )]);
    let api = ApiClient::new(server.base_url(), &store).unwrap();

    let err = api.delete("/transactions/99").unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn server_errors_classify_as_unavailable() {
    let store = CredentialStore::open_in_memory().unwrap();
    let server = TestServer::start(vec![CannedResponse::json(503, "{}")]);
    let api = ApiClient::new(server.base_url(), &store).unwrap();

    let err = api.get::<Vec<serde_json::Value>>("/transactions").unwrap_err();
    assert!(err.is_transient());
}

#[test]
fn other_client_errors_carry_status_and_message() {
    let store = CredentialStore::open_in_memory().unwrap();
    let server = TestServer::start(vec![CannedResponse::json(
        400,
        r#"{"message":"Amount is required"}"#,
    )]);
    let api = ApiClient::new(server.base_url(), &store).unwrap();

    let err = api
        .post::<serde_json::Value, _>("/transactions", &serde_json::json!({}))
        .unwrap_err();
    match err {
        ApiError::Request { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Amount is required");
        }
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[test]
fn connection_failure_is_unavailable() {
    // grab a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = CredentialStore::open_in_memory().unwrap();
    let api = ApiClient::new(format!("http://{addr}"), &store).unwrap();
    let err = api.get::<Vec<serde_json::Value>>("/transactions").unwrap_err();
    assert!(err.is_transient());
}

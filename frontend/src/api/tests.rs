#![cfg(not(coverage))]

use super::*;
use crate::test_support::helpers::{record_json, user_json};
use crate::utils::storage::{MemoryStorage, SessionStorage};
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

fn clients(server: &MockServer, token: Option<&str>) -> ApiClients {
    let storage = SessionStorage::in_memory(MemoryStorage::new());
    if let Some(token) = token {
        storage.set_token(token).unwrap();
    }
    ApiClients::with_base_url(&server.base_url(), storage)
}

#[tokio::test]
async fn login_posts_credentials_without_bearer_when_no_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .json_body(json!({ "email": "jane@example.com", "password": "secret" }));
            then.status(200).json_body(json!({ "token": "tok-1" }));
        })
        .await;

    let api = clients(&server, None);
    let response = api.auth.login("jane@example.com", "secret").await.unwrap();
    assert_eq!(response.token, "tok-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn check_token_sends_bearer_header_and_unwraps_user() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/check-token")
                .header("authorization", "Bearer tok-1");
            then.status(200).json_body(json!({ "user": user_json("u1") }));
        })
        .await;

    let api = clients(&server, Some("tok-1"));
    let user = api.auth.check_token().await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.fullname.as_deref(), Some("Jane Doe"));
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_response_becomes_explicit_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/attendance/today");
            then.status(401).json_body(json!({ "message": "jwt expired" }));
        })
        .await;

    let api = clients(&server, Some("stale"));
    let err = api.attendance.get_today_attendance("u1").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.status, Some(401));
    // The client reports the failure but leaves the session to the caller.
    assert_eq!(api.attendance.storage().token().as_deref(), Some("stale"));
}

#[tokio::test]
async fn today_attendance_passes_user_id_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/attendance/today")
                .query_param("user_id", "u 1");
            then.status(200).json_body(json!({
                "success": true,
                "data": record_json("r1", Some("2024-01-01T09:00:00Z"), None)
            }));
        })
        .await;

    let api = clients(&server, Some("tok"));
    let envelope = api.attendance.get_today_attendance("u 1").await.unwrap();
    assert!(envelope.success);
    let record = envelope.data.unwrap();
    assert_eq!(record.id, "r1");
    assert!(record.tap_in.is_some());
    assert!(record.tap_out.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn tap_returns_business_error_envelope_even_on_http_400() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/attendance/absence")
                .json_body(json!({ "user_id": "u1" }));
            then.status(400).json_body(json!({
                "success": false,
                "statusCode": 400,
                "message": "Already completed attendance today"
            }));
        })
        .await;

    let api = clients(&server, Some("tok"));
    let envelope = api.attendance.tap_in_tap_out("u1").await.unwrap();
    assert!(envelope.is_already_completed());
    mock.assert_async().await;
}

#[tokio::test]
async fn tap_server_error_without_envelope_is_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/attendance/absence");
            then.status(500).body("upstream down");
        })
        .await;

    let api = clients(&server, Some("tok"));
    let err = api.attendance.tap_in_tap_out("u1").await.unwrap_err();
    assert_eq!(err.code, "HTTP_ERROR");
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn summary_uses_path_id_and_date_range() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/attendance/user/u1")
                .query_param("start_date", "2024-01-01")
                .query_param("end_date", "2024-01-31");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    record_json("r1", Some("2024-01-02T09:00:00Z"), Some("2024-01-02T17:00:00Z")),
                    record_json("r2", Some("2024-01-03T09:00:00Z"), None)
                ]
            }));
        })
        .await;

    let api = clients(&server, Some("tok"));
    let envelope = api
        .attendance
        .get_attendance_summary(
            "u1",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(envelope.data.unwrap().len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn transport_failure_is_request_failed() {
    let storage = SessionStorage::in_memory(MemoryStorage::new());
    // Port 9 (discard) is not expected to accept HTTP connections.
    let api = ApiClients::with_base_url("http://127.0.0.1:9", storage);
    let err = api.auth.check_token().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.starts_with("Request failed"));
}

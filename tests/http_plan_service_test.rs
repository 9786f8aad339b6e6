// ABOUTME: Integration tests for the HTTP meal-plan collaborator and its configuration
// ABOUTME: Uses a canned local HTTP responder to check wire format, error mapping, and env parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::init_test_logging;
use macro_recovery::config::PlannerConfig;
use macro_recovery::errors::ErrorCode;
use macro_recovery::models::{PlanStatus, PlanSubmission};
use macro_recovery::planner::{
    HttpPlanService, PlanRequestOrchestrator, PlanService, PollingPolicy,
};
use reqwest::StatusCode;
use serde_json::json;
use serial_test::serial;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Request as seen by the canned server: request line plus body
#[derive(Debug, Clone)]
struct Recorded {
    line: String,
    body: String,
}

struct CannedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Serve `handler(request_line)` responses on an ephemeral local port
async fn spawn_server(
    handler: impl Fn(&str) -> (u16, String) + Send + Sync + 'static,
) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let recorded = Arc::clone(&recorded);
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                let mut buffer = Vec::new();
                let mut chunk = [0_u8; 4096];
                let header_end = loop {
                    let n = socket.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        return;
                    }
                    buffer.extend_from_slice(&chunk[..n]);
                    if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                        break pos + 4;
                    }
                };
                let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
                let content_length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                while buffer.len() < header_end + content_length {
                    let n = socket.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    buffer.extend_from_slice(&chunk[..n]);
                }

                let line = head.lines().next().unwrap_or_default().to_owned();
                let body = String::from_utf8_lossy(&buffer[header_end..]).to_string();
                let (status, response_body) = handler(&line);
                recorded.lock().unwrap().push(Recorded { line, body });

                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
                    response_body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            });
        }
    });

    CannedServer {
        base_url: format!("http://{addr}/"),
        requests,
    }
}

fn config_for(base_url: &str) -> PlannerConfig {
    PlannerConfig {
        base_url: Url::parse("http://localhost:8000/").unwrap(),
        polling: PollingPolicy::default(),
        http_timeout: Duration::from_secs(5),
    }
    .with_base_url(base_url)
    .unwrap()
}

fn submission() -> PlanSubmission {
    PlanSubmission {
        user_input: json!({"meals": 3, "preferences": ["vegetarian"]}),
        user_profile: json!({"weight_kg": 70, "goal": "recovery"}),
    }
}

#[tokio::test]
async fn submit_posts_json_and_reads_receipt() {
    init_test_logging();
    let server = spawn_server(|_| {
        (202, r#"{"status":"processing","request_id":"abc-123"}"#.to_owned())
    })
    .await;
    let service = HttpPlanService::new(&config_for(&server.base_url)).unwrap();

    let receipt = service.submit(&submission()).await.unwrap();
    assert_eq!(receipt.remote_id, "abc-123");
    assert_eq!(receipt.status, PlanStatus::Processing);

    let recorded = server.requests.lock().unwrap().clone();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].line.starts_with("POST /api/planner/requests "));
    let body: serde_json::Value = serde_json::from_str(&recorded[0].body).unwrap();
    assert_eq!(body["user_input"]["meals"], 3);
    assert_eq!(body["user_profile"]["goal"], "recovery");
}

#[tokio::test]
async fn poll_reads_status_result_and_error() {
    init_test_logging();
    let server = spawn_server(|line| {
        if line.contains("/done ") {
            (200, r#"{"status":"completed","result":{"days":2}}"#.to_owned())
        } else {
            (200, r#"{"status":"failed","error":"no recipes match"}"#.to_owned())
        }
    })
    .await;
    let service = HttpPlanService::new(&config_for(&server.base_url)).unwrap();

    let done = service.poll("done").await.unwrap();
    assert_eq!(done.status, PlanStatus::Completed);
    assert_eq!(done.result, Some(json!({"days": 2})));

    let failed = service.poll("broken").await.unwrap();
    assert_eq!(failed.status, PlanStatus::Failed);
    assert_eq!(failed.error.as_deref(), Some("no recipes match"));

    let recorded = server.requests.lock().unwrap().clone();
    assert!(recorded[0].line.starts_with("GET /api/planner/requests/done "));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = spawn_server(|_| (200, r#"{"status":"processing"}"#.to_owned())).await;
    let service =
        HttpPlanService::new(&config_for(&format!("{}planner/v1", server.base_url))).unwrap();
    assert!(service.base_url().as_str().ends_with("/planner/v1/"));

    service.poll("id with space").await.unwrap();

    let recorded = server.requests.lock().unwrap().clone();
    assert!(recorded[0]
        .line
        .starts_with("GET /planner/v1/api/planner/requests/id%20with%20space "));
}

#[tokio::test]
async fn non_success_status_maps_to_error_code() {
    let server = spawn_server(|_| (404, r#"{"detail":"Request not found"}"#.to_owned())).await;
    let service = HttpPlanService::new(&config_for(&server.base_url)).unwrap();

    let err = service.poll("gone").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(err.message.contains("Request not found"));
}

#[tokio::test]
async fn malformed_success_body_is_external_service_error() {
    let server = spawn_server(|_| (200, "not json".to_owned())).await;
    let service = HttpPlanService::new(&config_for(&server.base_url)).unwrap();

    let err = service.poll("x").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("Failed to parse response"));
}

#[tokio::test]
async fn unreachable_backend_is_unavailable() {
    init_test_logging();
    let service = HttpPlanService::new(&config_for("http://127.0.0.1:1/")).unwrap();

    let err = service.submit(&submission()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[test]
fn error_responses_map_by_status() {
    let cases = [
        (StatusCode::NOT_FOUND, r#"{"error":"missing"}"#, ErrorCode::ResourceNotFound),
        (
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":"slow down"}"#,
            ErrorCode::ExternalServiceError,
        ),
        (StatusCode::BAD_REQUEST, r#"{"error":"bad"}"#, ErrorCode::InvalidInput),
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#,
            ErrorCode::InvalidInput,
        ),
        (
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"error":"warming up"}"#,
            ErrorCode::ExternalServiceUnavailable,
        ),
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"boom"}"#,
            ErrorCode::ExternalServiceError,
        ),
    ];

    for (status, body, code) in cases {
        let err = HttpPlanService::parse_error_response(status, body);
        assert_eq!(err.code, code, "status {status}");
    }

    let err = HttpPlanService::parse_error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#,
    );
    assert!(err.message.contains("field required"));
}

#[test]
fn unparseable_error_body_is_truncated() {
    let body = "x".repeat(500);
    let err = HttpPlanService::parse_error_response(StatusCode::BAD_GATEWAY, &body);

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("API error (502 Bad Gateway)"));
    assert!(err.message.len() < 300);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn orchestrator_drives_http_backend_to_completion() {
    init_test_logging();
    let server = spawn_server(|line| {
        if line.starts_with("POST") {
            (202, r#"{"status":"processing","request_id":"r-1"}"#.to_owned())
        } else {
            (200, r#"{"status":"completed","result":{"meals":["oats","salad"]}}"#.to_owned())
        }
    })
    .await;
    let service = Arc::new(HttpPlanService::new(&config_for(&server.base_url)).unwrap());
    let orchestrator = PlanRequestOrchestrator::new(
        service,
        PollingPolicy {
            interval: Duration::from_millis(10),
            ceiling: Duration::from_secs(5),
        },
    );

    let id = orchestrator.submit(json!({"meals": 2}), json!({})).await.unwrap();
    let plan = orchestrator.await_plan(id).await.unwrap();

    assert_eq!(plan, json!({"meals": ["oats", "salad"]}));
    assert_eq!(orchestrator.outstanding(), 0);
    let recorded = server.requests.lock().unwrap().clone();
    assert!(recorded[1].line.starts_with("GET /api/planner/requests/r-1 "));
}

fn clear_planner_env() {
    for key in [
        "RECOVERY_PLANNER_BASE_URL",
        "RECOVERY_PLANNER_POLL_INTERVAL_SECS",
        "RECOVERY_PLANNER_POLL_CEILING_SECS",
        "RECOVERY_PLANNER_HTTP_TIMEOUT_SECS",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn planner_config_defaults() {
    clear_planner_env();
    let config = PlannerConfig::from_env().unwrap();

    assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    assert_eq!(config.polling, PollingPolicy::default());
    assert_eq!(config.http_timeout, Duration::from_secs(30));
}

#[test]
#[serial]
fn planner_config_env_overrides() {
    clear_planner_env();
    env::set_var("RECOVERY_PLANNER_BASE_URL", "https://planner.internal/api-root");
    env::set_var("RECOVERY_PLANNER_POLL_INTERVAL_SECS", "5");
    env::set_var("RECOVERY_PLANNER_POLL_CEILING_SECS", "600");
    env::set_var("RECOVERY_PLANNER_HTTP_TIMEOUT_SECS", "12");

    let config = PlannerConfig::from_env().unwrap();
    clear_planner_env();

    assert_eq!(config.base_url.as_str(), "https://planner.internal/api-root/");
    assert_eq!(config.polling.interval, Duration::from_secs(5));
    assert_eq!(config.polling.ceiling, Duration::from_secs(600));
    assert_eq!(config.http_timeout, Duration::from_secs(12));
}

#[test]
#[serial]
fn planner_config_rejects_bad_values() {
    for (key, value) in [
        ("RECOVERY_PLANNER_POLL_INTERVAL_SECS", "ten"),
        ("RECOVERY_PLANNER_POLL_INTERVAL_SECS", "0"),
        ("RECOVERY_PLANNER_POLL_CEILING_SECS", "5"),
        ("RECOVERY_PLANNER_BASE_URL", "not a url"),
        ("RECOVERY_PLANNER_BASE_URL", "ftp://planner.internal/"),
    ] {
        clear_planner_env();
        env::set_var(key, value);
        let err = PlannerConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError, "{key}={value}");
    }
    clear_planner_env();
}

//! Health probe integration tests.
//!
//! Probes run against loopback servers speaking raw HTTP, so every state
//! of the probe's URL → reachability → status machine is exercised
//! without a live endpoint.

use sparql_datasource::{Datasource, HealthStatus};

use super::common::{context, empty_response, serve_once};

#[tokio::test]
async fn test_invalid_url_fails_without_network() {
    let datasource = Datasource::new();
    let ctx = context(r#"{"url":"not a url","username":""}"#, None);

    let result = datasource.check_health(&ctx).await;

    assert_eq!(result.status, HealthStatus::Error);
    assert_eq!(result.message, "invalid URL format");
}

#[tokio::test]
async fn test_malformed_settings_reported_as_error_status() {
    let datasource = Datasource::new();
    let ctx = context("{oops", None);

    let result = datasource.check_health(&ctx).await;

    assert_eq!(result.status, HealthStatus::Error);
    assert!(result.message.contains("malformed settings"));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let datasource = Datasource::new();
    let ctx = context(r#"{"url":"http://127.0.0.1:9/sparql","username":""}"#, None);

    let result = datasource.check_health(&ctx).await;

    assert_eq!(result.status, HealthStatus::Error);
    assert!(result.message.contains("endpoint not reachable"));
}

#[tokio::test]
async fn test_endpoint_returning_server_error() {
    let endpoint = serve_once(empty_response("HTTP/1.1 500 Internal Server Error")).await;
    let datasource = Datasource::new();
    let ctx = context(&format!(r#"{{"url":"{endpoint}","username":""}}"#), None);

    let result = datasource.check_health(&ctx).await;

    assert_eq!(result.status, HealthStatus::Error);
    assert!(result.message.contains("error status"));
}

#[tokio::test]
async fn test_healthy_endpoint() {
    let endpoint = serve_once(empty_response("HTTP/1.1 200 OK")).await;
    let datasource = Datasource::new();
    let ctx = context(&format!(r#"{{"url":"{endpoint}","username":""}}"#), None);

    let result = datasource.check_health(&ctx).await;

    assert_eq!(result.status, HealthStatus::Ok);
    assert_eq!(result.message, "endpoint is valid and reachable");
}

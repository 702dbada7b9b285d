//! Endpoint health probing.
//!
//! Validates the configured endpoint URL and checks that something answers
//! at it. The probe is decoupled from query execution: it transfers no
//! body, sends no credentials, and runs no query.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::settings::ConnectionSettings;

/// Bounded timeout for the existence probe.
const PROBE_TIMEOUT_SECS: u64 = 3;

/// Outcome status of a health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// Health check outcome: a status plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub message: String,
}

impl HealthCheckResult {
    /// Creates an OK result with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Ok,
            message: message.into(),
        }
    }

    /// Creates an error result with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Error,
            message: message.into(),
        }
    }

    /// Returns true when the check passed.
    pub fn is_ok(&self) -> bool {
        self.status == HealthStatus::Ok
    }
}

/// Probes the configured endpoint: URL syntax, reachability, then status.
///
/// Never fails; every outcome is reported as a structured result.
pub async fn probe(settings: &ConnectionSettings) -> HealthCheckResult {
    let url = match validate_url(&settings.url) {
        Ok(url) => url,
        Err(message) => return HealthCheckResult::error(message),
    };

    debug!(endpoint = %url, "probing endpoint");

    let client = match Client::builder()
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(e) => return HealthCheckResult::error(format!("failed to create HTTP client: {e}")),
    };

    // HEAD keeps the probe body-free; we only care whether something
    // answers at the URL.
    let response = match client.head(url).send().await {
        Ok(response) => response,
        Err(e) => return HealthCheckResult::error(format!("endpoint not reachable: {e}")),
    };

    evaluate_status(response.status())
}

/// Checks that the endpoint URL parses as an absolute http(s) URL.
fn validate_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|_| "invalid URL format".to_string())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!(
            "invalid URL format: unsupported scheme '{}'",
            url.scheme()
        ));
    }
    Ok(url)
}

/// Maps the probe's response status to a health result.
fn evaluate_status(status: StatusCode) -> HealthCheckResult {
    if status.is_client_error() || status.is_server_error() {
        HealthCheckResult::error(format!(
            "endpoint reachable but returned error status ({status})"
        ))
    } else {
        HealthCheckResult::ok("endpoint is valid and reachable")
    }
}

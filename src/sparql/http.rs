//! HTTP SPARQL client.
//!
//! Implements the `SparqlClient` trait over the SPARQL 1.1 Protocol:
//! queries are POSTed form-encoded to the endpoint and results come back
//! as SPARQL results-JSON. Connections use digest authentication when the
//! settings carry credentials.

use async_trait::async_trait;
use diqwest::WithDigestAuth;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::error::{DatasourceError, Result};
use crate::settings::ConnectionSettings;
use crate::sparql::results::{self, ResultRow};
use crate::sparql::SparqlClient;

/// Default request timeout. Bounds worst-case latency per query.
const DEFAULT_TIMEOUT_MS: u64 = 1500;

/// Media type for SPARQL results-JSON.
const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Longest slice of an error response body to carry into a message.
const MAX_BODY_SNIPPET: usize = 200;

/// SPARQL-over-HTTP client bound to one endpoint.
pub struct HttpSparqlClient {
    endpoint: String,
    credentials: Option<(String, String)>,
    client: Client,
}

impl HttpSparqlClient {
    /// Creates a client for the configured endpoint with the default
    /// request timeout.
    pub fn new(settings: &ConnectionSettings) -> Result<Self> {
        Self::with_timeout(settings, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    /// Creates a client with an explicit request timeout.
    pub fn with_timeout(settings: &ConnectionSettings, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DatasourceError::internal(format!("failed to create HTTP client: {e}")))?;

        let credentials = settings
            .has_credentials()
            .then(|| (settings.username.clone(), settings.password.clone()));

        Ok(Self {
            endpoint: settings.url.clone(),
            credentials,
            client,
        })
    }
}

#[async_trait]
impl SparqlClient for HttpSparqlClient {
    async fn execute_query(&self, query: &str) -> Result<Vec<ResultRow>> {
        debug!(endpoint = %self.endpoint, "executing SPARQL query");

        // The query text goes out verbatim; correctness is the caller's
        // responsibility.
        let request = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, SPARQL_RESULTS_JSON)
            .form(&[("query", query)]);

        let response = match &self.credentials {
            Some((username, password)) => request
                .send_with_digest_auth(username, password)
                .await
                .map_err(map_digest_error)?,
            None => request.send().await.map_err(map_transport_error)?,
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DatasourceError::query(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(map_status_error(status, &body, &self.endpoint));
        }

        results::parse_rows(&body)
    }
}

/// Classifies reqwest transport failures into query errors.
fn map_transport_error(error: reqwest::Error) -> DatasourceError {
    if error.is_timeout() {
        DatasourceError::query("request timed out")
    } else if error.is_connect() {
        DatasourceError::query(format!("endpoint not reachable: {error}"))
    } else {
        DatasourceError::query(format!("request failed: {error}"))
    }
}

/// Classifies digest-auth request failures into query errors.
fn map_digest_error(error: diqwest::error::Error) -> DatasourceError {
    match error {
        diqwest::error::Error::Reqwest(e) => map_transport_error(e),
        other => DatasourceError::query(format!("request failed: {other}")),
    }
}

/// Maps endpoint-reported HTTP errors into query errors.
fn map_status_error(status: StatusCode, body: &str, endpoint: &str) -> DatasourceError {
    let snippet = body_snippet(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DatasourceError::query(format!(
            "authentication failed for {endpoint} ({status})"
        )),
        StatusCode::BAD_REQUEST => {
            DatasourceError::query(format!("endpoint rejected query (400): {snippet}"))
        }
        StatusCode::NOT_FOUND => {
            DatasourceError::query(format!("endpoint not found (404): {endpoint}"))
        }
        _ => DatasourceError::query(format!("endpoint returned status {status}: {snippet}")),
    }
}

/// Trims an error body for inclusion in a message.
fn body_snippet(body: &str) -> &str {
    let end = body
        .char_indices()
        .nth(MAX_BODY_SNIPPET)
        .map_or(body.len(), |(i, _)| i);
    body[..end].trim_end()
}

//! Mock SPARQL clients for testing.
//!
//! Provide in-memory implementations of `SparqlClient` so the orchestrator
//! and frame pipeline can be exercised without a network.

use async_trait::async_trait;

use crate::error::{DatasourceError, Result};
use crate::sparql::results::ResultRow;
use crate::sparql::SparqlClient;

/// A mock client that returns the same canned rows for every query.
#[derive(Debug, Clone, Default)]
pub struct MockSparqlClient {
    rows: Vec<ResultRow>,
}

impl MockSparqlClient {
    /// Creates a mock client that returns an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock client that returns the given rows.
    pub fn with_rows(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl SparqlClient for MockSparqlClient {
    async fn execute_query(&self, _query: &str) -> Result<Vec<ResultRow>> {
        Ok(self.rows.clone())
    }
}

/// A mock client that fails every query with the configured message.
#[derive(Debug, Clone)]
pub struct FailingSparqlClient {
    message: String,
}

impl FailingSparqlClient {
    /// Creates a failing client with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingSparqlClient {
    fn default() -> Self {
        Self::new("connection refused")
    }
}

#[async_trait]
impl SparqlClient for FailingSparqlClient {
    async fn execute_query(&self, _query: &str) -> Result<Vec<ResultRow>> {
        Err(DatasourceError::query(self.message.clone()))
    }
}

//! SPARQL endpoint access.
//!
//! Provides a trait-based interface for query execution so the remote
//! endpoint can be swapped out for in-memory mocks in tests.

mod http;
mod mock;
mod results;

pub use http::HttpSparqlClient;
pub use mock::{FailingSparqlClient, MockSparqlClient};
pub use results::{parse_rows, ResultRow};

use crate::error::Result;
use crate::settings::ConnectionSettings;
use async_trait::async_trait;

/// Trait defining the interface for SPARQL query clients.
///
/// Implementations submit the raw query text verbatim and return solutions
/// in whatever order the endpoint streams them.
#[async_trait]
pub trait SparqlClient: Send + Sync {
    /// Executes a SPARQL query and returns its result rows.
    async fn execute_query(&self, query: &str) -> Result<Vec<ResultRow>>;
}

/// Creates a query client for the configured endpoint.
///
/// This is the central factory function for endpoint connections; each
/// request batch gets its own client.
pub fn connect(settings: &ConnectionSettings) -> Result<Box<dyn SparqlClient>> {
    let client = HttpSparqlClient::new(settings)?;
    Ok(Box::new(client))
}

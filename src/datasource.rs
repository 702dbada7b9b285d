//! Batch query orchestration.
//!
//! Entry points the host runtime drives: `query_data` for query batches,
//! `check_health` for the configuration test button, `metric_find` for
//! variable lookups. Failures are recorded per request; one bad query
//! never aborts its siblings or the process.

use serde::Serialize;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{DatasourceError, Result};
use crate::frame::Frame;
use crate::health::{self, HealthCheckResult};
use crate::plugin::{
    DataQuery, DataResponse, PluginContext, QueryDataRequest, QueryDataResponse, QueryModel,
};
use crate::settings::ConnectionSettings;
use crate::sparql::{self, SparqlClient};

/// A single lookup value for variable queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricFindValue {
    pub text: String,
}

/// The datasource backend. Stateless: settings are reconstructed fresh
/// per incoming batch from the request's plugin context.
#[derive(Debug, Default)]
pub struct Datasource;

impl Datasource {
    /// Creates a new datasource instance.
    pub fn new() -> Self {
        Self
    }

    /// Handles a batch of queries and returns one response per query,
    /// keyed by correlation id.
    ///
    /// Only settings resolution can fail the whole call; every per-query
    /// failure is recorded against that query's entry.
    pub async fn query_data(&self, request: QueryDataRequest) -> Result<QueryDataResponse> {
        self.query_data_with_cancel(request, CancellationToken::new())
            .await
    }

    /// Like [`Self::query_data`], honoring an external cancellation
    /// signal.
    ///
    /// When the token fires, the in-flight query aborts promptly, queries
    /// not yet finished record a cancellation error, and already-completed
    /// entries are preserved.
    pub async fn query_data_with_cancel(
        &self,
        request: QueryDataRequest,
        cancel: CancellationToken,
    ) -> Result<QueryDataResponse> {
        let settings = resolve_settings(&request.plugin_context)?;
        debug!(endpoint = %settings.display_string(), queries = request.queries.len(), "handling query batch");

        let client = sparql::connect(&settings)?;
        let responses = run_queries(client.as_ref(), &request.queries, &cancel).await;

        Ok(QueryDataResponse { responses })
    }

    /// Health check for the configured endpoint.
    ///
    /// Takes the same settings blob as query execution and always returns
    /// a structured result, never an error.
    pub async fn check_health(&self, context: &PluginContext) -> HealthCheckResult {
        match resolve_settings(context) {
            Ok(settings) => health::probe(&settings).await,
            Err(e) => HealthCheckResult::error(e.to_string()),
        }
    }

    /// Executes a single lookup query and returns the first column's
    /// values, for host-side variable completion.
    pub async fn metric_find(
        &self,
        context: &PluginContext,
        query: &DataQuery,
    ) -> Result<Vec<MetricFindValue>> {
        let settings = resolve_settings(context)?;
        let client = sparql::connect(&settings)?;
        find_metric_values(client.as_ref(), query).await
    }
}

fn resolve_settings(context: &PluginContext) -> Result<ConnectionSettings> {
    ConnectionSettings::resolve(&context.json_data, &context.secure_data)
}

/// Runs a batch of queries against an already-connected client.
///
/// Guarantees exactly one response entry per input query, under failure
/// and under cancellation alike.
pub async fn run_queries(
    client: &dyn SparqlClient,
    queries: &[DataQuery],
    cancel: &CancellationToken,
) -> HashMap<String, DataResponse> {
    let mut responses = HashMap::with_capacity(queries.len());

    for query in queries {
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                DataResponse::Error(DatasourceError::query("query cancelled"))
            }
            response = run_query(client, query) => response,
        };

        if let DataResponse::Error(e) = &response {
            warn!(ref_id = %query.ref_id, "query failed: {e}");
        }
        responses.insert(query.ref_id.clone(), response);
    }

    responses
}

/// Runs one query end to end: parse payload, execute, materialize.
async fn run_query(client: &dyn SparqlClient, query: &DataQuery) -> DataResponse {
    let model = match QueryModel::parse(&query.json) {
        Ok(model) => model,
        Err(e) => return DataResponse::Error(e),
    };

    match client.execute_query(&model.rdf_query).await {
        Ok(rows) => {
            debug!(ref_id = %query.ref_id, rows = rows.len(), "query succeeded");
            DataResponse::Frame(Frame::from_rows(&rows))
        }
        Err(e) => DataResponse::Error(e),
    }
}

/// Lookup-query body shared by [`Datasource::metric_find`] and tests:
/// first column of the materialized frame, in row order.
pub async fn find_metric_values(
    client: &dyn SparqlClient,
    query: &DataQuery,
) -> Result<Vec<MetricFindValue>> {
    let model = QueryModel::parse(&query.json)?;
    let rows = client.execute_query(&model.rdf_query).await?;
    let frame = Frame::from_rows(&rows);

    Ok(frame
        .columns
        .first()
        .map(|column| {
            column
                .values
                .iter()
                .map(|value| MetricFindValue {
                    text: value.clone(),
                })
                .collect()
        })
        .unwrap_or_default())
}

//! Host plugin boundary types.
//!
//! The shapes the host runtime hands to the pipeline per call: a batch of
//! correlated queries plus the plugin context carrying the serialized
//! settings blob and the decrypted secure data.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::{DatasourceError, Result};
use crate::frame::Frame;

/// Batch-wide plugin context supplied by the host.
#[derive(Clone)]
pub struct PluginContext {
    /// Serialized settings blob (JSON).
    pub json_data: String,

    /// Decrypted secrets keyed by name. Expected key: `"password"`.
    pub secure_data: HashMap<String, String>,
}

impl PluginContext {
    /// Creates a plugin context from the settings blob and secure data.
    pub fn new(json_data: impl Into<String>, secure_data: HashMap<String, String>) -> Self {
        Self {
            json_data: json_data.into(),
            secure_data,
        }
    }
}

impl fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Secure values are never printed; only their key names are.
        let keys: Vec<&str> = self.secure_data.keys().map(String::as_str).collect();
        f.debug_struct("PluginContext")
            .field("json_data", &self.json_data)
            .field("secure_data", &keys)
            .finish()
    }
}

/// One query in a batch, correlated by `ref_id`.
#[derive(Debug, Clone)]
pub struct DataQuery {
    /// Opaque correlation id, unique within the batch.
    pub ref_id: String,

    /// Raw query payload: a JSON object with field `rdfQuery`.
    pub json: String,
}

impl DataQuery {
    /// Creates a query with the given correlation id and raw payload.
    pub fn new(ref_id: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            json: json.into(),
        }
    }
}

/// Decoded per-query payload.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryModel {
    /// The raw SPARQL query text.
    #[serde(rename = "rdfQuery")]
    pub rdf_query: String,
}

impl QueryModel {
    /// Parses the payload of one query. Failures are isolated to that
    /// query, never the batch.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DatasourceError::query_parse(format!("malformed query payload: {e}")))
    }
}

/// A batch of queries plus the context they run under.
#[derive(Debug, Clone)]
pub struct QueryDataRequest {
    pub plugin_context: PluginContext,
    pub queries: Vec<DataQuery>,
}

/// Result of one query: a materialized frame or the recorded failure.
#[derive(Debug)]
pub enum DataResponse {
    Frame(Frame),
    Error(DatasourceError),
}

impl DataResponse {
    /// Returns the frame, if the query succeeded.
    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::Frame(frame) => Some(frame),
            Self::Error(_) => None,
        }
    }

    /// Returns the recorded error, if the query failed.
    pub fn error(&self) -> Option<&DatasourceError> {
        match self {
            Self::Frame(_) => None,
            Self::Error(e) => Some(e),
        }
    }

    /// Returns true when the query failed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Batch output: exactly one entry per input query, keyed by `ref_id`.
#[derive(Debug, Default)]
pub struct QueryDataResponse {
    pub responses: HashMap<String, DataResponse>,
}

impl QueryDataResponse {
    /// Creates an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the response for a correlation id.
    pub fn get(&self, ref_id: &str) -> Option<&DataResponse> {
        self.responses.get(ref_id)
    }
}

//! Error types for the datasource pipeline.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for datasource operations.
#[derive(Error, Debug)]
pub enum DatasourceError {
    /// Settings-resolution errors (malformed blob, missing required fields).
    ///
    /// A configuration error aborts the whole batch: settings are shared
    /// across every query in a request.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed per-query request payload. Isolated to that query.
    #[error("Query parse error: {0}")]
    QueryParse(String),

    /// Query execution errors (endpoint unreachable, auth failure, timeout,
    /// endpoint-reported fault). Isolated to that query.
    #[error("Query error: {0}")]
    Query(String),

    /// Internal errors (unexpected states, bugs).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DatasourceError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a query parse error with the given message.
    pub fn query_parse(msg: impl Into<String>) -> Self {
        Self::QueryParse(msg.into())
    }

    /// Creates a query execution error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::QueryParse(_) => "Query Parse Error",
            Self::Query(_) => "Query Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using DatasourceError.
pub type Result<T> = std::result::Result<T, DatasourceError>;

//! SPARQL results-JSON parsing.
//!
//! Implements the W3C SPARQL 1.1 Query Results JSON format
//! (<https://www.w3.org/TR/sparql11-results-json/>) and normalizes each
//! solution into an ordered row of string bindings.

use crate::error::{DatasourceError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// One result row: an ordered mapping from variable name to its bound
/// value's string form.
///
/// Binding order follows the endpoint-declared variable order from the
/// result header, so schema inference downstream is deterministic. A
/// variable left unbound in a solution is simply absent from the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    bindings: Vec<(String, String)>,
}

impl ResultRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a row from name/value pairs, preserving their order.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            bindings: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    /// Appends a binding. Rows are small, so no index is kept.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.bindings.push((name.into(), value.into()));
    }

    /// Returns the value bound to `name`, or `None` if unbound in this row.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates variable names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the number of bound variables in this row.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true when no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// Wire types for the results-JSON document.

#[derive(Debug, Deserialize)]
struct SparqlResults {
    head: ResultsHead,
    #[serde(default)]
    results: ResultsBody,
}

#[derive(Debug, Deserialize)]
struct ResultsHead {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ResultsBody {
    #[serde(default)]
    bindings: Vec<HashMap<String, BindingValue>>,
}

/// A single bound term in a solution.
///
/// The `typed-literal` variant is non-standard but still emitted by some
/// endpoints (notably Virtuoso).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum BindingValue {
    Uri {
        value: String,
    },
    Literal {
        value: String,
    },
    Bnode {
        value: String,
    },
    #[serde(rename = "typed-literal")]
    TypedLiteral {
        value: String,
    },
}

impl BindingValue {
    /// The raw string form of the term: IRI text, lexical form, or blank
    /// node label.
    fn into_value(self) -> String {
        match self {
            Self::Uri { value }
            | Self::Literal { value }
            | Self::Bnode { value }
            | Self::TypedLiteral { value } => value,
        }
    }
}

/// Parses a results-JSON document into rows.
///
/// Each row's bindings are ordered by the header's `vars` declaration;
/// variables the endpoint left unbound in a solution are omitted from that
/// row. A document with no solutions parses to an empty vector.
pub fn parse_rows(body: &str) -> Result<Vec<ResultRow>> {
    let document: SparqlResults = serde_json::from_str(body)
        .map_err(|e| DatasourceError::query(format!("malformed query results: {e}")))?;

    let vars = document.head.vars;
    let mut rows = Vec::with_capacity(document.results.bindings.len());

    for mut solution in document.results.bindings {
        let mut row = ResultRow::new();
        for var in &vars {
            if let Some(term) = solution.remove(var) {
                row.push(var.clone(), term.into_value());
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

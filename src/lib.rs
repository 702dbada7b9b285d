//! Backend query pipeline for a SPARQL datasource plugin.
//!
//! Executes host-supplied SPARQL queries against a remote endpoint and
//! normalizes the bindings into column-oriented frames for visualization.
//! Batches are isolated per request: one failing query is recorded against
//! its own correlation id while its siblings proceed.

pub mod datasource;
pub mod error;
pub mod frame;
pub mod health;
pub mod logging;
pub mod plugin;
pub mod settings;
pub mod sparql;

pub use datasource::{Datasource, MetricFindValue};
pub use error::{DatasourceError, Result};
pub use frame::{Column, Frame};
pub use health::{HealthCheckResult, HealthStatus};
pub use plugin::{DataQuery, DataResponse, PluginContext, QueryDataRequest, QueryDataResponse};
pub use settings::ConnectionSettings;

//! Connection settings resolution.
//!
//! Decodes the endpoint configuration blob supplied by the host runtime and
//! merges in the decrypted password from the request's secure data. The
//! password is never taken from the blob itself, even when present.

use crate::error::{DatasourceError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Key under which the host supplies the decrypted endpoint password.
pub const PASSWORD_KEY: &str = "password";

/// Serialized settings blob as stored by the host.
///
/// The `password` field is accepted for backward compatibility with blobs
/// that were written before secure storage existed, but its value is
/// discarded during resolution.
#[derive(Debug, Deserialize)]
struct SettingsBlob {
    url: String,
    #[serde(rename = "Repository", default)]
    repository: Option<String>,
    username: String,
    #[serde(default)]
    #[allow(dead_code)]
    password: Option<String>,
}

/// Resolved connection settings for one request batch.
///
/// Constructed fresh per batch and never mutated afterwards. Deliberately
/// not `Serialize`: the decrypted password must not round-trip into a blob.
#[derive(Clone)]
pub struct ConnectionSettings {
    /// SPARQL endpoint URL.
    pub url: String,

    /// Username for digest authentication. May be empty.
    pub username: String,

    /// Password, sourced exclusively from the decrypted secure data.
    pub password: String,

    /// Optional repository identifier on the endpoint.
    pub repository: Option<String>,
}

impl ConnectionSettings {
    /// Resolves settings from the serialized blob plus the decrypted secure
    /// data map.
    ///
    /// The blob must deserialize into at least `{url, username}`; anything
    /// less is a configuration error that aborts the whole batch. Whatever
    /// password the blob carries is overwritten by `secure_data["password"]`
    /// (empty when the host supplied no secret).
    pub fn resolve(json_data: &str, secure_data: &HashMap<String, String>) -> Result<Self> {
        let blob: SettingsBlob = serde_json::from_str(json_data)
            .map_err(|e| DatasourceError::config(format!("malformed settings: {e}")))?;

        if blob.url.trim().is_empty() {
            return Err(DatasourceError::config("malformed settings: empty url"));
        }

        let password = secure_data.get(PASSWORD_KEY).cloned().unwrap_or_default();

        Ok(Self {
            url: blob.url,
            username: blob.username,
            password,
            repository: blob.repository,
        })
    }

    /// Returns true when both username and password are non-empty.
    ///
    /// The query executor applies digest authentication on this condition.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// Returns a display-safe string (no password) for logging.
    pub fn display_string(&self) -> String {
        match &self.repository {
            Some(repo) => format!("{} (repository: {repo})", self.url),
            None => self.url.clone(),
        }
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("repository", &self.repository)
            .finish()
    }
}

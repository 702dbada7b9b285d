//! Settings resolution integration tests.

use std::collections::HashMap;

use sparql_datasource::{ConnectionSettings, DatasourceError};

use super::common::context;

#[test]
fn test_password_comes_from_secure_store_only() {
    let mut secure = HashMap::new();
    secure.insert("password".to_string(), "p".to_string());

    let settings = ConnectionSettings::resolve(
        r#"{"url":"https://x/sparql","username":"u","password":"blob-password"}"#,
        &secure,
    )
    .unwrap();

    assert_eq!(settings.password, "p");
    assert_eq!(settings.username, "u");
    assert_eq!(settings.url, "https://x/sparql");
}

#[test]
fn test_settings_debug_never_shows_password() {
    let mut secure = HashMap::new();
    secure.insert("password".to_string(), "super-secret".to_string());

    let settings =
        ConnectionSettings::resolve(r#"{"url":"https://x/sparql","username":"u"}"#, &secure)
            .unwrap();

    assert!(!format!("{settings:?}").contains("super-secret"));
}

#[test]
fn test_incomplete_blob_is_config_error() {
    for blob in [r#"{"username":"u"}"#, r#"{"url":"https://x"}"#, "[]", ""] {
        let result = ConnectionSettings::resolve(blob, &HashMap::new());
        assert!(
            matches!(result, Err(DatasourceError::Config(_))),
            "expected config error for blob {blob:?}"
        );
    }
}

#[test]
fn test_plugin_context_debug_redacts_secure_data() {
    let ctx = context(r#"{"url":"https://x","username":"u"}"#, Some("hunter2"));
    assert!(!format!("{ctx:?}").contains("hunter2"));
}

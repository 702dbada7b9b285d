//! Shared helpers for integration tests.

use std::collections::HashMap;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use sparql_datasource::{DataQuery, PluginContext};

/// Builds a plugin context from a settings blob and an optional password
/// secret.
pub fn context(json_data: &str, password: Option<&str>) -> PluginContext {
    let mut secure = HashMap::new();
    if let Some(password) = password {
        secure.insert("password".to_string(), password.to_string());
    }
    PluginContext::new(json_data, secure)
}

/// Builds a query whose payload wraps the given SPARQL text.
pub fn query(ref_id: &str, sparql: &str) -> DataQuery {
    DataQuery::new(ref_id, format!(r#"{{"rdfQuery":"{sparql}"}}"#))
}

/// Serves one raw HTTP response on a loopback socket and returns the
/// endpoint URL. The connection is closed after the response is written.
pub async fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{addr}")
}

/// A minimal HTTP response with the given status line and no body.
pub fn empty_response(status_line: &str) -> String {
    format!("{status_line}\r\ncontent-length: 0\r\n\r\n")
}

/// A 200 response carrying a SPARQL results-JSON body.
pub fn results_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/sparql-results+json\r\ncontent-length: {}\r\n\r\n{body}",
        body.len()
    )
}

//! Canned HTTP endpoints for exercising request executors in tests.
//!
//! Each route models one server behaviour:
//! - `/` answers `200` with `{}`.
//! - `/bad-request` answers `400` with `{"code":400}`.
//! - `/timeout` accepts the request and never answers.
//! - `/echo` reflects method, path, content type and body as JSON.
//!
//! All routes accept any method.

use std::net::SocketAddr;

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// What the `/echo` route saw.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EchoedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Listen address for the binary, read from `HOST` and `PORT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable ports fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "ignoring invalid PORT");
                defaults.port
            }),
            None => defaults.port,
        };
        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/", any(ok))
        .route("/bad-request", any(bad_request))
        .route("/timeout", any(never_respond))
        .route("/echo", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve on an already-bound std listener from a dedicated thread.
///
/// Returns the bound address. The thread lives until the process exits;
/// a startup or serve failure is logged from the thread.
pub fn spawn(listener: std::net::TcpListener) -> std::io::Result<SocketAddr> {
    let addr = listener.local_addr()?;
    listener.set_nonblocking(true)?;

    std::thread::spawn(move || {
        let served = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .and_then(|rt| {
                rt.block_on(async {
                    let listener = TcpListener::from_std(listener)?;
                    run(listener).await
                })
            });
        if let Err(err) = served {
            tracing::error!(%addr, error = %err, "mock server stopped");
        }
    });

    Ok(addr)
}

async fn ok() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({})))
}

async fn bad_request() -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "code": 400 })))
}

async fn never_respond() -> StatusCode {
    std::future::pending().await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<EchoedRequest> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(EchoedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

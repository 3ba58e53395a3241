//! Caller-side description of one HTTP request.

use std::fmt;
use std::time::Duration;

use ureq::http::Uri;
use ureq::Agent;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest};

/// Timeout applied to the per-call client when none is supplied.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest response body read into memory unless overridden.
pub const DEFAULT_MAX_BODY_SIZE: u64 = 10 * 1024 * 1024;

/// Everything needed to issue one request.
///
/// When `client` is set its own configuration governs the call and
/// `timeout` is ignored.
#[derive(Clone)]
pub struct RequestConfig {
    pub method: String,
    pub url: String,
    pub body: Option<Vec<u8>>,
    pub content_type: Option<String>,
    pub timeout: Duration,
    pub client: Option<Agent>,
    pub max_body_size: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            url: String::new(),
            body: None,
            content_type: None,
            timeout: DEFAULT_TIMEOUT,
            client: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfig")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .field("content_type", &self.content_type)
            .field("timeout", &self.timeout)
            .field("client", &self.client.is_some())
            .field("max_body_size", &self.max_body_size)
            .finish()
    }
}

impl RequestConfig {
    /// A `GET` of `url` with every other field at its default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_secs(self, secs: u64) -> Self {
        self.with_timeout(Duration::from_secs(secs))
    }

    pub fn with_client(mut self, client: Agent) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_max_body_size(mut self, limit: u64) -> Self {
        self.max_body_size = limit;
        self
    }

    /// Validate the configuration and describe the request as plain data.
    ///
    /// Performs no I/O. An empty body is dropped, and `Content-Type` is only
    /// attached when there is a body to describe.
    pub fn build(&self) -> Result<HttpRequest, RequestError> {
        let method: HttpMethod = self.method.parse()?;
        validate_url(&self.url)?;

        let body = self.body.as_ref().filter(|b| !b.is_empty()).cloned();
        let mut headers = Vec::new();
        if let (Some(_), Some(content_type)) = (&body, &self.content_type) {
            headers.push(("content-type".to_string(), content_type.clone()));
        }

        Ok(HttpRequest {
            method,
            url: self.url.clone(),
            headers,
            body,
        })
    }
}

/// Accept only absolute `http`/`https` URLs with a host.
fn validate_url(url: &str) -> Result<(), RequestError> {
    let uri: Uri = url
        .parse()
        .map_err(|e| RequestError::Construction(format!("invalid url {url:?}: {e}")))?;

    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        Some(other) => {
            return Err(RequestError::Construction(format!(
                "unsupported scheme {other:?} in {url:?}"
            )))
        }
        None => {
            return Err(RequestError::Construction(format!(
                "url {url:?} has no scheme"
            )))
        }
    }

    if uri.host().map_or(true, str::is_empty) {
        return Err(RequestError::Construction(format!("url {url:?} has no host")));
    }
    Ok(())
}

//! Error types for the request executor, conversions and the port finder.
//!
//! # Design
//! Request failures come in exactly two kinds. `Construction` is raised
//! before any I/O happens (bad method, bad URL). `Execution` wraps whatever
//! the transport reported. Callers that need more than the message can
//! inspect the wrapped `ureq::Error`.

use thiserror::Error;

/// Errors returned by `execute_request` and `get_status_code`.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The configuration could not be turned into a request. No network
    /// call was made.
    #[error("invalid request: {0}")]
    Construction(String),

    /// The request was sent (or sending was attempted) and failed.
    #[error("request failed: {0}")]
    Execution(#[from] ureq::Error),
}

impl RequestError {
    /// True when the failure was a transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Execution(ureq::Error::Timeout(_)))
    }
}

/// Errors returned by the strict `parse_*` conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("cannot convert {input:?} to {target}")]
    Invalid { input: String, target: &'static str },

    /// A JSON value expected to be an object was some other kind.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Errors returned by `PortFinder::find`.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no free port was assigned")]
    NoPortAvailable,
}

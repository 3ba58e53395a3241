//! Small utility helpers built around a blocking HTTP request executor.
//!
//! # Overview
//! - [`client`] sends one request described by a [`RequestConfig`] and
//!   returns either the full [`HttpResponse`] or just its status code.
//! - [`convert`] turns primitives into strings and back.
//! - [`slices`] has a membership check.
//! - [`port`] asks the kernel for a free TCP port.
//!
//! # Design
//! - Request building is pure (`RequestConfig::build`); only `client`
//!   performs I/O.
//! - No global state. Defaults such as the port finder's host live on
//!   configuration values.
//! - Library code logs through `tracing` and never installs a subscriber.

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod http;
pub mod port;
pub mod slices;

pub use client::{execute_request, get_status_code};
pub use config::{RequestConfig, DEFAULT_TIMEOUT};
pub use convert::Primitive;
pub use error::{ConvertError, PortError, RequestError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use port::{find_empty_port, PortFinder};
pub use slices::slice_contains;

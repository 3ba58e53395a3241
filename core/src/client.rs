//! Blocking request executor.
//!
//! # Design
//! Execution is split the same way the data types are: `RequestConfig::build`
//! validates and describes the request, then `execute_request` hands that
//! description to a `ureq::Agent`. A caller-supplied agent is used as is; its
//! timeouts win over `RequestConfig::timeout`. Otherwise a fresh agent is
//! built per call with the configured timeout.
//!
//! Non-2xx statuses are data, not errors. Nothing is retried and errors are
//! returned, never logged here.

use std::time::Instant;

use tracing::debug;
use ureq::http::{Request, Response};
use ureq::{Agent, AsSendBody, Body};

use crate::config::RequestConfig;
use crate::error::RequestError;
use crate::http::HttpResponse;

/// Send the request described by `config` and read the whole response.
pub fn execute_request(config: &RequestConfig) -> Result<HttpResponse, RequestError> {
    let mut response = send(config)?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .with_config()
        .limit(config.max_body_size)
        .read_to_vec()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

/// Send the request described by `config` and return only its status code.
///
/// The response body is not read.
pub fn get_status_code(config: &RequestConfig) -> Result<u16, RequestError> {
    let response = send(config)?;
    Ok(response.status().as_u16())
}

/// Agent used when the caller does not supply one. A zero timeout means
/// no timeout.
pub fn default_agent(config: &RequestConfig) -> Agent {
    Agent::config_builder()
        .timeout_global((!config.timeout.is_zero()).then_some(config.timeout))
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn send(config: &RequestConfig) -> Result<Response<Body>, RequestError> {
    let request = config.build()?;

    let mut builder = Request::builder()
        .method(request.method.as_str())
        .uri(request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let agent = match &config.client {
        Some(agent) => agent.clone(),
        None => default_agent(config),
    };

    debug!(method = %request.method, url = %request.url, "sending request");
    let started = Instant::now();
    let response = match request.body {
        Some(body) => run(&agent, builder.body(body)),
        None => run(&agent, builder.body(())),
    }?;
    debug!(
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "received response"
    );

    Ok(response)
}

fn run<S: AsSendBody>(
    agent: &Agent,
    request: Result<Request<S>, ureq::http::Error>,
) -> Result<Response<Body>, RequestError> {
    let request = request.map_err(|e| RequestError::Construction(e.to_string()))?;
    let request = agent
        .configure_request(request)
        .http_status_as_error(false)
        .allow_non_standard_methods(true)
        .build();
    Ok(agent.run(request)?)
}

//! The request executor: one logical HTTP call with retry and uniform error
//! translation.
//!
//! Each service client owns one executor bound to that service's base URL.
//! The executor hides the transport library from callers: wrappers hand it an
//! [`ApiRequest`] and get back a decoded [`Body`] or a typed [`RezenError`].
//! Retries are a bounded loop on the call stack; there is no caching, no
//! metrics, and no state beyond the blocking session's connection pool.

use crate::config::Config;
use crate::constants::API_KEY_HEADER;
use crate::error::RezenError;
use crate::transport::request::{ApiRequest, FilePart, Payload};
use crate::transport::response::Body;
use crate::transport::retry::AttemptOutcome;
use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, warn};

const USER_AGENT: &str = concat!("rezen-client/", env!("CARGO_PKG_VERSION"));

/// Performs HTTP calls against one base URL with retry and error mapping.
pub struct RequestExecutor {
    http_client: Client,
    config: Arc<Config>,
    base_url: String,
}

impl RequestExecutor {
    /// Creates an executor with a persistent blocking session.
    ///
    /// The session carries the configured default timeout; individual calls
    /// may override it via [`ApiRequest::with_timeout`].
    ///
    /// # Arguments
    /// * `config` - Shared client configuration
    /// * `base_url` - Base URL of the service this executor talks to
    pub fn new(config: Arc<Config>, base_url: impl Into<String>) -> Result<Self, RezenError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            config,
            base_url: base_url.into(),
        })
    }

    /// Base URL this executor is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes a request and decodes the JSON body.
    ///
    /// # Returns
    /// * `Ok(Body)` - Parsed body on 200/201; an empty object on 204
    /// * `Err(RezenError)` - Typed error for any failure
    pub fn execute(&self, request: &ApiRequest) -> Result<Body, RezenError> {
        let response = self.send_with_retry(request)?;
        decode_json_body(response)
    }

    /// Executes a request and returns the raw body text.
    ///
    /// Used by the CSV-returning endpoints, which bypass JSON decoding.
    pub fn execute_raw(&self, request: &ApiRequest) -> Result<String, RezenError> {
        let response = self.send_with_retry(request)?;
        response
            .text()
            .map_err(|e| RezenError::Deserialization(e.to_string()))
    }

    /// Sends the request, retrying transient failures per the retry policy.
    ///
    /// Transient statuses {500, 502, 503, 504} and transport-level errors
    /// are retried with exponential backoff; 4xx is surfaced immediately.
    /// On exhaustion a transport failure becomes [`RezenError::Network`] and
    /// a non-2xx response goes through status translation.
    fn send_with_retry(&self, request: &ApiRequest) -> Result<Response, RezenError> {
        let policy = &self.config.retry;
        let mut attempt: u32 = 0;

        loop {
            debug!("{} {}", request.method, request.path);

            match self.build(request).send() {
                Ok(response) => {
                    let status = response.status();
                    debug!("Response status: {}", status);

                    if status.is_success() {
                        return Ok(response);
                    }

                    match policy.retry_delay(attempt, AttemptOutcome::Status(status.as_u16())) {
                        Some(delay) => {
                            warn!(
                                "Transient status {} on attempt {}, retrying in {:?}",
                                status,
                                attempt + 1,
                                delay
                            );
                            thread::sleep(delay);
                        }
                        None => {
                            let body = response.text().unwrap_or_default();
                            error!("Request failed with status {}: {}", status, body);
                            return Err(RezenError::from_status(
                                status.as_u16(),
                                &request.path,
                                &body,
                            ));
                        }
                    }
                }
                Err(err) => match policy.retry_delay(attempt, AttemptOutcome::Transport) {
                    Some(delay) => {
                        warn!(
                            "Transport error on attempt {}: {}, retrying in {:?}",
                            attempt + 1,
                            err,
                            delay
                        );
                        thread::sleep(delay);
                    }
                    None => {
                        error!("Request failed: {}", err);
                        return Err(RezenError::Network(err.to_string()));
                    }
                },
            }

            attempt += 1;
        }
    }

    /// Builds the transport request for one attempt.
    ///
    /// JSON calls go out with the API-key header plus JSON content headers.
    /// Multipart calls get a deliberately minimal header set (API key +
    /// Accept) and never the JSON Content-Type: the transport manages the
    /// multipart boundary. The form is rebuilt on every attempt since a
    /// multipart body cannot be reused once sent.
    fn build(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.url_for(&request.path);
        let mut builder = self.http_client.request(request.method.clone(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        if request.send_api_key {
            builder = builder.header(API_KEY_HEADER, &self.config.api_key);
        }

        match &request.payload {
            Payload::Multipart { fields, files } => {
                builder = builder
                    .header("Accept", "application/json")
                    .multipart(build_form(fields, files));
            }
            Payload::Json(body) => {
                builder = builder
                    .header("Content-Type", "application/json")
                    .header("Accept", "application/json")
                    .json(body);
            }
            Payload::Empty => {
                builder = builder
                    .header("Content-Type", "application/json")
                    .header("Accept", "application/json");
            }
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }
}

fn build_form(fields: &[(String, String)], files: &[FilePart]) -> Form {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name.clone(), value.clone());
    }
    for file in files {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        form = form.part(file.field_name.clone(), part);
    }
    form
}

/// Decodes a successful response into a [`Body`].
///
/// 204 and empty bodies become the empty object; anything else must parse as
/// JSON or the call fails with a deserialization error.
fn decode_json_body(response: Response) -> Result<Body, RezenError> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(Body::empty());
    }
    let text = response
        .text()
        .map_err(|e| RezenError::Deserialization(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(Body::empty());
    }
    let value = serde_json::from_str(&text)
        .map_err(|e| RezenError::Deserialization(format!("response is not valid JSON: {e}")))?;
    Ok(Body::from_value(value))
}

//! Ephemeral request values handed to the executor.
//!
//! An [`ApiRequest`] describes one logical call: method, path, query
//! parameters, payload, and per-call overrides. JSON and multipart payloads
//! are mutually exclusive by construction. Authentication quirks (the few
//! credential-free endpoints, per-call Authorization headers for password
//! flows) are expressed on the request itself rather than by mutating any
//! shared session state.

use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

/// One file stream in a multipart upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name the file is attached under
    pub field_name: String,
    /// File name reported to the server
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Request payload: nothing, a JSON document, or multipart form data.
#[derive(Debug, Clone)]
pub enum Payload {
    /// No body
    Empty,
    /// JSON body (object or array)
    Json(Value),
    /// Multipart form fields plus file streams
    Multipart {
        /// Plain form fields
        fields: Vec<(String, String)>,
        /// File parts
        files: Vec<FilePart>,
    },
}

impl Payload {
    /// Whether this payload is sent as multipart form data.
    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart { .. })
    }
}

/// A single logical HTTP call. Never persisted; built, executed, dropped.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path joined onto the executor's base URL
    pub path: String,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request payload
    pub payload: Payload,
    /// Per-call timeout override
    pub timeout: Option<Duration>,
    /// Per-call extra headers (e.g. a one-off Authorization for password flows)
    pub headers: Vec<(String, String)>,
    /// Whether to attach the API-key header; signin-style endpoints turn
    /// this off instead of stripping headers from shared state
    pub send_api_key: bool,
}

impl ApiRequest {
    /// Creates a request with no query, no payload and default auth.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: Payload::Empty,
            timeout: None,
            headers: Vec::new(),
            send_api_key: true,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Shorthand for a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets a JSON body. Replaces any previous payload.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.payload = Payload::Json(body);
        self
    }

    /// Sets a multipart payload. Replaces any previous payload.
    #[must_use]
    pub fn with_multipart(mut self, fields: Vec<(String, String)>, files: Vec<FilePart>) -> Self {
        self.payload = Payload::Multipart { fields, files };
        self
    }

    /// Overrides the timeout for this call only.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header for this call only.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Suppresses the API-key header for this call (signin, password reset).
    #[must_use]
    pub fn without_api_key(mut self) -> Self {
        self.send_api_key = false;
        self
    }
}

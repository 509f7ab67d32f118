//! Typed error hierarchy for the rezen client.
//!
//! Every failure inside the transport layer surfaces as one of these
//! variants; nothing is swallowed. Variants that originate from an HTTP
//! response carry an [`ApiFailure`] with the human-readable message, the
//! status code and the structured error payload returned by the server, so
//! callers can build their own retry or alerting logic on top.

use crate::constants::OWNER_INFO_HINT;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Details of a failed API response.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    /// Human-readable description of the failure
    pub message: String,
    /// HTTP status code, when the failure came from a response
    pub status: Option<u16>,
    /// Structured error payload returned by the server, when it was JSON
    pub payload: Option<Value>,
}

impl ApiFailure {
    /// Builds a failure from a raw response body.
    ///
    /// The body is parsed as JSON when possible and its `message` field (the
    /// platform's error envelope) becomes the message; a non-JSON body is
    /// carried through as raw text and never raises a secondary parse error.
    pub fn from_response(status: u16, body: &str) -> Self {
        let payload = serde_json::from_str::<Value>(body).ok();
        let message = payload
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.to_string()
                }
            });
        Self {
            message,
            status: Some(status),
            payload,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum RezenError {
    /// 401, or missing/invalid credentials at construction time
    #[error("authentication error: {0}")]
    Authentication(ApiFailure),

    /// 400, malformed request rejected by the server
    #[error("validation error: {0}")]
    Validation(ApiFailure),

    /// 404
    #[error("not found: {0}")]
    NotFound(ApiFailure),

    /// 429
    #[error("rate limit exceeded: {0}")]
    RateLimit(ApiFailure),

    /// 5xx after the retry budget is exhausted
    #[error("server error: {0}")]
    Server(ApiFailure),

    /// Any other non-2xx status with no dedicated variant
    #[error("api error: {0}")]
    Api(ApiFailure),

    /// Transport-level failure after the retry budget is exhausted
    #[error("network error: {0}")]
    Network(String),

    /// Client-side validation failure, raised before any network call
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A 2xx response body that could not be decoded as expected
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// JSON serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction or request-building failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RezenError {
    /// Translates a terminal non-2xx response into a typed error.
    ///
    /// The mapping is deterministic and total over all non-2xx statuses:
    /// 400 validation, 401 authentication, 404 not found, 429 rate limit,
    /// 500-599 server, anything else the generic api variant carrying the
    /// unmapped status. A 400 from an owner-info endpoint gets the
    /// setup-order hint appended, matching the platform's server-side
    /// ordering requirement on transaction builders.
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code of the response
    /// * `path` - Request path, used for the owner-info hint
    /// * `body` - Raw response body text
    pub fn from_status(status: u16, path: &str, body: &str) -> Self {
        let mut failure = ApiFailure::from_response(status, body);
        match status {
            400 => {
                if path.contains("/owner-info") {
                    failure.message.push_str(OWNER_INFO_HINT);
                }
                RezenError::Validation(failure)
            }
            401 => RezenError::Authentication(failure),
            404 => RezenError::NotFound(failure),
            429 => RezenError::RateLimit(failure),
            500..=599 => RezenError::Server(failure),
            _ => RezenError::Api(failure),
        }
    }

    /// HTTP status code carried by this error, when it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            RezenError::Authentication(f)
            | RezenError::Validation(f)
            | RezenError::NotFound(f)
            | RezenError::RateLimit(f)
            | RezenError::Server(f)
            | RezenError::Api(f) => f.status,
            _ => None,
        }
    }
}

//! Decoded response bodies.
//!
//! The platform's endpoints answer with objects, arrays or bare scalars
//! depending on the operation (a builder create returns just the new id as a
//! JSON string). The decoded body is a tagged union at the transport
//! boundary so each wrapper pattern-matches the shape it expects instead of
//! runtime type-checking deep in business logic.

use crate::error::RezenError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decoded JSON response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// JSON object
    Object(Map<String, Value>),
    /// JSON array
    Array(Vec<Value>),
    /// JSON string, number, boolean or null
    Scalar(Value),
}

impl Body {
    /// Classifies a parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Body::Object(map),
            Value::Array(items) => Body::Array(items),
            other => Body::Scalar(other),
        }
    }

    /// The empty-object body produced by a 204 response.
    pub fn empty() -> Self {
        Body::Object(Map::new())
    }

    /// Converts back into a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Body::Object(map) => Value::Object(map),
            Body::Array(items) => Value::Array(items),
            Body::Scalar(value) => value,
        }
    }

    /// Deserializes the body into a typed model.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, RezenError> {
        serde_json::from_value(self.into_value())
            .map_err(|e| RezenError::Deserialization(e.to_string()))
    }

    /// The body as a string scalar, if that is what it is.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Body::Scalar(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// True for `Body::Object({})`.
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Body::Object(map) if map.is_empty())
    }
}

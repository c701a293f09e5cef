// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response types shared by every endpoint

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Body of a response the service reported as successful
///
/// The JSON object is kept exactly as received. Endpoint specific fields can be
/// read through [`ApiResponse::get`] or decoded into a caller defined record
/// with [`ApiResponse::payload`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ApiResponse(Value);

impl ApiResponse {
    /// Check the `success` flag of a parsed body
    ///
    /// # Errors
    ///
    /// Returns an [`ApiFailure`] if `success` is not `true`
    pub fn from_value(value: Value) -> Result<Self, ApiFailure> {
        if value.get("success").and_then(Value::as_bool) == Some(true) {
            Ok(Self(value))
        } else {
            Err(ApiFailure::from_response(value))
        }
    }

    /// Get a top level field of the response
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Decode the whole response into a typed record
    ///
    /// Fields the record does not declare are ignored unless the record opts
    /// into `deny_unknown_fields`.
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    /// Borrow the response body
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the response body
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.0
    }
}

/// Failure reported in the body of an unsuccessful response
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiFailure {
    /// The `cause` the service gave for the failure
    #[error("{}", display_cause(.0))]
    Cause(Value),

    /// The whole response, when it carries no usable `cause`
    #[error("unsuccessful response: {0}")]
    Response(Value),
}

impl ApiFailure {
    /// Build the failure for an unsuccessful response body
    ///
    /// A truthy `cause` is surfaced on its own, whatever its JSON type. A
    /// missing cause, `null`, `false`, `0` or an empty string leaves the
    /// whole body as the failure.
    pub fn from_response(value: Value) -> Self {
        match value.get("cause") {
            Some(cause) if is_truthy(cause) => Self::Cause(cause.clone()),
            _ => Self::Response(value),
        }
    }

    /// Get the cause, if the service provided one
    pub fn cause(&self) -> Option<&Value> {
        match self {
            Self::Cause(cause) => Some(cause),
            Self::Response(_) => None,
        }
    }

    /// Get the cause message, if the cause is a string
    pub fn message(&self) -> Option<&str> {
        self.cause().and_then(Value::as_str)
    }
}

fn display_cause(cause: &Value) -> String {
    match cause {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

//! dog.ceo wire types.

use serde::Deserialize;
use serde_json::Value;

use super::errors::DogApiError;

/// Envelope returned by every dog.ceo endpoint.
///
/// `message` is an array of names on success and a human-readable string on
/// error, so it is kept untyped until `status` has been checked.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// `success` or `error`; empty when missing
    #[serde(default)]
    pub status: String,

    /// Sub-breed names on success, error text otherwise
    #[serde(default)]
    pub message: Value,

    /// HTTP-style code some error responses carry in the body
    #[serde(default)]
    pub code: Option<u16>,
}

impl ApiResponse {
    /// Whether `status` is `success`, ignoring case.
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }

    /// Extract the sub-breed names from a breed list response.
    pub fn into_names(self) -> Result<Vec<String>, DogApiError> {
        if !self.is_success() {
            let message = match self.message {
                Value::String(text) => text,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            return Err(DogApiError::Unsuccessful {
                status: self.status,
                message,
            });
        }

        match self.message {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    other => Err(DogApiError::MalformedPayload(format!(
                        "expected string sub-breed, got {other}"
                    ))),
                })
                .collect(),
            other => Err(DogApiError::MalformedPayload(format!(
                "expected message array, got {other}"
            ))),
        }
    }
}

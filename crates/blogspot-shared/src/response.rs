//! Standardized command output envelopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use blogspot_core::{DomainError, ValidationErrors};

/// Standard successful command response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> CommandResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl CommandResponse<()> {
    /// A response that only carries a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Problem details for a failed command, modeled on RFC 7807.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable problem kind, e.g. `validation` or `not_found`.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Per-field messages for validation failures.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub fields: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            title: title.into(),
            detail: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("bad_request", "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("not_found", "Not Found").with_detail(detail)
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        let mut response = Self::new("validation", "Validation Failed");
        response.fields = errors
            .iter()
            .map(|(field, msg)| (field.to_string(), msg.to_string()))
            .collect();
        response
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new("internal", "Internal Error").with_detail(detail)
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::NotFound(id) => ErrorResponse::not_found(format!("post {id} does not exist")),
            DomainError::Validation(errors) => ErrorResponse::validation(errors),
            DomainError::InvalidId(_)
            | DomainError::InvalidStatus(_)
            | DomainError::InvalidDate(_)
            | DomainError::InvalidSortKey(_) => ErrorResponse::bad_request(err.to_string()),
        }
    }
}

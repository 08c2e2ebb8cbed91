//! Error types shared by every HTTP executor.
//!
//! ERROR HANDLING
//! ==============
//! Failures are surfaced to users as transient notifications. `user_message`
//! turns an error into the sentence shown there; nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (backend down, CORS rejection, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The call needs a logged-in user and none is present.
    #[error("User email not found. Please log in.")]
    MissingSession,
    #[error("{0}")]
    NotFound(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
    /// The request could not be built from the given input.
    #[error("invalid request: {0}")]
    Invalid(String),
}

impl ApiError {
    /// HTTP status carried by the error, `0` when no response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) => Some(0),
            _ => None,
        }
    }

    /// Text the backend sent with a rejection, or `fallback` when there is
    /// none. Used by the login and signup forms.
    #[must_use]
    pub fn body_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => body.trim().to_owned(),
            Self::Network(_) => self.user_message(fallback),
            _ => fallback.to_owned(),
        }
    }

    /// Notification text for a failed `action` (e.g. `"load files"`).
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::Network(_) => {
                "Unable to connect to the server. Please check if the backend is running.".to_owned()
            }
            Self::Status { status: 401, .. } => "Unauthorized. Please log in again.".to_owned(),
            Self::Status { status: 404, .. } => format!("Failed to {action}: resource not found."),
            Self::Status { body, status } if !body.trim().is_empty() && *status < 500 => {
                format!("Failed to {action}: {}", body.trim())
            }
            Self::Status { status, .. } => format!("Failed to {action}: server returned {status}"),
            Self::MissingSession | Self::NotFound(_) => self.to_string(),
            other => format!("Failed to {action}: {other}"),
        }
    }
}

/// One failed form rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the offending field (`eventName`, `email`, ...).
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

//! Failure kinds surfaced by backend calls.
//!
//! Both kinds render as an inline message at the view boundary; neither is
//! fatal to the application.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Generic message shown when the backend cannot be reached or replies with
/// something unreadable.
pub const CONNECTIVITY_MESSAGE: &str = "Error de conexión";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Network failure, unreachable backend, or an unparseable reply.
    #[error("Error de conexión")]
    Connectivity,
    /// Backend-reported rejection (bad credentials, duplicate registration).
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Build an error from a backend reply body, preferring its `error` field.
    pub fn from_error_body(body: &str) -> Self {
        serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .error
            .map_or(Self::Connectivity, Self::from_message)
    }

    /// Wrap a backend message, treating a blank one as a connectivity failure.
    pub fn from_message(message: String) -> Self {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            Self::Connectivity
        } else {
            Self::Validation(trimmed.to_owned())
        }
    }
}

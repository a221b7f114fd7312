//! Error types for the to-do client.
//!
//! # Design
//! `ValidationError` never reaches the network: it is raised before a request
//! is built and is shown to the user. `ApiError` covers everything that can go
//! wrong around a round-trip and is only ever logged. `NotFound` keeps its own
//! variant because callers often need to tell a vanished item apart from an
//! unexpected status.

use thiserror::Error;

/// A draft rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Todo must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },
}

/// Errors produced while building requests or interpreting responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404; the item does not exist.
    #[error("resource not found")]
    NotFound { body: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Text for the error log: the server's body when it sent one, otherwise
    /// the error itself.
    pub fn report(&self) -> String {
        match self {
            ApiError::NotFound { body } | ApiError::Http { body, .. } if !body.is_empty() => {
                body.clone()
            }
            other => other.to_string(),
        }
    }
}

/// Why `TodoListView::submit` produced no request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

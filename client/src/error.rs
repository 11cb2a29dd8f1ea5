//! Error types for the todo API client.
//!
//! # Design
//! Every non-2xx response becomes `RequestFailed`, whose message is the fixed
//! per-operation string ("Failed to fetch todos", ...). The status code and
//! raw body ride along so callers can tell a 404 from a 500 without matching
//! on text. Transport and JSON failures keep the underlying error as source.

use std::fmt;

use thiserror::Error;

/// Boxed error produced by a `Transport`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// The logical operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message reported when the backend answers this operation with a
    /// non-2xx status.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch todos",
            Operation::Get => "Failed to fetch todo",
            Operation::Create => "Failed to create todo",
            Operation::Update => "Failed to update todo",
            Operation::Delete => "Failed to delete todo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Errors returned by the todo client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a status outside 200..=299.
    #[error("{}", .operation.failure_message())]
    RequestFailed {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A successful response body could not be decoded.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(#[source] BoxError),
}

impl ApiError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        ApiError::Transport(err.into())
    }

    /// HTTP status of a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiError::RequestFailed { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The backend's `{"detail": "..."}` message, when the error body has one.
    ///
    /// Validation errors carry a structured `detail` array instead; those are
    /// left to the caller via the raw body.
    pub fn detail(&self) -> Option<String> {
        let ApiError::RequestFailed { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value.get("detail")?.as_str().map(str::to_string)
    }
}

//! Client Error Taxonomy
//!
//! Everything a resource call can fail with. A missing record is not a
//! separate class; it arrives as a `Transport` error with status 404.

use thiserror::Error;

/// Result type for resource client calls
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server rejected the input and listed what was wrong.
    #[error("{}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    /// Network failure, non-2xx status or an unreadable body.
    #[error("{reason}")]
    Transport { status: Option<u16>, reason: String },
}

impl ClientError {
    pub fn validation(messages: Vec<String>) -> Self {
        ClientError::Validation { messages }
    }

    /// Failure that never produced an HTTP status.
    pub fn transport(reason: impl Into<String>) -> Self {
        ClientError::Transport {
            status: None,
            reason: reason.into(),
        }
    }

    pub fn http(status: u16, reason: impl Into<String>) -> Self {
        ClientError::Transport {
            status: Some(status),
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Validation { .. } => None,
            ClientError::Transport { status, .. } => *status,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Messages to surface to the user, one notice each.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ClientError::Validation { messages } => messages.clone(),
            ClientError::Transport { .. } => vec![self.to_string()],
        }
    }
}

//! Error types used throughout the client
//!
//! One enum per failure family, plus [`NovitusError`] which tags each of them
//! with the [`Operation`] that produced it.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DocumentType, RequestId};

/// A document failed its structural rules. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Prefix the message with the path of the field that failed.
    #[must_use]
    pub fn at(self, path: &str) -> Self {
        Self { message: format!("{path}.{}", self.message) }
    }
}

/// Structured error reported by the gateway (`exception.code` /
/// `exception.description`).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("gateway error {code}: {description}")]
pub struct RemoteError {
    pub code: i64,
    pub description: String,
}

/// Low-level failure talking to the gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request cancelled")]
    Cancelled,

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Which token call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStep {
    Acquire,
    Refresh,
}

crate::impl_wire_conversions!(TokenStep {
    Acquire => "acquire",
    Refresh => "refresh",
});

/// Token acquisition or refresh failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("failed to {step} token: {source}")]
    Transport {
        step: TokenStep,
        #[source]
        source: TransportError,
    },

    #[error("gateway rejected {step} token request: {error}")]
    Rejected { step: TokenStep, error: RemoteError },

    #[error("gateway returned unparseable expiration_date '{value}' on {step}")]
    InvalidExpiration { step: TokenStep, value: String },

    #[error("no token held to refresh")]
    NoToken,
}

impl AuthError {
    /// The token step that failed, if any call was made.
    pub fn step(&self) -> Option<TokenStep> {
        match self {
            Self::Transport { step, .. }
            | Self::Rejected { step, .. }
            | Self::InvalidExpiration { step, .. } => Some(*step),
            Self::NoToken => None,
        }
    }
}

/// The client operation an error is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Connect,
    GetQueueStatus,
    ClearQueue,
    Submit(DocumentType),
    Confirm(DocumentType, RequestId),
    CheckStatus(DocumentType, RequestId),
    Delete(DocumentType, RequestId),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::GetQueueStatus => write!(f, "get queue status"),
            Self::ClearQueue => write!(f, "clear queue"),
            Self::Submit(kind) => write!(f, "submit {kind}"),
            Self::Confirm(kind, id) => write!(f, "confirm {kind} {id}"),
            Self::CheckStatus(kind, id) => write!(f, "check status of {kind} {id}"),
            Self::Delete(kind, id) => write!(f, "delete {kind} {id}"),
        }
    }
}

/// Coarse classification for callers deciding what to show or do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Fix the document and resubmit
    Validation,
    /// Token could not be obtained or refreshed
    Authentication,
    /// Gateway understood and rejected the request
    Remote,
    /// Gateway could not be reached or answered garbage
    Network,
    /// Client misconfiguration
    Config,
}

/// Main error type for the client
#[derive(Error, Debug)]
pub enum NovitusError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{operation}: authentication failed: {source}")]
    Auth {
        operation: Operation,
        #[source]
        source: AuthError,
    },

    #[error("{operation}: {error}")]
    Remote { operation: Operation, error: RemoteError },

    #[error("{operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl NovitusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Auth { .. } => ErrorCategory::Authentication,
            Self::Remote { .. } => ErrorCategory::Remote,
            Self::Transport { .. } => ErrorCategory::Network,
            Self::Config(_) => ErrorCategory::Config,
        }
    }

    /// The operation that failed. `None` for validation and config errors,
    /// which happen before any operation starts.
    pub fn operation(&self) -> Option<&Operation> {
        match self {
            Self::Auth { operation, .. }
            | Self::Remote { operation, .. }
            | Self::Transport { operation, .. } => Some(operation),
            Self::Validation(_) | Self::Config(_) => None,
        }
    }

    /// The structured gateway error, when the gateway rejected the request.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, NovitusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_display_names_document_and_id() {
        let op = Operation::Confirm(DocumentType::Invoice, RequestId::from("42"));
        assert_eq!(op.to_string(), "confirm invoice 42");
        assert_eq!(Operation::Submit(DocumentType::Printout).to_string(), "submit nf_printout");
    }

    #[test]
    fn remote_error_keeps_operation_context() {
        let err = NovitusError::Remote {
            operation: Operation::ClearQueue,
            error: RemoteError { code: 7, description: "device busy".into() },
        };
        assert_eq!(err.to_string(), "clear queue: gateway error 7: device busy");
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert_eq!(err.remote().map(|e| e.code), Some(7));
    }

    #[test]
    fn transport_and_remote_are_distinguishable() {
        let transport = NovitusError::Transport {
            operation: Operation::GetQueueStatus,
            source: TransportError::Connect("refused".into()),
        };
        assert_eq!(transport.category(), ErrorCategory::Network);
        assert!(transport.remote().is_none());
        assert_eq!(transport.operation(), Some(&Operation::GetQueueStatus));
    }

    #[test]
    fn validation_path_prefix() {
        let err = ValidationError::new("text is required").at("printout_lines[1]");
        assert_eq!(err.message, "printout_lines[1].text is required");
    }

    #[test]
    fn auth_error_reports_step() {
        let err = AuthError::Rejected {
            step: TokenStep::Refresh,
            error: RemoteError { code: 401, description: "expired".into() },
        };
        assert_eq!(err.step(), Some(TokenStep::Refresh));
        assert_eq!(
            err.to_string(),
            "gateway rejected refresh token request: gateway error 401: expired"
        );
        assert_eq!(AuthError::NoToken.step(), None);
    }
}

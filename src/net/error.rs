//! API failure taxonomy.
//!
//! Every transport/service failure is one of two kinds: the backend answered
//! with a structured error body (`Server`), or no usable response arrived at
//! all (`Transport`). The distinction drives the single error-translation
//! rule of the client: a server message is surfaced verbatim, anything else
//! becomes a generic connectivity message.

use thiserror::Error;

/// Generic message shown when the backend could not be reached.
pub const CONNECTION_ERROR: &str = "Erro de conexão. Tente novamente.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Structured error body returned by the backend.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Connectivity failure or an unreadable response. `detail` is kept for
    /// logging only and never shown to the user.
    #[error("{CONNECTION_ERROR}")]
    Transport { detail: String },
}

impl ApiError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    /// Fill an empty server message with the operation's own fallback.
    /// Transport errors keep the generic connectivity message.
    #[must_use]
    pub fn with_fallback(self, fallback: &str) -> Self {
        match self {
            Self::Server { status, message } if message.trim().is_empty() => Self::Server {
                status,
                message: fallback.to_owned(),
            },
            other => other,
        }
    }

    /// True when the backend itself produced this error.
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

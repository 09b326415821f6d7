//! Errors raised by the users fetch function.

use thiserror::Error;

/// Failure of a single fetch attempt.
///
/// Every variant is retried by the query cache; what finally surfaces to
/// the user is the `Display` text of the last attempt's error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, connection reset, TLS failure.
    #[error(transparent)]
    Transport(reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Tempo limite excedido ao buscar usuários")]
    Timeout(#[source] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("Erro ao buscar usuários")]
    HttpStatus { status: u16 },

    /// Body was not a JSON array of users.
    #[error("Resposta inválida ao buscar usuários: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Classify a transport-level `reqwest` error.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else {
            FetchError::Transport(err)
        }
    }

    /// Short machine-readable kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Timeout(_) => "timeout",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decode(_) => "decode",
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}

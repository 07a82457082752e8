use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single backend request.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    HttpStatus {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn kind(&self) -> ClientErrorKind {
        match self {
            Self::Transport(_) => ClientErrorKind::Transport,
            Self::HttpStatus { .. } => ClientErrorKind::HttpStatus,
            Self::Decode(_) => ClientErrorKind::Decode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    Transport,
    HttpStatus,
    Decode,
}

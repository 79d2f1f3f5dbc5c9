use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a whole conversion.
///
/// Per-layer derivation failures are deliberately *not* represented here;
/// they are recovered inside the pipeline (logged and dropped), so callers
/// always receive either one of these or a complete result.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid document structure: {0}")]
    Document(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn input(message: impl Into<String>) -> Self {
        ConvertError::Input(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        ConvertError::Config(message.into())
    }

    pub fn document(message: impl Into<String>) -> Self {
        ConvertError::Document(message.into())
    }

    /// Machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Input(_) => ErrorKind::Input,
            ConvertError::Config(_) => ErrorKind::Config,
            ConvertError::Document(_) => ErrorKind::Document,
            ConvertError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Machine-readable error category, stable across message wording changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Input,
    Config,
    Document,
    Serialization,
}

/// Structured error surface for callers that serialize failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}

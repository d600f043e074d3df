//! Error types used throughout the SDK

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for CaseDesk
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CaseDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Remote error response, carrying the raw error envelope verbatim.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CaseDeskError {
    /// HTTP status code of the remote error, if this is an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for CaseDesk operations
pub type Result<T> = std::result::Result<T, CaseDeskError>;

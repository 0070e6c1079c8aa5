//! Error types for the submission API client.

use thiserror::Error;

/// Errors that can occur while talking to the ClinVar API.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Key is not 64 ASCII letters and digits. The key itself is not echoed.
    #[error("API key must be 64 alphanumeric characters (got {length})")]
    InvalidApiKey { length: usize },

    /// The API rejected the key.
    #[error("No valid API key provided")]
    Unauthorized,

    /// The API answered with a non-success status.
    #[error("ClinVar API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The request could not be built, sent or read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response whose body is not JSON.
    #[error("invalid JSON in API response: {0}")]
    Response(#[from] serde_json::Error),
}

impl SubmitError {
    /// HTTP status returned by the API, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::InvalidApiKey { .. } | Self::Network(_) | Self::Response(_) => None,
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

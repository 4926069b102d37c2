//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Read API error: {0}")]
    ReadApi(#[from] ReadApiError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Read API (JSON-RPC) errors.
///
/// Every failure of a read API call lands in one of these variants; callers
/// never see a partially decoded value.
#[derive(Error, Debug)]
pub enum ReadApiError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to encode {method} params: {source}")]
    Encode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No result from {method}: {message}")]
    NoResult { method: String, message: String },

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded {
        attempts: u32,
        #[source]
        last_error: Box<ReadApiError>,
    },
}

impl ReadApiError {
    /// Network failure or non-success HTTP status.
    pub fn is_transport(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            ReadApiError::Transport(_) => true,
            ReadApiError::Status { .. } | ReadApiError::MaxRetriesExceeded { .. } => true,
            _ => false,
        }
    }

    /// The endpoint answered but carried no `result`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReadApiError::NoResult { .. })
    }
}

/// Errors raised while mapping an asset into one of its views.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Asset {asset} has no authority with full scope")]
    MissingFullAuthority { asset: String },

    #[error("Invalid address in {field}: {value} ({reason})")]
    InvalidAddress {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Result alias for read API calls.
pub type ReadApiResult<T> = Result<T, ReadApiError>;

/// Result alias for asset transformers.
pub type TransformResult<T> = Result<T, TransformError>;

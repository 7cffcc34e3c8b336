//! Centralized error types for LDA.

use thiserror::Error;

/// Main error type for analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The request carried no usable body: missing, unparseable, or an empty JSON value.
    #[error("No data provided")]
    NoData,

    /// The body was present but did not have the shape of an analysis request.
    #[error("{0}")]
    MalformedRequest(String),
}

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    /// Create a malformed request error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRequest(msg.into())
    }
}

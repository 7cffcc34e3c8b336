//! HTTP error responses.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lda_core::AnalyzerError;
use serde_json::{json, Value};

/// Errors returned to clients, each with a fixed JSON shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No data provided")]
    NoData,
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("Endpoint not found")]
    NotFound,
    #[error("Frontend HTML not found")]
    FrontendMissing,
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn code(&self) -> StatusCode {
        use ApiError::*;
        match self {
            NoData => StatusCode::BAD_REQUEST,
            NotFound | FrontendMissing => StatusCode::NOT_FOUND,
            AnalysisFailed(_) | Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Value {
        use ApiError::*;
        match self {
            NoData => json!({ "error": "No data provided" }),
            AnalysisFailed(message) => json!({
                "error": "Analysis failed",
                "message": message,
            }),
            NotFound => json!({
                "error": "Endpoint not found",
                "message": "The requested endpoint does not exist",
            }),
            FrontendMissing => json!({
                "message": "Frontend HTML not found",
                "instructions": "Place your HTML file as 'index.html' in this directory",
                "available_endpoints": {
                    "health": "/health",
                    "analyze": "/analyze (POST)",
                },
            }),
            Internal => json!({
                "error": "Internal server error",
                "message": "An unexpected error occurred",
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code(), Json(self.body())).into_response()
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(value: AnalyzerError) -> Self {
        match value {
            AnalyzerError::NoData => Self::NoData,
            AnalyzerError::MalformedRequest(message) => Self::AnalysisFailed(message),
        }
    }
}

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Response for a panic escaping any handler.
pub(crate) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(panic = %panic_message(err.as_ref()), "Handler panicked");
    ApiError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NoData.code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::FrontendMissing.code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::AnalysisFailed("x".into()).code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Internal.code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_analyzer_error() {
        assert!(matches!(ApiError::from(AnalyzerError::NoData), ApiError::NoData));
        let err = ApiError::from(AnalyzerError::malformed("bad text"));
        assert_eq!(
            err.body(),
            json!({ "error": "Analysis failed", "message": "bad text" })
        );
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}

//! Health check route handler.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::error::panic_message;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(serialize_with = "lda_core::analysis::serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub version: &'static str,
}

/// GET /health - Report that the backend is up.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Legal Document Analyzer Backend is running",
        timestamp: Local::now().naive_local(),
        version: PACKAGE_VERSION,
    })
}

/// Health-specific shape for a panic inside the health route. The panic
/// text is logged, never returned.
pub(crate) fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    error!(panic = %panic_message(err.as_ref()), "Health check failed");
    let body = json!({
        "status": "error",
        "message": "An unexpected error occurred",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

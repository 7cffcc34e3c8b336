//! Analysis route handlers.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Json,
};
use lda_core::{analysis::AnalysisResult, generate_mock_analysis, AnalysisRequest, AnalyzerError};
use tracing::{error, info};

use crate::error::ApiError;

/// POST /analyze - Produce a mock analysis of the posted document.
pub async fn analyze_document(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError> {
    if !is_json_request(&headers) {
        return Err(ApiError::NoData);
    }

    let request = AnalysisRequest::from_body(&body).map_err(|e| {
        if let AnalyzerError::MalformedRequest(message) = &e {
            error!("Analysis failed: {}", message);
        }
        ApiError::from(e)
    })?;

    info!(
        "Analyzing document with model: {}, type: {}",
        request.model_label(),
        request.analysis_type_label()
    );

    Ok(Json(generate_mock_analysis(&request)))
}

/// OPTIONS /analyze - Pre-flight that reaches the handler is answered with an empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Whether the declared content type is JSON (`application/json` or a `+json` suffix).
fn is_json_request(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_request(&headers_with("application/json")));
        assert!(is_json_request(&headers_with("application/json; charset=utf-8")));
        assert!(is_json_request(&headers_with("Application/JSON")));
        assert!(is_json_request(&headers_with("application/ld+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_request(&HeaderMap::new()));
        assert!(!is_json_request(&headers_with("text/plain")));
        assert!(!is_json_request(&headers_with("application/x-www-form-urlencoded")));
    }
}

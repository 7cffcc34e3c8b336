//! LDA Web Server
//!
//! Axum-based HTTP front for the mock document analyzer.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::ApiError;
pub use server::{bind_with_fallback, run_server, ServerConfig};
use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    // Health reports its own failures in the health payload shape.
    let health_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .layer(CatchPanicLayer::custom(routes::health::panic_response));

    Router::new()
        .route("/", get(routes::frontend::index))
        .route(
            "/analyze",
            post(routes::analyze::analyze_document).options(routes::analyze::preflight),
        )
        .merge(health_routes)
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::io::Write;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new("does-not-exist/index.html"))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["message"], "Legal Document Analyzer Backend is running");
        assert_eq!(json["version"], "1.0.0");
        // Seconds precision, or microseconds when the fraction is nonzero.
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(timestamp.len() == 19 || timestamp.len() == 26, "{timestamp}");
    }

    #[tokio::test]
    async fn test_analyze_empty_object() {
        let response = app().oneshot(post_json("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "No data provided" }));
    }

    #[tokio::test]
    async fn test_analyze_missing_body() {
        let response = app().oneshot(post_json("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_without_json_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"text": "contract"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_summarization() {
        let response = app()
            .oneshot(post_json(
                r#"{"text": "Monthly rental of the premises", "analysis_type": "summarization"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["document_type"], "Lease Agreement");
        assert_eq!(json["model_used"], "microsoft/DialoGPT-medium");
        assert!(json["summary"]
            .as_str()
            .unwrap()
            .starts_with("This lease agreement establishes"));
    }

    #[tokio::test]
    async fn test_analyze_defaults_to_text_generation() {
        let response = app()
            .oneshot(post_json(r#"{"text": "Service agreement"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["analysis_type"], "text-generation");
        assert_eq!(json["document_type"], "Contract");
        assert_eq!(json["confidence"], 92.5);
        assert!(json["analysis_result"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_malformed_text() {
        let response = app().oneshot(post_json(r#"{"text": ["a"]}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Analysis failed");
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_analyze_options() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/analyze")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/analyze")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Endpoint not found",
                "message": "The requested endpoint does not exist",
            })
        );
    }

    #[tokio::test]
    async fn test_frontend_missing() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Frontend HTML not found");
        assert_eq!(json["available_endpoints"]["analyze"], "/analyze (POST)");
    }

    #[tokio::test]
    async fn test_frontend_served() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<h1>Analyzer</h1>").unwrap();

        let app = create_router(AppState::new(file.path()));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Analyzer</h1>");
    }

    async fn explode() -> &'static str {
        panic!("secret detail")
    }

    async fn panic_body(router: Router) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_handler_panic_is_internal_error() {
        let router = Router::new()
            .route("/boom", get(explode))
            .layer(CatchPanicLayer::custom(error::panic_response));
        let (status, body) = panic_body(router).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("secret detail"));
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({
                "error": "Internal server error",
                "message": "An unexpected error occurred"
            })
        );
    }

    #[tokio::test]
    async fn test_health_panic_shape() {
        let router = Router::new()
            .route("/boom", get(explode))
            .layer(CatchPanicLayer::custom(routes::health::panic_response));
        let (status, body) = panic_body(router).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("secret detail"));
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({
                "status": "error",
                "message": "An unexpected error occurred"
            })
        );
    }
}

//! Frontend route handler.
//!
//! Serves the single-page frontend from disk, re-read on every request so
//! the page can be edited without restarting the server.

use std::io::ErrorKind;

use axum::{extract::State, response::Html};
use tracing::{error, warn};

use crate::{error::ApiError, state::AppState};

/// GET / - Serve the frontend HTML.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    match tokio::fs::read_to_string(state.frontend_path.as_path()).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %state.frontend_path.display(), "Frontend HTML not found");
            Err(ApiError::FrontendMissing)
        }
        Err(e) => {
            error!(path = %state.frontend_path.display(), error = %e, "Failed to read frontend HTML");
            Err(ApiError::Internal)
        }
    }
}

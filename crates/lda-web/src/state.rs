//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

/// File served at `/` when no path is configured.
pub const DEFAULT_FRONTEND_PATH: &str = "index.html";

/// Application state shared across handlers.
///
/// Read-only; the analyzer itself keeps no state between requests.
#[derive(Clone)]
pub struct AppState {
    pub frontend_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(frontend_path: impl Into<PathBuf>) -> Self {
        Self {
            frontend_path: Arc::new(frontend_path.into()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_FRONTEND_PATH)
    }
}

//! Route handlers.

pub mod analyze;
pub mod frontend;
pub mod health;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

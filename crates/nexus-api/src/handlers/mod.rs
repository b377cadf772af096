//! API handlers

pub mod health;
pub mod query;

use crate::error::AppError;

/// Fallback handler for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route".to_string())
}

//! API error handling
//!
//! Every non-2xx response carries the same JSON body shape: a stable error
//! code, a human-readable message, and optional details. Body-parsing
//! failures are split in two: bodies that are not JSON at all are a 400,
//! bodies that are JSON but do not match the request schema are a 422.
//! A missing `query` field is neither; it defaults at the schema level.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new("NOT_FOUND", format!("{resource} not found"))
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request body is not valid JSON (or not JSON at all)
    MalformedJson(String),
    /// Body is valid JSON but does not match the request schema
    Unprocessable(String),
    /// No such route or resource
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::MalformedJson(details) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("MALFORMED_JSON", "Request body is not valid JSON")
                    .with_details(details),
            ),
            AppError::Unprocessable(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new(
                    "UNPROCESSABLE_ENTITY",
                    "Request body does not match the expected schema",
                )
                .with_details(details),
            ),
            AppError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, ApiError::not_found(&resource))
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that fails to deserialize, e.g. a number where
            // a string is expected
            JsonRejection::JsonDataError(err) => AppError::Unprocessable(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => AppError::MalformedJson(err.body_text()),
            JsonRejection::MissingJsonContentType(err) => {
                AppError::MalformedJson(err.body_text())
            }
            other => AppError::MalformedJson(other.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_maps_to_400() {
        let response = AppError::MalformedJson("oops".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unprocessable_maps_to_422() {
        let response = AppError::Unprocessable("wrong type".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Route".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_omits_empty_details() {
        let error = ApiError::new("MALFORMED_JSON", "bad body");
        let json = serde_json::to_value(&error).unwrap();
        assert!(json.get("details").is_none());
    }
}

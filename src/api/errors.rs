//! # API error handling
//!
//! Error hierarchy built on thiserror. Every error renders as a JSON body of
//! the shape `{ "error": "..." }` with the matching HTTP status code, which is
//! the contract the frontend expects for all failure responses.

use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request payload failed validation, answered with 400
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist, answered with 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP method not permitted on this route, answered with 405
    ///
    /// Carries the method list for the `Allow` response header.
    #[error("Method not allowed, permitted: {allowed}")]
    MethodNotAllowed {
        /// Comma separated permitted methods, e.g. `"GET"` or `"GET, POST"`
        allowed: &'static str,
    },
}

impl AppError {
    /// Creates the canonical missing-fields booking error
    pub fn missing_booking_fields() -> Self {
        Self::Validation("Missing required booking fields".to_string())
    }

    /// Creates a 405 error advertising the permitted method(s)
    pub fn method_not_allowed(allowed: &'static str) -> Self {
        Self::MethodNotAllowed { allowed }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        // Log before responding; validation noise stays below error level
        match self {
            Self::Validation(message) => {
                tracing::warn!(message = %message, "Validation error");
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: message.clone(),
                })
            }
            Self::NotFound(message) => {
                tracing::info!(message = %message, "Resource not found");
                HttpResponse::NotFound().json(ErrorResponse {
                    error: message.clone(),
                })
            }
            Self::MethodNotAllowed { allowed } => {
                tracing::warn!(allowed = %allowed, "Method not allowed");
                HttpResponse::MethodNotAllowed()
                    .insert_header((header::ALLOW, *allowed))
                    .json(ErrorResponse {
                        error: "Method not allowed".to_string(),
                    })
            }
        }
    }
}

/// JSON error body, `{ "error": "..." }`
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[test]
    fn validation_error_maps_to_400() {
        let response = AppError::missing_booking_fields().error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404_with_error_body() {
        let response = AppError::NotFound("Property not found".to_string()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = tokio_test::block_on(to_bytes(response.into_body())).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Property not found");
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response = AppError::method_not_allowed("POST").error_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }
}

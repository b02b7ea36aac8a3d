//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps brandgate-core errors to HTTP status codes and JSON error bodies
//! with an error code, message and optional details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use brandgate_core::{LeadError, RouteError, SwitchError, UNSERVED_AREA_MESSAGE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses use this format for consistency across the API
/// surface.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "UNSERVED_AREA", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional context, present only for some client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request could not be parsed or is missing input (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Well-formed ZIP outside every served area (404).
    #[error("unserved area: {0}")]
    UnservedArea(String),

    /// Route names a brand that is not registered (404).
    #[error("unknown brand: {0}")]
    UnknownBrand(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::UnservedArea(_) => (StatusCode::NOT_FOUND, "UNSERVED_AREA"),
            Self::UnknownBrand(_) => (StatusCode::NOT_FOUND, "UNKNOWN_BRAND"),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::UnservedArea(zip) => Some(serde_json::json!({ "zip": zip })),
            Self::UnknownBrand(id) => Some(serde_json::json!({ "brandId": id })),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::UnservedArea(_) => UNSERVED_AREA_MESSAGE.to_string(),
            other => other.to_string(),
        };

        tracing::debug!(error = %self, code, "request rejected");

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Malformed ZIPs are validation failures; unserved ZIPs are 404s.
impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::Malformed(_) => Self::Validation(err.user_message().to_string()),
            RouteError::Unserved(zip) => Self::UnservedArea(zip),
        }
    }
}

impl From<SwitchError> for AppError {
    fn from(err: SwitchError) -> Self {
        match err {
            SwitchError::UnknownBrand(id) => Self::UnknownBrand(id),
        }
    }
}

impl From<LeadError> for AppError {
    fn from(err: LeadError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

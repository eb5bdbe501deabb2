//! REST API error types
//!
//! Every variant renders as `{"error": "<message>"}` with its status code.

use ur_core::CoreError;
use ur_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty field (400)
    #[error("Validation failed: {message} (field: {}) {location}", .field.as_deref().unwrap_or("unknown"))]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Body could not be read as the expected JSON (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Storage failure (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let message = match self {
            ApiError::Validation { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Internal { message, .. } => message,
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = match &e {
            CoreError::MissingField { field, .. } => Some(field.to_string()),
        };

        ApiError::Validation {
            message: e.message().to_string(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors, keeping the driver message
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Internal {
            message: e.storage_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert body decoding errors to API errors
impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid JSON body: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and the JSON failure envelope
//! `{ "success": false, "message": ... }`.
//!
//! Storage and internal failures are logged in full and reported to the
//! client with a generic message.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use timetable_core::errors::TimetableError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use timetable_api::middleware::error_handling::AppError;
/// use timetable_core::errors::TimetableError;
///
/// async fn handler() -> Result<Json<()>, AppError> {
///     Err(AppError(TimetableError::NotFound("Teacher not found".to_string())))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TimetableError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TimetableError::NotFound(_) => StatusCode::NOT_FOUND,
            TimetableError::Validation(_)
            | TimetableError::DuplicateSlot(_)
            | TimetableError::Conflict(_)
            | TimetableError::UnknownPeriod(_) => StatusCode::BAD_REQUEST,
            TimetableError::Authentication(_) => StatusCode::UNAUTHORIZED,
            TimetableError::Authorization(_) => StatusCode::FORBIDDEN,
            TimetableError::Database(_) | TimetableError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the client. Only the variant's own text, without
    /// the "Validation error:" style prefix used in logs.
    pub fn message(&self) -> String {
        match &self.0 {
            TimetableError::NotFound(message)
            | TimetableError::Validation(message)
            | TimetableError::Conflict(message)
            | TimetableError::Authentication(message)
            | TimetableError::Authorization(message) => message.clone(),
            TimetableError::DuplicateSlot(_) | TimetableError::UnknownPeriod(_) => self.0.to_string(),
            TimetableError::Database(_) | TimetableError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "success": false, "message": self.message() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `TimetableResult` inside handlers.
impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimetableError::Database(err))
    }
}

/// Malformed or mistyped JSON bodies become validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(TimetableError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(TimetableError::Validation(rejection.body_text()))
    }
}

/// Maps a TimetableError straight to a response.
pub fn map_error(err: TimetableError) -> Response {
    AppError(err).into_response()
}

pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error envelope returned for every failed request.
///
/// ```json
/// { "error": "Todo not found" }
/// ```
///
/// Validation failures also list the offending fields under `details`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Field-level validation failures, keyed by field name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side variants log their cause and answer with a fixed message so
/// internal detail never reaches the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// 500 with the generic message; the payload is only logged.
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    /// 500 with a caller-chosen public message; `cause` is only logged.
    #[error("{message}: {cause}")]
    Internal { message: String, cause: String },

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, code) = match self {
            AppError::Database(e) => {
                let code = match &e {
                    DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => ErrorCode::DatabaseConnection,
                    _ => ErrorCode::DatabaseError,
                };
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code.default_message().to_string(),
                    None,
                    code,
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    e.body_text(),
                    None,
                    ErrorCode::JsonExtraction,
                )
            }
            AppError::ValidationError(e) => {
                let (message, details) = describe_validation_errors(&e);
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "{}",
                    message
                );
                (
                    StatusCode::BAD_REQUEST,
                    message,
                    Some(details),
                    ErrorCode::ValidationError,
                )
            }
            AppError::InvalidUuid(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidUuid.code(), raw = %raw, "Invalid UUID");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid UUID: {}", raw),
                    None,
                    ErrorCode::InvalidUuid,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, None, ErrorCode::BadRequest)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, None, ErrorCode::NotFound)
            }
            AppError::InternalServerError(cause) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    cause
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                    ErrorCode::InternalError,
                )
            }
            AppError::Internal { message, cause } => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "{}: {}",
                    message,
                    cause
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                    None,
                    ErrorCode::InternalError,
                )
            }
            AppError::ServiceUnavailable(cause) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    cause
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ServiceUnavailable.default_message().to_string(),
                    None,
                    ErrorCode::ServiceUnavailable,
                )
            }
        };

        tracing::debug!(error_code = %code, status = status.as_u16(), "Returning error response");

        error_response(
            status,
            ErrorResponse {
                error: message,
                details,
            },
        )
    }
}

/// Summarizes validator output as a one-line message plus a per-field map.
///
/// Field names are sorted so the message is stable across runs. The rejected
/// `value` is dropped from each entry's params; it may be a password.
fn describe_validation_errors(errors: &ValidationErrors) -> (String, Value) {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut details = Map::new();
    let mut summary = Vec::with_capacity(fields.len());

    for (field, field_errors) in fields {
        let codes: Vec<&str> = field_errors.iter().map(|err| err.code.as_ref()).collect();
        summary.push(format!("{} ({})", field, codes.join(", ")));

        let entries: Vec<Value> = field_errors
            .iter()
            .map(|err| {
                let params: Map<String, Value> = err
                    .params
                    .iter()
                    .filter(|(key, _)| **key != "value")
                    .map(|(key, value)| (key.to_string(), value.clone()))
                    .collect();
                json!({
                    "code": err.code,
                    "message": err.message,
                    "params": params,
                })
            })
            .collect();
        details.insert(field.to_string(), Value::Array(entries));
    }

    let message = if summary.is_empty() {
        ErrorCode::ValidationError.default_message().to_string()
    } else {
        format!("Validation failed: {}", summary.join("; "))
    };

    (message, Value::Object(details))
}

/// Builds a JSON error response with the standard envelope.
pub fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::{ErrorCode, ErrorResponse, error_response};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorResponse::new(ErrorCode::NotFound.default_message()),
    )
}

/// Turns a handler panic into the generic 500 envelope.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(
        error_code = ErrorCode::HandlerPanic.code(),
        "Handler panicked: {}",
        detail
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(ErrorResponse::new(ErrorCode::HandlerPanic.default_message())),
    )
        .into_response()
}

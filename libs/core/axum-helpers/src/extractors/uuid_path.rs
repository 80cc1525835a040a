//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// Answers 400 `{"error": "Invalid UUID: <raw>"}` when the segment does not parse.
///
/// # Example
/// ```ignore
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_todo(UuidPath(id): UuidPath) -> String {
///     format!("Todo ID: {}", id)
/// }
///
/// let app = Router::new().route("/todos/{id}", get(get_todo));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        Uuid::parse_str(&id)
            .map(UuidPath)
            .map_err(|_| AppError::InvalidUuid(id).into_response())
    }
}

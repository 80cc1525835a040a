use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => AppError::NotFound("Todo not found".to_string()),
            TodoError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Username '{0}' already taken")]
    UsernameTaken(String),

    /// Insert failed for a reason other than a duplicate username
    #[error("Failed to create user: {0}")]
    CreateFailed(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound("User not found".to_string()),
            UserError::UsernameTaken(_) => {
                AppError::BadRequest("Username already taken".to_string())
            }
            UserError::CreateFailed(cause) => AppError::Internal {
                message: "Failed to create user".to_string(),
                cause,
            },
            UserError::PasswordHash(msg) => AppError::InternalServerError(msg),
            UserError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

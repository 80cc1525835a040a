use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, update_user),
    components(
        schemas(UserResponse, CreateUser, UpdateUser, ErrorResponse),
        responses(
            BadRequestValidationResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = "Users", description = "User registration and profiles"))
)]
pub struct ApiDoc;

/// Router for `/users`, with the service applied as state
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/", post(create_user::<R>))
        .route(
            "/{username}",
            get(get_user::<R>).patch(update_user::<R>),
        )
        .with_state(Arc::new(service))
}

/// Register a user
///
/// Username must be 3 to 50 characters and unused; password at least 8.
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid input or username already taken", body = ErrorResponse),
        (status = 500, description = "Failed to create user", body = ErrorResponse)
    )
)]
pub async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(username): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service
        .get_by_username(&username)
        .await?
        .ok_or(UserError::NotFound(username))?;
    Ok(Json(user.into()))
}

/// Update name, password or home address
///
/// `username` and `email` in the body are ignored.
#[utoipa::path(
    patch,
    path = "/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "Username")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(username): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service
        .update(&username, input)
        .await?
        .ok_or(UserError::NotFound(username))?;
    Ok(Json(user.into()))
}

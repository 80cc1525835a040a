use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::errors::responses::{
    BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    NotFoundResponse,
};
use axum_helpers::{ErrorResponse, UuidPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// OpenAPI documentation for the Todos API
#[derive(OpenApi)]
#[openapi(
    paths(list_todos, get_todo, create_todo, update_todo, delete_todo),
    components(
        schemas(Todo, CreateTodo, UpdateTodo, ErrorResponse),
        responses(
            BadRequestUuidResponse,
            BadRequestValidationResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = "Todos", description = "Todo item management"))
)]
pub struct ApiDoc;

/// Router for `/todos`, with the service applied as state
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    Router::new()
        .route("/", get(list_todos::<R>).post(create_todo::<R>))
        .route(
            "/{id}",
            get(get_todo::<R>)
                .patch(update_todo::<R>)
                .delete(delete_todo::<R>),
        )
        .with_state(Arc::new(service))
}

/// List all todos, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Todos",
    responses(
        (status = 200, description = "All todos", body = Vec<Todo>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
) -> TodoResult<Json<Vec<Todo>>> {
    Ok(Json(service.list().await?))
}

/// Get a todo by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Todos",
    params(("id" = uuid::Uuid, Path, description = "Todo id")),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
) -> TodoResult<Json<Todo>> {
    let todo = service.get_by_id(id).await?.ok_or(TodoError::NotFound(id))?;
    Ok(Json(todo))
}

/// Create a todo
#[utoipa::path(
    post,
    path = "",
    tag = "Todos",
    request_body = CreateTodo,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> TodoResult<impl IntoResponse> {
    let todo = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update any subset of a todo's fields
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Todos",
    params(("id" = uuid::Uuid, Path, description = "Todo id")),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> TodoResult<Json<Todo>> {
    let todo = service
        .update(id, input)
        .await?
        .ok_or(TodoError::NotFound(id))?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Todos",
    params(("id" = uuid::Uuid, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    UuidPath(id): UuidPath,
) -> TodoResult<StatusCode> {
    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(TodoError::NotFound(id))
    }
}

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::TodoResult;
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
///
/// Lookups that miss return `None` / `false`; turning that into a 404 is
/// the handler's job.
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All todos, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> TodoResult<Vec<Todo>> {
        self.repository.list().await
    }

    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn get_by_id(&self, id: Uuid) -> TodoResult<Option<Todo>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        self.repository.create(input).await
    }

    /// Apply a partial update. An empty update is a plain lookup and leaves
    /// `updated_at` alone.
    #[instrument(skip(self, input), fields(todo_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateTodo) -> TodoResult<Option<Todo>> {
        if input.is_empty() {
            return self.repository.get_by_id(id).await;
        }

        self.repository.update(id, input).await
    }

    /// `true` if the todo existed and was removed
    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn delete(&self, id: Uuid) -> TodoResult<bool> {
        self.repository.delete(id).await
    }
}

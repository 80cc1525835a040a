use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::TodoResult;
use crate::models::{CreateTodo, Todo, UpdateTodo};

/// Repository trait for Todo persistence
///
/// Missing rows are reported as `None` / `false`, not as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos, newest first
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    async fn get_by_id(&self, id: Uuid) -> TodoResult<Option<Todo>>;

    async fn create(&self, input: CreateTodo) -> TodoResult<Todo>;

    /// Apply the supplied fields; `None` when no todo has this id
    async fn update(&self, id: Uuid, input: UpdateTodo) -> TodoResult<Option<Todo>>;

    /// `true` if a row was removed
    async fn delete(&self, id: Uuid) -> TodoResult<bool>;
}

/// In-memory implementation of TodoRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        let mut result: Vec<Todo> = todos.values().cloned().collect();

        // UUID v7 ids break ties between todos created in the same instant
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(result)
    }

    async fn get_by_id(&self, id: Uuid) -> TodoResult<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(&id).cloned())
    }

    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let todo = Todo::new(input);
        self.todos.write().await.insert(todo.id, todo.clone());

        tracing::info!(todo_id = %todo.id, "Created todo");
        Ok(todo)
    }

    async fn update(&self, id: Uuid, input: UpdateTodo) -> TodoResult<Option<Todo>> {
        let mut todos = self.todos.write().await;

        let Some(todo) = todos.get_mut(&id) else {
            return Ok(None);
        };
        todo.apply_update(input);

        tracing::info!(todo_id = %id, "Updated todo");
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: Uuid) -> TodoResult<bool> {
        let removed = self.todos.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(todo_id = %id, "Deleted todo");
        }
        Ok(removed)
    }
}

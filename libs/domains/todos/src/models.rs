use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A todo item as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-generated identifier (UUID v7)
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a todo
///
/// New todos always start with `completed = false`; a `completed` field in
/// the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTodo {
    pub title: String,
}

/// Request body for a partial update. Absent fields are left unchanged;
/// `null` is rejected since neither column is nullable.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTodo {
    #[serde(default, deserialize_with = "axum_helpers::extractors::non_null")]
    #[schema(value_type = String)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "axum_helpers::extractors::non_null")]
    #[schema(value_type = bool)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// True when the body names no updatable field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

impl Todo {
    /// New todo with defaults applied and both timestamps set to now.
    pub fn new(input: CreateTodo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields and refresh `updated_at`.
    pub fn apply_update(&mut self, update: UpdateTodo) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        self.updated_at = Utc::now();
    }
}

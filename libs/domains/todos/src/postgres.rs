use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::TodoResult,
    models::{CreateTodo, Todo, UpdateTodo},
    repository::TodoRepository,
};

/// PostgreSQL implementation of TodoRepository using SeaORM
#[derive(Clone)]
pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> TodoResult<Option<Todo>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let active_model: entity::ActiveModel = Todo::new(input).into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(todo_id = %model.id, "Created todo");
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, input: UpdateTodo) -> TodoResult<Option<Todo>> {
        // Single UPDATE ... RETURNING touching only the supplied columns
        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            title: input.title.map_or(NotSet, Set),
            completed: input.completed.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::info!(todo_id = %id, "Updated todo");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> TodoResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(todo_id = %id, "Deleted todo");
        }
        Ok(result.rows_affected > 0)
    }
}

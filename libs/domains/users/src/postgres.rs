use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr, Statement,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{NewUser, User, UserChanges},
    repository::UserRepository,
};

/// Each nullable column takes a flag and a value: when the flag is false the
/// column keeps its value, otherwise it is set to the value (NULL included).
const UPDATE_USER_SQL: &str = r#"
    UPDATE users
    SET name = CASE WHEN $2 THEN $3 ELSE name END,
        password_hash = COALESCE($4, password_hash),
        home_address = CASE WHEN $5 THEN $6 ELSE home_address END,
        updated_at = now()
    WHERE username = $1
    RETURNING *
"#;

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Splits a nullable change into its `UPDATE_USER_SQL` flag and value.
fn nullable_change(change: Option<Option<String>>) -> (bool, Option<String>) {
    match change {
        Some(value) => (true, value),
        None => (false, None),
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn username_exists(&self, username: &str) -> UserResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Username.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, input: NewUser) -> UserResult<User> {
        let username = input.username.clone();
        let active_model: entity::ActiveModel = User::new(input).into();

        let model = active_model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserError::UsernameTaken(username)
            } else {
                UserError::CreateFailed(e.to_string())
            }
        })?;

        tracing::info!(user_id = %model.id, username = %model.username, "Created user");
        Ok(model.into())
    }

    async fn update_by_username(
        &self,
        username: &str,
        changes: UserChanges,
    ) -> UserResult<Option<User>> {
        let (set_name, name) = nullable_change(changes.name);
        let (set_home_address, home_address) = nullable_change(changes.home_address);

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            UPDATE_USER_SQL,
            [
                username.into(),
                set_name.into(),
                name.into(),
                changes.password_hash.into(),
                set_home_address.into(),
                home_address.into(),
            ],
        );

        let model = entity::Entity::find()
            .from_raw_sql(stmt)
            .one(&self.db)
            .await?;

        if let Some(ref model) = model {
            tracing::info!(user_id = %model.id, username = %username, "Updated user");
        }
        Ok(model.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};
    use uuid::Uuid;

    fn model(username: &str) -> entity::Model {
        let now = Utc::now().with_timezone(&FixedOffset::east_opt(0).unwrap());
        entity::Model {
            id: Uuid::now_v7(),
            username: username.to_string(),
            password_hash: "hash".to_string(),
            name: Some("Alice".to_string()),
            email: None,
            home_address: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            name: None,
            email: None,
            home_address: None,
        }
    }

    #[tokio::test]
    async fn test_get_by_username_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(repo.get_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_returns_row() {
        let row = model("alice");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo
            .update_by_username(
                "alice",
                UserChanges {
                    name: Some(Some("Alice".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, row.id);
        assert_eq!(user.name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo
            .update_by_username("nobody", UserChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_nullable_change_flags() {
        assert_eq!(nullable_change(None), (false, None));
        assert_eq!(nullable_change(Some(None)), (true, None));
        assert_eq!(
            nullable_change(Some(Some("Alice".to_string()))),
            (true, Some("Alice".to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_clearing_name() {
        let mut row = model("alice");
        row.name = None;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo
            .update_by_username(
                "alice",
                UserChanges {
                    name: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(user.name.is_none());
    }

    #[tokio::test]
    async fn test_insert_failure_is_create_failed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "connection reset".to_string(),
            ))])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo.create(new_user("alice")).await;
        assert!(matches!(result, Err(UserError::CreateFailed(_))));
    }
}

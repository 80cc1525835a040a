use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserChanges};

/// Repository trait for User persistence
///
/// Rows are keyed by `username`. Reads return the full row, hash included.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Advisory pre-insert check; the unique index is what actually guards
    async fn username_exists(&self, username: &str) -> UserResult<bool>;

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// Fails with [`UserError::UsernameTaken`] on a duplicate username
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// `None` when no user has this username
    async fn update_by_username(
        &self,
        username: &str,
        changes: UserChanges,
    ) -> UserResult<Option<User>>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn username_exists(&self, username: &str) -> UserResult<bool> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn create(&self, input: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&input.username) {
            return Err(UserError::UsernameTaken(input.username));
        }

        let user = User::new(input);
        users.insert(user.username.clone(), user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn update_by_username(
        &self,
        username: &str,
        changes: UserChanges,
    ) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(user) = users.get_mut(username) else {
            return Ok(None);
        };
        user.apply_changes(changes);

        tracing::info!(user_id = %user.id, username = %username, "Updated user");
        Ok(Some(user.clone()))
    }
}

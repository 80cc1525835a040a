use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UpdateUser, User, UserChanges};
use crate::password::{HashConfig, hash_password};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Returns full [`User`] rows, hash included. Handlers convert them to
/// `UserResponse` before anything leaves the process.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hash_config: HashConfig,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, hash_config: HashConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            hash_config,
        }
    }

    #[instrument(skip(self))]
    pub async fn username_exists(&self, username: &str) -> UserResult<bool> {
        self.repository.username_exists(username).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        self.repository.get_by_username(username).await
    }

    /// Register a user, storing a bcrypt hash in place of the password
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        // Fast path only; a concurrent insert still trips the unique index
        if self.repository.username_exists(&input.username).await? {
            return Err(UserError::UsernameTaken(input.username));
        }

        let password_hash = hash_password(&input.password, self.hash_config).await?;
        self.repository
            .create(NewUser::from_create(input, password_hash))
            .await
    }

    /// Apply a partial profile update. An empty update is a plain lookup and
    /// leaves `updated_at` alone; a new password is re-hashed.
    #[instrument(skip(self, input))]
    pub async fn update(&self, username: &str, input: UpdateUser) -> UserResult<Option<User>> {
        if input.is_empty() {
            return self.repository.get_by_username(username).await;
        }

        let password_hash = match input.password {
            Some(ref password) => Some(hash_password(password, self.hash_config).await?),
            None => None,
        };

        let changes = UserChanges {
            name: input.name,
            password_hash,
            home_address: input.home_address,
        };
        self.repository.update_by_username(username, changes).await
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User row as stored, including the bcrypt hash
///
/// Never serialized into a response; handlers convert to [`UserResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub home_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User as returned by the API (no password material)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = User)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub home_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            email: user.email,
            home_address: user.home_address,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Registration body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(length(min = 8))]
    #[schema(min_length = 8, format = Password)]
    pub password: String,
    pub name: Option<String>,
    /// Optional, but `null` is rejected
    #[serde(default, deserialize_with = "axum_helpers::extractors::non_null")]
    #[schema(value_type = String)]
    #[validate(email)]
    pub email: Option<String>,
    pub home_address: Option<String>,
}

/// Profile update body
///
/// `username` and `email` are not part of this shape; when a client sends
/// them they are dropped during decoding and the update proceeds.
///
/// `name` and `homeAddress` distinguish absent (`None`, keep) from `null`
/// (`Some(None)`, clear). `password` may be absent but never `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "axum_helpers::extractors::nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "axum_helpers::extractors::non_null")]
    #[schema(value_type = String, format = Password)]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "axum_helpers::extractors::nullable")]
    #[schema(value_type = Option<String>)]
    pub home_address: Option<Option<String>>,
}

impl UpdateUser {
    /// True when the body names no updatable field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none() && self.home_address.is_none()
    }
}

/// Insert payload handed to the repository, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub home_address: Option<String>,
}

impl NewUser {
    pub fn from_create(input: CreateUser, password_hash: String) -> Self {
        Self {
            username: input.username,
            password_hash,
            name: input.name,
            email: input.email,
            home_address: input.home_address,
        }
    }
}

/// Column changes for an update, password already hashed
///
/// `None` leaves a column alone; `Some(None)` writes NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<Option<String>>,
    pub password_hash: Option<String>,
    pub home_address: Option<Option<String>>,
}

impl User {
    pub fn new(input: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username: input.username,
            password_hash: input.password_hash,
            name: input.name,
            email: input.email,
            home_address: input.home_address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied columns and refresh `updated_at`.
    pub fn apply_changes(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(hash) = changes.password_hash {
            self.password_hash = hash;
        }
        if let Some(home_address) = changes.home_address {
            self.home_address = home_address;
        }
        self.updated_at = Utc::now();
    }
}

//! Users Domain
//!
//! Registration and profile management for user accounts.
//!
//! # Features
//!
//! - Create, fetch and update users keyed by username
//! - bcrypt password hashing with configurable cost ([`HashConfig`])
//! - Responses never carry password material ([`UserResponse`])
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response sanitization
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Uniqueness pre-check, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (PostgreSQL or in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, UserResponse, CreateUser, UpdateUser
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{HashConfig, InMemoryUserRepository, UserService, handlers};
//!
//! let service = UserService::new(InMemoryUserRepository::new(), HashConfig::default());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, NewUser, UpdateUser, User, UserChanges, UserResponse};
pub use password::{HashConfig, hash_password, verify_password};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;

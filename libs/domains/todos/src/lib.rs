//! Todos Domain
//!
//! CRUD over todo items.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, 404 mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (PostgreSQL or in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo, CreateTodo, UpdateTodo
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{InMemoryTodoRepository, TodoService, handlers};
//!
//! let service = TodoService::new(InMemoryTodoRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use models::{CreateTodo, Todo, UpdateTodo};
pub use postgres::PgTodoRepository;
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use service::TodoService;

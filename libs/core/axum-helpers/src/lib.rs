//! # Axum Helpers
//!
//! Shared HTTP plumbing for the API services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS configuration
//! - **[`errors`]**: The `{"error": ...}` envelope and [`AppError`]
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON) and
//!   `null` handling for optional JSON members
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::{Environment, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new();
//!     let router = create_router::<ApiDoc>(api_routes, Router::new(), &Environment::from_env())?;
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {})
//!         .await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::create_cors_layer;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{UuidPath, ValidatedJson};

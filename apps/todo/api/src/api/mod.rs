use axum::Router;
use axum_helpers::server::{create_router, health_router};

pub mod health;
pub mod todos;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/todos", todos::router(state))
        .nest("/users", users::router(state))
}

/// Assembles the served application.
///
/// - `/api/todos`, `/api/users`: resource routes
/// - `/health`: liveness
/// - `/ready`: readiness with a real database round trip
/// - `/openapi.json`, `/docs`: API documentation
pub fn app(state: &crate::state::AppState) -> std::io::Result<Router> {
    let root = health_router().merge(ready_router(state.clone()));
    create_router::<crate::openapi::ApiDoc>(routes(state), root, &state.config.environment)
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied; [`app`] merges it at the root so it shares
/// the API middleware stack.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{handle_panic, not_found};
use crate::http::create_cors_layer;
use axum::{Json, Router, routing::get};
use core_config::{Environment, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// - `GET /openapi.json`: the generated OpenAPI document for `T`
/// - `GET /docs`: Scalar UI reading the same document
/// - `apis` nested under `/api`
/// - `root` merged as-is (liveness and readiness)
/// - JSON 404 fallback, panic catching, request tracing, CORS, compression
///
/// Domain routers are expected to have their state applied already. Every
/// route, `root` included, sits behind the same middleware stack.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is set but invalid.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/todos", todos::router(&state));
/// let root = health_router().merge(ready_router(state));
/// let router = create_router::<ApiDoc>(api_routes, root, &Environment::from_env())?;
/// ```
pub fn create_router<T>(
    apis: Router,
    root: Router,
    environment: &Environment,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = create_cors_layer(environment)?;
    let openapi = T::openapi();
    let document = openapi.clone();

    let router = Router::new()
        .route(
            "/openapi.json",
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        )
        .merge(Scalar::with_url("/docs", openapi))
        .nest("/api", apis)
        .merge(root)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` within `shutdown_timeout`.
///
/// In-flight requests are drained before the function returns.
///
/// # Example
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        if shutdown_rx.recv().await.is_err() {
            return;
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // Release the cleanup task if the server stopped without a signal.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

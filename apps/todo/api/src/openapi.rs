use utoipa::OpenApi;

/// Main OpenAPI documentation
/// Domain paths are written relative to their resource and nested here;
/// the `/api` prefix is carried by the server entry.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "Todos and user accounts over PostgreSQL"
    ),
    servers((url = "/api", description = "API base path")),
    components(schemas(axum_helpers::ErrorResponse)),
    nest(
        (path = "/todos", api = domain_todos::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;

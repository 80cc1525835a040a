use axum::http::{HeaderValue, Method, header};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated origins).
///
/// When the variable is unset, development allows any origin and production
/// allows none.
///
/// # Errors
/// Returns `InvalidInput` if the variable is set but contains no valid origin.
pub fn create_cors_layer(environment: &Environment) -> io::Result<CorsLayer> {
    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origins) => {
            let allowed = parse_origins(&origins)?;
            info!("CORS configured with allowed origins: {}", origins);
            Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(Duration::from_secs(3600)))
        }
        Err(_) if environment.is_development() => {
            info!("CORS_ALLOWED_ORIGIN not set, allowing any origin (development)");
            Ok(CorsLayer::permissive())
        }
        Err(_) => {
            info!("CORS_ALLOWED_ORIGIN not set, cross-origin requests disabled");
            Ok(CorsLayer::new())
        }
    }
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    Ok(origins)
}

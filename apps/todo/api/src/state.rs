//! Shared application state.

/// Cloned into each router that needs it; the connection is a pooled handle,
/// so clones share one pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{RetryConfig, retry_with_backoff};

/// Opens a connection pool with the settings in `config`.
pub async fn connect(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.into_connect_options()).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Like [`connect`], retrying with exponential backoff while the server comes up.
///
/// `None` uses [`RetryConfig::default`].
///
/// # Example
/// ```ignore
/// use database::postgres::{PostgresConfig, connect_with_retry};
/// use database::common::RetryConfig;
///
/// let config = PostgresConfig::from_env()?;
/// let db = connect_with_retry(config, Some(RetryConfig::new().with_max_retries(10))).await?;
/// ```
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();

    retry_with_backoff(
        || {
            let options = options.clone();
            async move {
                let db = Database::connect(options).await?;
                info!("Successfully connected to PostgreSQL database");
                Ok(db)
            }
        },
        retry_config.unwrap_or_default(),
    )
    .await
}

/// Applies every pending migration of `M`.
///
/// `app_name` only labels the log lines.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

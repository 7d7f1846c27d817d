//! Application bootstrap: pool, schema, service, router and listener.

use std::sync::Arc;

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;

use crate::config::{AppConfig, ConfigError};
use crate::http::{self, ServerError};
use crate::todo::{
    adapters::postgres::PostgresTodoRepository, ports::TodoRepositoryError,
    services::TodoLifecycleService,
};

/// Fatal startup and serving errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The connection pool could not be built.
    #[error("failed to connect to database: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// The storage schema could not be created.
    #[error("failed to initialise schema: {0}")]
    Schema(#[source] TodoRepositoryError),

    /// The HTTP server failed.
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Connects to `PostgreSQL`, ensures the schema exists and serves the API
/// until a shutdown signal arrives.
///
/// # Errors
///
/// Returns [`AppError`] when any startup step fails or the server stops
/// with an error.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let manager = ConnectionManager::<PgConnection>::new(config.database.connection_string());
    let pool = Pool::builder()
        .max_size(config.database.pool_size)
        .build(manager)?;
    info!(
        host = %config.database.host,
        database = %config.database.name,
        pool_size = config.database.pool_size,
        "connected to database"
    );

    let repository = PostgresTodoRepository::new(pool);
    repository.ensure_schema().await.map_err(AppError::Schema)?;

    let service = TodoLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    http::serve(config.listen_addr(), http::router(service)).await?;
    Ok(())
}

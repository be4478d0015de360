use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::config::loader::mask_database_url;

/// Open the shared connection pool for the manufacturing database.
///
/// Connections are established lazily on first use so that the service can
/// start, and report not-ready, while the database is unreachable.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy(&config.url)?;

    info!(
        url = %mask_database_url(&config.url),
        max_connections = config.max_connections,
        "Database pool configured"
    );
    Ok(pool)
}

//! Connection pool management.
//!
//! A single capped PgPool is shared by every action. The pool connects
//! eagerly so an unreachable database surfaces at startup rather than on
//! first use; the validation connection is released back to the pool
//! right away.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::DbConfig;
use crate::error::DbResult;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create the connection pool, verifying the database is reachable.
pub async fn create_pool(config: &DbConfig) -> DbResult<PgPool> {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Create the connection pool with a custom connection cap.
pub async fn create_pool_with_options(
    config: &DbConfig,
    max_connections: u32,
) -> DbResult<PgPool> {
    debug!(max_connections, host = %config.host, "creating connection pool");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(config.connect_options()?)
        .await?;
    Ok(pool)
}

/// Round-trip `SELECT 1` on a pooled connection.
pub async fn ping(pool: &PgPool) -> DbResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p staffctl-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = DbConfig::from_env().expect("config");
        assert!(config.url.is_some(), "DATABASE_URL required");

        let pool = create_pool(&config).await.expect("pool creation failed");
        ping(&pool).await.expect("ping failed");
        pool.close().await;
    }
}

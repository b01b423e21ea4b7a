//! MySQL connection pool management

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use smil_shared::config::database::DatabaseConfig;

use crate::InfrastructureError;

/// Managed MySQL connection pool
///
/// Thin wrapper around [`MySqlPool`] that owns pool construction and health
/// checking. Clones share the same underlying pool.
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a connection pool from the database configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .test_before_acquire(true)
            .connect_with(options)
            .await?;

        info!(
            max_connections = config.max_connections,
            "Database connection pool created"
        );

        Ok(Self { pool })
    }

    /// Access the underlying SQLx pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Run a trivial query to verify the database is reachable
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(true)
    }
}

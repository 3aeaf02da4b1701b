//! MySQL connection pool wrapper for the storage crate.

use crate::config::DatabaseConfig;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

/// Manages a single MySQL pool built from [`DatabaseConfig`].
///
/// The pool connects lazily: the first query opens the first connection, and dead
/// connections are replaced by the pool rather than by callers. Clone handles to
/// share the pool; there is no process-global instance.
#[derive(Clone)]
pub struct MySqlPoolManager {
    pool: MySqlPool,
}

impl MySqlPoolManager {
    /// Creates a lazily-connecting pool for the given configuration.
    pub fn new(config: &DatabaseConfig) -> Self {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            ssl_required = config.ssl_required,
            "Initializing MySQL pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(config.connect_options());

        Self { pool }
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

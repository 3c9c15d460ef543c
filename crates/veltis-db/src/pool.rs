//! Database connection pool.
//!
//! Thin wrapper around a `PgPool` so callers depend on one construction path
//! with consistent settings.

use crate::error::DbError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Default maximum number of pooled connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default timeout when acquiring a connection from the pool.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DbPool {
    inner: PgPool,
}

impl DbPool {
    /// Connect to the database at `url` with default pool settings.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConnectionFailed` if the connection cannot be established.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let inner = PgPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .acquire_timeout(DEFAULT_ACQUIRE_TIMEOUT)
            .connect(url)
            .await
            .map_err(DbError::ConnectionFailed)?;

        tracing::info!("Database pool connected");
        Ok(Self { inner })
    }

    /// Wrap an already constructed `PgPool`.
    #[must_use]
    pub fn from_pool(inner: PgPool) -> Self {
        Self { inner }
    }

    /// Access the underlying `PgPool`.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    // Pool tests require a real database and live in integration tests.
}

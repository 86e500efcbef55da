//! SQLite pool construction. The database file is created on first connect.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::InvalidVar {
            name: "DATABASE_URL",
            value: database_url.to_string(),
            reason: e.to_string(),
        })?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Pool over a private in-memory database. A single connection that never
/// expires, since each in-memory connection is its own database.
pub async fn memory_pool() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_a_config_error() {
        let err = connect("sqlite://customers-test.db?mode=sideways", 1)
            .await
            .unwrap_err();
        match err {
            AppError::Config(ConfigError::InvalidVar { name, value, .. }) => {
                assert_eq!(name, "DATABASE_URL");
                assert_eq!(value, "sqlite://customers-test.db?mode=sideways");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }
}

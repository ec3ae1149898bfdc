//! SQLite storage backend using sqlx.

mod asides;

use std::str::FromStr;
use std::time::Duration;

use asides_core::{
    Aside, SQLITE_BUSY_TIMEOUT_SECS, SQLITE_POOL_ACQUIRE_TIMEOUT_SECS,
    SQLITE_POOL_MAX_CONNECTIONS, env_parse_with_default,
};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::error::StorageError;
use crate::migrations::run_migrations;

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens (creating if missing) the database at `database_url` and runs the
    /// schema bootstrap before returning.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(SQLITE_BUSY_TIMEOUT_SECS));
        let max_connections =
            env_parse_with_default("ASIDES_POOL_MAX_CONNECTIONS", SQLITE_POOL_MAX_CONNECTIONS);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(SQLITE_POOL_ACQUIRE_TIMEOUT_SECS))
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database. A single connection is kept open for the
    /// lifetime of the pool, since every new connection would see an empty database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("SqliteStorage initialized");
        Ok(Self { pool })
    }

    /// Underlying pool, for health checks and tests.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

pub(crate) const ASIDE_COLUMNS: &str = "id, body, created_at, updated_at";

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

fn micros_to_datetime(micros: i64, column: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::from_timestamp_micros(micros).ok_or_else(|| {
        StorageError::DataCorruption(format!("{column} out of range: {micros}"))
    })
}

pub(crate) fn row_to_aside(row: &SqliteRow) -> Result<Aside, StorageError> {
    let created_at = micros_to_datetime(row.try_get("created_at")?, "created_at")?;
    let updated_at = micros_to_datetime(row.try_get("updated_at")?, "updated_at")?;
    Ok(Aside::new(row.try_get("id")?, row.try_get("body")?, created_at, updated_at))
}

//! Schema bootstrap, versioned through `PRAGMA user_version`.
//!
//! Runs once before the server accepts traffic. Every step is idempotent, so
//! starting against an already-initialised database is a no-op.

mod v1;

use sqlx::SqlitePool;

pub const SCHEMA_VERSION: i64 = 1;

/// Brings the schema up to [`SCHEMA_VERSION`].
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let current_version =
        sqlx::query_scalar::<_, i64>("PRAGMA user_version").fetch_one(pool).await?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1 {
        tracing::info!("Running migration v1: asides table");
        sqlx::raw_sql(v1::SQL).execute(pool).await?;
    }

    if current_version < SCHEMA_VERSION {
        let bump = format!("PRAGMA user_version = {SCHEMA_VERSION}");
        sqlx::raw_sql(&bump).execute(pool).await?;
    }
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}

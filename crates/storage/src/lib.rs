//! Storage layer for asides
//!
//! SQLite-based storage via `sqlx`. The `UNIQUE` constraint on `body` and
//! `AUTOINCREMENT` ids are the only cross-request coordination the service
//! relies on.

mod error;
mod migrations;
mod sqlite_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use migrations::{run_migrations, SCHEMA_VERSION};
pub use sqlite_storage::SqliteStorage;
pub use traits::AsideStore;

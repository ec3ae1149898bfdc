use async_trait::async_trait;
use asides_core::Aside;
use chrono::{DateTime, Utc};

use crate::error::StorageError;

/// CRUD operations on asides.
///
/// Implementations enforce body uniqueness atomically with the write
/// (a store-level constraint, not a separate existence check).
#[async_trait]
pub trait AsideStore: Send + Sync {
    /// Insert a new aside stamped with `now`. `Duplicate` if the body exists.
    async fn insert(&self, body: &str, now: DateTime<Utc>) -> Result<Aside, StorageError>;

    /// Get aside by ID.
    async fn get(&self, id: i64) -> Result<Option<Aside>, StorageError>;

    /// Replace the body of an aside. Returns `None` if the id is absent.
    ///
    /// `updated_at` becomes `now`, or one microsecond past its previous value
    /// when `now` is not later. On `Duplicate` the row is left untouched.
    async fn update_body(
        &self,
        id: i64,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Aside>, StorageError>;

    /// Delete aside by ID. Returns `true` if deleted.
    async fn delete(&self, id: i64) -> Result<bool, StorageError>;

    /// Most recently updated asides first, ties broken by newest id.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Aside>, StorageError>;

    /// Delete every aside. Returns the number of rows removed.
    async fn delete_all(&self) -> Result<u64, StorageError>;
}

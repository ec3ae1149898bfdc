//! AsideStore implementation for SqliteStorage.

use super::*;

use crate::traits::AsideStore;
use async_trait::async_trait;

#[async_trait]
impl AsideStore for SqliteStorage {
    async fn insert(&self, body: &str, now: DateTime<Utc>) -> Result<Aside, StorageError> {
        let stamp = now.timestamp_micros();
        let row = sqlx::query(&format!(
            "INSERT INTO asides (body, created_at, updated_at)
             VALUES (?, ?, ?)
             RETURNING {ASIDE_COLUMNS}"
        ))
        .bind(body)
        .bind(stamp)
        .bind(stamp)
        .fetch_one(&self.pool)
        .await?;
        row_to_aside(&row)
    }

    async fn get(&self, id: i64) -> Result<Option<Aside>, StorageError> {
        let row = sqlx::query(&format!("SELECT {ASIDE_COLUMNS} FROM asides WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_aside).transpose()
    }

    async fn update_body(
        &self,
        id: i64,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Aside>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE asides
             SET body = ?, updated_at = MAX(?, updated_at + 1)
             WHERE id = ?
             RETURNING {ASIDE_COLUMNS}"
        ))
        .bind(body)
        .bind(now.timestamp_micros())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_aside).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM asides WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Aside>, StorageError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(&format!(
            "SELECT {ASIDE_COLUMNS} FROM asides
             ORDER BY updated_at DESC, id DESC
             LIMIT ?"
        ))
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_aside).collect()
    }

    async fn delete_all(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM asides").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

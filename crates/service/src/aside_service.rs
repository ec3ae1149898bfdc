use std::sync::Arc;

use asides_core::{Aside, RECENT_LIMIT, SiteUrls};
use asides_storage::AsideStore;
use chrono::Utc;

use crate::auth::Authorized;
use crate::feed::Feed;
use crate::ServiceError;

/// CRUD, recency and bulk deletion over an [`AsideStore`].
///
/// Holds no state of its own between calls; uniqueness and id assignment
/// are the store's responsibility.
pub struct AsideService {
    store: Arc<dyn AsideStore>,
}

impl AsideService {
    #[must_use]
    pub fn new(store: Arc<dyn AsideStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, body: &str) -> Result<Aside, ServiceError> {
        validate_body(body)?;
        let aside = self.store.insert(body, Utc::now()).await.map_err(ServiceError::from_write)?;
        tracing::debug!(id = aside.id, "created aside");
        Ok(aside)
    }

    pub async fn get(&self, id: i64) -> Result<Aside, ServiceError> {
        self.store.get(id).await?.ok_or(ServiceError::NotFound(id))
    }

    /// An absent id is reported as `NotFound` even when the new body is also invalid.
    pub async fn update(&self, id: i64, body: &str) -> Result<Aside, ServiceError> {
        if let Err(invalid) = validate_body(body) {
            self.get(id).await?;
            return Err(invalid);
        }
        let updated = self
            .store
            .update_body(id, body, Utc::now())
            .await
            .map_err(ServiceError::from_write)?
            .ok_or(ServiceError::NotFound(id))?;
        tracing::debug!(id, "updated aside");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.store.delete(id).await? {
            tracing::debug!(id, "deleted aside");
            Ok(())
        } else {
            Err(ServiceError::NotFound(id))
        }
    }

    /// Up to `limit` asides, most recently updated first.
    pub async fn list_recent(&self, limit: usize) -> Result<Vec<Aside>, ServiceError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        Ok(self.store.list_recent(limit).await?)
    }

    /// The fixed "recent" window used by the listing and the feed.
    pub async fn recent(&self) -> Result<Vec<Aside>, ServiceError> {
        self.list_recent(RECENT_LIMIT).await
    }

    /// Removes every aside. Only reachable with a grant from [`crate::AuthGate`].
    pub async fn delete_all(&self, _grant: Authorized) -> Result<u64, ServiceError> {
        let removed = self.store.delete_all().await?;
        tracing::info!(removed, "deleted all asides");
        Ok(removed)
    }

    /// Atom feed over [`Self::recent`].
    pub async fn feed(&self, urls: &SiteUrls) -> Result<Feed, ServiceError> {
        let asides = self.recent().await?;
        Ok(Feed::build(&asides, urls, Utc::now()))
    }
}

fn validate_body(body: &str) -> Result<(), ServiceError> {
    if body.trim().is_empty() {
        return Err(ServiceError::InvalidInput("body must not be empty".to_owned()));
    }
    Ok(())
}

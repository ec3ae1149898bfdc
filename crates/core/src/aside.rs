use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single short text note.
///
/// `id` is assigned by the store and never reused. `body` is unique across
/// all stored asides. `updated_at` is refreshed on every successful body
/// change and never falls behind `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aside {
    pub id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Aside {
    #[must_use]
    pub fn new(id: i64, body: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self { id, body, created_at, updated_at }
    }
}

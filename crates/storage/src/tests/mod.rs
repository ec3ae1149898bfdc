//! Test utilities and module declarations for storage tests.

use crate::SqliteStorage;
use chrono::{DateTime, Duration, TimeZone, Utc};

pub async fn create_test_storage() -> SqliteStorage {
    SqliteStorage::in_memory().await.unwrap()
}

/// Fixed instant plus `offset_secs`, so ordering tests do not depend on the clock.
pub fn at(offset_secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(offset_secs)
}

mod aside_tests;

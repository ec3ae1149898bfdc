use super::{at, create_test_storage};
use crate::traits::AsideStore;
use crate::StorageError;

#[tokio::test]
async fn insert_assigns_increasing_ids() {
    let storage = create_test_storage().await;
    let first = storage.insert("first", at(0)).await.unwrap();
    let second = storage.insert("second", at(1)).await.unwrap();
    assert!(second.id > first.id);
    assert_eq!(first.created_at, first.updated_at);
    assert_eq!(first.created_at, at(0));
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let storage = create_test_storage().await;
    let first = storage.insert("first", at(0)).await.unwrap();
    let second = storage.insert("second", at(1)).await.unwrap();
    assert!(storage.delete(second.id).await.unwrap());
    let third = storage.insert("third", at(2)).await.unwrap();
    assert!(third.id > second.id);

    storage.delete_all().await.unwrap();
    let fourth = storage.insert("fourth", at(3)).await.unwrap();
    assert!(fourth.id > third.id);
    assert!(fourth.id > first.id);
}

#[tokio::test]
async fn duplicate_body_is_rejected_by_constraint() {
    let storage = create_test_storage().await;
    storage.insert("hello", at(0)).await.unwrap();
    let err = storage.insert("hello", at(1)).await.unwrap_err();
    assert!(err.is_duplicate(), "expected duplicate, got {err:?}");
    assert_eq!(storage.list_recent(10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_body_violates_check_constraint() {
    let storage = create_test_storage().await;
    let err = storage.insert("", at(0)).await.unwrap_err();
    assert!(matches!(err, StorageError::Constraint(_)), "got {err:?}");
}

#[tokio::test]
async fn get_returns_none_for_missing_id() {
    let storage = create_test_storage().await;
    assert!(storage.get(99).await.unwrap().is_none());
}

#[tokio::test]
async fn get_round_trips_body_and_timestamps() {
    let storage = create_test_storage().await;
    let created = storage.insert("round trip", at(5)).await.unwrap();
    let fetched = storage.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_refreshes_updated_at() {
    let storage = create_test_storage().await;
    let created = storage.insert("before", at(0)).await.unwrap();
    let updated = storage.update_body(created.id, "after", at(10)).await.unwrap().unwrap();
    assert_eq!(updated.body, "after");
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, at(10));
}

#[tokio::test]
async fn update_bumps_updated_at_when_clock_stalls() {
    let storage = create_test_storage().await;
    let created = storage.insert("before", at(0)).await.unwrap();
    let updated = storage.update_body(created.id, "after", at(0)).await.unwrap().unwrap();
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_to_own_body_succeeds() {
    let storage = create_test_storage().await;
    let created = storage.insert("same", at(0)).await.unwrap();
    let updated = storage.update_body(created.id, "same", at(1)).await.unwrap().unwrap();
    assert_eq!(updated.body, "same");
}

#[tokio::test]
async fn update_to_other_body_leaves_row_unchanged() {
    let storage = create_test_storage().await;
    storage.insert("taken", at(0)).await.unwrap();
    let victim = storage.insert("mine", at(1)).await.unwrap();

    let err = storage.update_body(victim.id, "taken", at(2)).await.unwrap_err();
    assert!(err.is_duplicate());

    let reloaded = storage.get(victim.id).await.unwrap().unwrap();
    assert_eq!(reloaded, victim);
}

#[tokio::test]
async fn update_missing_id_returns_none() {
    let storage = create_test_storage().await;
    assert!(storage.update_body(42, "ghost", at(0)).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_id_leaves_others() {
    let storage = create_test_storage().await;
    let kept = storage.insert("kept", at(0)).await.unwrap();
    assert!(!storage.delete(kept.id + 100).await.unwrap());
    assert!(storage.get(kept.id).await.unwrap().is_some());
}

#[tokio::test]
async fn list_recent_orders_by_updated_at_desc() {
    let storage = create_test_storage().await;
    let a = storage.insert("a", at(0)).await.unwrap();
    let b = storage.insert("b", at(1)).await.unwrap();
    let c = storage.insert("c", at(2)).await.unwrap();
    storage.update_body(a.id, "a2", at(3)).await.unwrap();

    let ids: Vec<i64> = storage.list_recent(10).await.unwrap().iter().map(|x| x.id).collect();
    assert_eq!(ids, vec![a.id, c.id, b.id]);
}

#[tokio::test]
async fn list_recent_breaks_ties_by_newest_id() {
    let storage = create_test_storage().await;
    let a = storage.insert("a", at(0)).await.unwrap();
    let b = storage.insert("b", at(0)).await.unwrap();
    let ids: Vec<i64> = storage.list_recent(10).await.unwrap().iter().map(|x| x.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[tokio::test]
async fn list_recent_respects_limit() {
    let storage = create_test_storage().await;
    for i in 0..15 {
        storage.insert(&format!("aside {i}"), at(i)).await.unwrap();
    }
    let recent = storage.list_recent(10).await.unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent.first().unwrap().body, "aside 14");
    assert!(storage.list_recent(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_all_reports_count() {
    let storage = create_test_storage().await;
    storage.insert("one", at(0)).await.unwrap();
    storage.insert("two", at(1)).await.unwrap();
    assert_eq!(storage.delete_all().await.unwrap(), 2);
    assert_eq!(storage.delete_all().await.unwrap(), 0);
    assert!(storage.list_recent(10).await.unwrap().is_empty());
}

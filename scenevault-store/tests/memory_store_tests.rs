use scenevault_store::{MemorySceneStore, SceneStore, StoreError, StoredScene};
use scenevault_types::RoomId;

fn record(version: u64) -> StoredScene {
    StoredScene {
        scene_version: version,
        iv: "iv".to_string(),
        ciphertext: "ct".to_string(),
    }
}

fn room(id: &str) -> RoomId {
    RoomId::new(id).unwrap()
}

#[tokio::test]
async fn empty_store_returns_absent() {
    let store = MemorySceneStore::new();
    assert!(store.is_empty().await);
    assert_eq!(store.get(&room("abc")).await.unwrap(), None);
}

#[tokio::test]
async fn create_then_get() {
    let store = MemorySceneStore::new();
    store.create(&room("abc"), &record(1)).await.unwrap();
    assert_eq!(store.get(&room("abc")).await.unwrap(), Some(record(1)));
    assert_eq!(store.len().await, 1);
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn create_existing_conflicts() {
    let store = MemorySceneStore::new();
    store.create(&room("abc"), &record(1)).await.unwrap();
    let err = store.create(&room("abc"), &record(2)).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
    assert_eq!(store.snapshot(&room("abc")).await, Some(record(1)));
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let store = MemorySceneStore::new();
    let err = store.update(&room("abc"), &record(1)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn update_replaces_record() {
    let store = MemorySceneStore::new();
    store.create(&room("abc"), &record(1)).await.unwrap();
    store.update(&room("abc"), &record(2)).await.unwrap();
    assert_eq!(store.snapshot(&room("abc")).await, Some(record(2)));
    assert_eq!(store.write_count(), 2);
}

#[tokio::test]
async fn clones_share_records() {
    let store = MemorySceneStore::new();
    let clone = store.clone();
    clone.create(&room("abc"), &record(1)).await.unwrap();
    assert_eq!(store.get(&room("abc")).await.unwrap(), Some(record(1)));
}

#[tokio::test]
async fn rooms_are_independent() {
    let store = MemorySceneStore::new();
    store.create(&room("a"), &record(1)).await.unwrap();
    store.create(&room("b"), &record(9)).await.unwrap();
    assert_eq!(store.snapshot(&room("a")).await, Some(record(1)));
    assert_eq!(store.snapshot(&room("b")).await, Some(record(9)));
}

use eventcat_common::Event;
use eventcat_storage::{EventStore, SqlStore, StoreError};
use sea_orm::{ConnectOptions, Database};
use time::macros::datetime;

async fn memory_store() -> SqlStore {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.unwrap();
    let store = SqlStore::from_connection(db);
    store.sync().await.unwrap();
    store
}

fn draft(name: &str) -> Event {
    Event {
        id: 0,
        name: name.to_string(),
        description: String::new(),
        start_date_time: datetime!(2025-05-01 19:00),
        end_date_time: datetime!(2025-05-01 23:00),
        venue: "Club".to_string(),
        price: 10.0,
        image_url: String::new(),
    }
}

#[tokio::test]
async fn crud_round_trip() {
    let store = memory_store().await;
    assert!(store.list_events().await.unwrap().is_empty());

    let created = store.create_event(draft("gig")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "gig");

    let fetched = store.get_event(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let mut changed = draft("renamed");
    changed.price = 15.5;
    let updated = store.update_event(created.id, changed).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.price, 15.5);

    assert!(store.delete_event(created.id).await.unwrap());
    assert!(store.get_event(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_strictly_increase() {
    let store = memory_store().await;
    let a = store.create_event(draft("a")).await.unwrap();
    let b = store.create_event(draft("b")).await.unwrap();
    let c = store.create_event(draft("c")).await.unwrap();
    assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let store = memory_store().await;
    let err = store.update_event(42, draft("ghost")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
    assert!(store.list_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_returns_false() {
    let store = memory_store().await;
    assert!(!store.delete_event(42).await.unwrap());
}

#[tokio::test]
async fn health_passes_after_sync() {
    let store = memory_store().await;
    store.health().await.unwrap();
}

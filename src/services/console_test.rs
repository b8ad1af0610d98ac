use super::*;
use crate::store::memory::MemoryStore;
use crate::store::test_helpers::BlindLookupStore;

#[tokio::test]
async fn list_consoles_on_empty_store_is_empty() {
    let store = MemoryStore::new();
    assert!(list_consoles(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn created_console_round_trips_through_get() {
    let store = MemoryStore::new();
    let created = create_console(&store, "Super Nintendo").await.unwrap();

    let fetched = get_console(&store, i64::from(created.id)).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Super Nintendo");
}

#[tokio::test]
async fn create_console_trims_name() {
    let store = MemoryStore::new();
    let created = create_console(&store, "  Mega Drive \n").await.unwrap();
    assert_eq!(created.name, "Mega Drive");
}

#[tokio::test]
async fn create_console_rejects_blank_name_without_writing() {
    let store = MemoryStore::new();
    let err = create_console(&store, "   ").await.unwrap_err();
    assert!(matches!(err, ConsoleError::InvalidName));
    assert!(store.list_consoles().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_console_duplicate_name_conflicts_and_leaves_store_unchanged() {
    let store = MemoryStore::new();
    create_console(&store, "Super Nintendo").await.unwrap();

    let err = create_console(&store, "Super Nintendo").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Conflict(ref name) if name == "Super Nintendo"));
    assert_eq!(err.error_code(), "E_CONSOLE_CONFLICT");
    assert_eq!(list_consoles(&store).await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_console_maps_store_unique_violation_to_conflict() {
    let store = BlindLookupStore::new();
    store.inner.insert_console("Neo Geo").await.unwrap();

    let err = create_console(&store, "Neo Geo").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Conflict(_)));
    assert_eq!(store.list_consoles().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_console_missing_id_is_not_found() {
    let store = MemoryStore::new();
    create_console(&store, "Super Nintendo").await.unwrap();

    let err = get_console(&store, 999_999).await.unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound(999_999)));
    assert_eq!(err.error_code(), "E_CONSOLE_NOT_FOUND");
}

#[tokio::test]
async fn get_console_id_outside_key_range_is_not_found() {
    let store = MemoryStore::new();

    let err = get_console(&store, i64::from(i32::MAX) + 1).await.unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound(2_147_483_648)));
}

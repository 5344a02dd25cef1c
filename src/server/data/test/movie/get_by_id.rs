use super::*;

/// Tests fetching an existing movie by identifier.
///
/// Expected: Some(movie) equal to the created record
#[tokio::test]
async fn returns_existing_movie() {
    let store = empty_store();
    let created = store.create(params("Inception", &[Genre::SciFi])).await;

    let found = store.get_by_id(&created.id).await;

    assert_eq!(found, Some(created));
}

/// Tests fetching an identifier that was never assigned.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let store = empty_store();
    store.create(params("Inception", &[Genre::SciFi])).await;

    assert_eq!(store.get_by_id("does-not-exist").await, None);
}

use super::*;

/// Tests deleting an existing movie.
///
/// Expected: true, then get_by_id yields None
#[tokio::test]
async fn deletes_existing_movie() {
    let store = empty_store();
    let created = store.create(params("Inception", &[Genre::SciFi])).await;

    assert!(store.delete_by_id(&created.id).await);
    assert_eq!(store.get_by_id(&created.id).await, None);
    assert_eq!(store.count().await, 0);
}

/// Tests that deleting preserves the order of the remaining movies.
///
/// Expected: first and third remain in order
#[tokio::test]
async fn keeps_order_of_remaining_movies() {
    let store = empty_store();
    store.create(params("First", &[Genre::Drama])).await;
    let middle = store.create(params("Second", &[Genre::Drama])).await;
    store.create(params("Third", &[Genre::Drama])).await;

    store.delete_by_id(&middle.id).await;

    let titles: Vec<String> = store.list(None).await.into_iter().map(|m| m.title).collect();
    assert_eq!(titles, vec!["First", "Third"]);
}

/// Tests deleting an identifier that does not exist, including a second delete.
///
/// Expected: false both times
#[tokio::test]
async fn returns_false_for_unknown_id() {
    let store = empty_store();
    let created = store.create(params("Inception", &[Genre::SciFi])).await;

    assert!(!store.delete_by_id("missing").await);
    assert!(store.delete_by_id(&created.id).await);
    assert!(!store.delete_by_id(&created.id).await);
}

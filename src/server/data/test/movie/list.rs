use super::*;

/// Tests listing without a filter returns every movie.
///
/// Expected: all three movies
#[tokio::test]
async fn lists_all_without_filter() {
    let store = empty_store();
    store.create(params("A", &[Genre::Drama])).await;
    store.create(params("B", &[Genre::Action])).await;
    store.create(params("C", &[Genre::Horror])).await;

    assert_eq!(store.list(None).await.len(), 3);
}

/// Tests filtering by genre is case-insensitive and returns exactly the matching subset.
///
/// Expected: the two Sci-Fi movies, in store order
#[tokio::test]
async fn filters_by_genre_ignoring_case() {
    let store = empty_store();
    store.create(params("Inception", &[Genre::Action, Genre::SciFi])).await;
    store.create(params("Forrest Gump", &[Genre::Drama, Genre::Romance])).await;
    store.create(params("The Matrix", &[Genre::SciFi])).await;

    let titles: Vec<String> = store
        .list(Some("sCi-fI"))
        .await
        .into_iter()
        .map(|m| m.title)
        .collect();

    assert_eq!(titles, vec!["Inception", "The Matrix"]);
}

/// Tests that a filter with no match yields an empty list rather than an error.
///
/// Expected: empty Vec
#[tokio::test]
async fn returns_empty_for_unmatched_genre() {
    let store = empty_store();
    store.create(params("Inception", &[Genre::SciFi])).await;

    assert!(store.list(Some("Western")).await.is_empty());
}

/// Tests that filtering never mutates the store.
///
/// Expected: unfiltered listing identical before and after filtering
#[tokio::test]
async fn filtering_does_not_mutate_store() {
    let store = empty_store();
    store.create(params("Inception", &[Genre::SciFi])).await;
    store.create(params("Heat", &[Genre::Crime])).await;
    let before = store.list(None).await;

    store.list(Some("crime")).await;
    store.list(Some("nothing")).await;

    assert_eq!(store.list(None).await, before);
}

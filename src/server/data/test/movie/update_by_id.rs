use super::*;

/// Tests a partial update changes only the supplied fields.
///
/// Expected: year updated; all other fields and the id unchanged, visible via get_by_id
#[tokio::test]
async fn merges_partial_fields() {
    let store = empty_store();
    let created = store.create(params("Inception", &[Genre::Action, Genre::SciFi])).await;

    let updated = store
        .update_by_id(
            &created.id,
            UpdateMovieParams {
                year: Some(2011),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.year, 2011);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.genre, created.genre);
    assert_eq!(store.get_by_id(&created.id).await, Some(updated));
}

/// Tests that an empty update leaves the record as it was.
///
/// Expected: Some(record) identical to the original
#[tokio::test]
async fn empty_update_is_a_no_op() {
    let store = empty_store();
    let created = store.create(params("Inception", &[Genre::SciFi])).await;

    let updated = store
        .update_by_id(&created.id, UpdateMovieParams::default())
        .await;

    assert_eq!(updated, Some(created));
}

/// Tests updating an identifier that does not exist.
///
/// Expected: None and the store untouched
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let store = empty_store();
    let created = store.create(params("Inception", &[Genre::SciFi])).await;

    let result = store
        .update_by_id(
            "missing",
            UpdateMovieParams {
                title: Some("Other".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_none());
    assert_eq!(store.list(None).await, vec![created]);
}

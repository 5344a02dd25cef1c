use super::*;

/// Tests creating a movie assigns an identifier and keeps the submitted fields.
///
/// Expected: Movie with id "movie-1" and fields equal to the params
#[tokio::test]
async fn creates_movie_with_generated_id() {
    let store = empty_store();
    let input = params("Inception", &[Genre::Action, Genre::SciFi]);

    let movie = store.create(input.clone()).await;

    assert_eq!(movie.id, "movie-1");
    assert_eq!(movie.title, input.title);
    assert_eq!(movie.year, input.year);
    assert_eq!(movie.director, input.director);
    assert_eq!(movie.duration, input.duration);
    assert_eq!(movie.rating, input.rating);
    assert_eq!(movie.poster, input.poster);
    assert_eq!(movie.genre, input.genre);
}

/// Tests that created movies are appended after existing ones.
///
/// Expected: list order matches creation order
#[tokio::test]
async fn appends_to_end_of_collection() {
    let store = empty_store();

    store.create(params("First", &[Genre::Drama])).await;
    store.create(params("Second", &[Genre::Drama])).await;

    let titles: Vec<String> = store.list(None).await.into_iter().map(|m| m.title).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

/// Tests that every created movie receives a distinct identifier.
///
/// Expected: 25 creations produce 25 unique ids
#[tokio::test]
async fn assigns_unique_ids() {
    let store = empty_store();

    let mut ids = HashSet::new();
    for i in 0..25 {
        let movie = store.create(params(&format!("Movie {}", i), &[Genre::Comedy])).await;
        ids.insert(movie.id);
    }

    assert_eq!(ids.len(), 25);
    assert_eq!(store.count().await, 25);
}

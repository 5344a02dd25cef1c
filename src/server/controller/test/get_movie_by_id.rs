use super::*;

/// Tests fetching a movie that exists.
///
/// Expected: 200 with the same record that was created
#[tokio::test]
async fn returns_existing_movie() -> Result<(), TestError> {
    let test = test();
    let created = create(&test, MoviePayloadFactory::inception().build()).await?;

    let response = test.get("/movies/movie-1").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()?, created);

    Ok(())
}

/// Tests fetching an unknown identifier.
///
/// Expected: 404 with a message and nothing else in the body
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = test();

    let response = test.get("/movies/unknown").await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()?, json!({ "message": "Movie not found" }));

    Ok(())
}

use super::*;

/// Tests creating a movie with the documented example payload.
///
/// Expected: 201 with generated id and every submitted field echoed back exactly
#[tokio::test]
async fn creates_movie_from_valid_payload() -> Result<(), TestError> {
    let test = test();
    let payload = json!({
        "title": "Inception",
        "year": 2010,
        "director": "C. Nolan",
        "duration": 148,
        "rating": 8.8,
        "poster": "http://x/p.jpg",
        "genre": ["Action", "Sci-Fi"]
    });

    let response = test.post_json("/movies", &payload).await?;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json()?;
    assert_eq!(body["id"], "movie-1");
    for (field, value) in payload.as_object().unwrap() {
        assert_eq!(&body[field], value, "field {} differs", field);
    }

    Ok(())
}

/// Tests that a client-supplied id is ignored.
///
/// Expected: 201 with the server-generated id
#[tokio::test]
async fn ignores_client_supplied_id() -> Result<(), TestError> {
    let test = test();
    let payload = MoviePayloadFactory::new().set("id", json!("mine")).build();

    let body = create(&test, payload).await?;

    assert_eq!(body["id"], "movie-1");

    Ok(())
}

/// Tests that every created movie gets a distinct id.
///
/// Expected: ids movie-1 and movie-2
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), TestError> {
    let test = test();

    let first = create(&test, MoviePayloadFactory::new().build()).await?;
    let second = create(&test, MoviePayloadFactory::new().build()).await?;

    assert_ne!(first["id"], second["id"]);

    Ok(())
}

/// Tests that missing and malformed fields are all reported.
///
/// Expected: 422 listing title (missing) and rating (out of range)
#[tokio::test]
async fn rejects_invalid_payload_with_every_issue() -> Result<(), TestError> {
    let test = test();
    let payload = MoviePayloadFactory::new()
        .without("title")
        .rating(12.0)
        .build();

    let response = test.post_json("/movies", &payload).await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json()?;
    let fields: Vec<&str> = body["error"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "rating"]);

    // Nothing was stored
    assert_eq!(test.get("/movies").await?.json()?, json!([]));

    Ok(())
}

/// Tests a genre outside the enumeration.
///
/// Expected: 422 with a genre issue
#[tokio::test]
async fn rejects_unknown_genre() -> Result<(), TestError> {
    let test = test();
    let payload = MoviePayloadFactory::new().genre(&["Western"]).build();

    let response = test.post_json("/movies", &payload).await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()?["error"][0]["field"], "genre");

    Ok(())
}

/// Tests a body that is not JSON at all.
///
/// Expected: 400 from the body-parsing layer, before validation
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let test = test();

    let response = test
        .send_raw_json(Method::POST, "/movies", "{\"title\": ")
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()?["error"].is_string());

    Ok(())
}

/// Tests a JSON body that is not an object.
///
/// Expected: 422 with a single body issue
#[tokio::test]
async fn rejects_non_object_json() -> Result<(), TestError> {
    let test = test();

    let response = test.post_json("/movies", &json!([1, 2, 3])).await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json()?,
        json!({ "error": [{ "field": "body", "message": "Expected a JSON object" }] })
    );

    Ok(())
}

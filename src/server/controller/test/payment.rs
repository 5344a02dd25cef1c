use super::*;

/// Tests the payment method list endpoint.
///
/// Expected: 200 JSONP body wrapped in the callback, JavaScript content type
#[tokio::test]
async fn returns_payment_methods_jsonp() -> Result<(), TestError> {
    let test = test();

    let response = test
        .get("/payments-api/4.0/service.payment?callback=cb&public_key=pk&account_id=1&list_id=2")
        .await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("content-type"),
        Some("application/javascript; charset=utf-8")
    );
    let body = response.text()?;
    assert!(body.starts_with("cb([{id:11, name:'MASTERCARD'},"));
    assert!(body.ends_with(",])"));

    Ok(())
}

/// Tests the token endpoint with bracketed card parameters.
///
/// Expected: echoed payer id and method, a fresh UUID token per call
#[tokio::test]
async fn returns_token_jsonp() -> Result<(), TestError> {
    let test = test();
    let uri = "/payments-api/4.0/service.token?callback=jsonp7&_card%5Bpayer_id%5D=42&_card%5Bmethod%5D=VISA";

    let first = test.get(uri).await?.text()?;
    let second = test.get(uri).await?.text()?;

    assert!(first.starts_with("jsonp7({\n    \"token\": \""));
    assert!(first.contains("\"payer_id\": \"42\""));
    assert!(first.contains("\"method\": \"VISA\""));
    assert!(first.ends_with("\"document\": \"null\"\n  })"));

    let token = |body: &str| body.split('"').nth(3).map(str::to_string);
    let token_one = token(&first).unwrap();
    assert_eq!(token_one.len(), 36);
    assert_ne!(token(&first), token(&second));

    Ok(())
}

/// Tests the token endpoint without card parameters.
///
/// Expected: undefined placeholders
#[tokio::test]
async fn token_without_card_renders_undefined() -> Result<(), TestError> {
    let test = test();

    let body = test
        .get("/payments-api/4.0/service.token?callback=cb")
        .await?
        .text()?;

    assert!(body.contains("\"payer_id\": \"undefined\""));
    assert!(body.contains("\"method\": \"undefined\""));

    Ok(())
}

/// Tests repeated query keys on both payment endpoints.
///
/// Expected: 200 on both, each key resolved to its first value
#[tokio::test]
async fn repeated_keys_use_first_value() -> Result<(), TestError> {
    let test = test();

    let methods = test
        .get("/payments-api/4.0/service.payment?callback=a&callback=b")
        .await?;
    let token = test
        .get("/payments-api/4.0/service.token?callback=a&callback=b&_card%5Bmethod%5D=VISA&_card%5Bmethod%5D=AMEX")
        .await?;

    assert_eq!(methods.status, StatusCode::OK);
    assert!(methods.text()?.starts_with("a([{id:11"));
    assert_eq!(token.status, StatusCode::OK);
    let body = token.text()?;
    assert!(body.starts_with("a({"));
    assert!(body.contains("\"method\": \"VISA\""));

    Ok(())
}

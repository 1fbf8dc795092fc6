use crate::CallerId;

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(request: Request<Body>) -> CallerId {
    let (mut parts, _body) = request.into_parts();
    CallerId::from_request_parts(&mut parts, &()).await.unwrap()
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let request = Request::builder()
        .header("X-User-Id", "42")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await.0, Some(42));
}

#[tokio::test]
async fn test_extractor_trims_whitespace() {
    let request = Request::builder()
        .header("X-User-Id", " 42 ")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await.0, Some(42));
}

#[tokio::test]
async fn test_extractor_without_header() {
    let request = Request::builder().body(Body::empty()).unwrap();

    assert_eq!(extract(request).await.0, None);
}

#[tokio::test]
async fn test_extractor_with_malformed_header() {
    let request = Request::builder()
        .header("X-User-Id", "not-a-number")
        .body(Body::empty())
        .unwrap();

    assert_eq!(extract(request).await.0, None);
}

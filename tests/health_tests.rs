//! In-process tests of the probe router.
//!
//! Requests go straight into the `Router` via `tower::ServiceExt::oneshot`,
//! no socket involved.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use futures::future::join_all;
use tower::ServiceExt;

use probekit::create_router;

async fn send(request: Request<Body>) -> Response {
    create_router().oneshot(request).await.unwrap()
}

async fn get(uri: &str) -> Response {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn is_alive_returns_ok() {
    let response = get("/internal/isAlive").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn is_ready_returns_ok() {
    let response = get("/internal/isReady").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn probes_are_plain_text_and_uncached() {
    for path in ["/internal/isAlive", "/internal/isReady"] {
        let response = get(path).await;
        let headers = response.headers();

        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    }
}

#[tokio::test]
async fn repeated_calls_are_identical() {
    for _ in 0..10 {
        let response = get("/internal/isReady").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }
}

#[tokio::test]
async fn query_parameters_are_ignored() {
    let response = get("/internal/isAlive?verbose=true&check=db").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn request_body_is_ignored() {
    let request = Request::builder()
        .uri("/internal/isReady")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"deep": true}"#))
        .unwrap();

    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn head_is_answered_without_body() {
    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/internal/isAlive")
        .body(Body::empty())
        .unwrap();

    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "");
}

#[tokio::test]
async fn post_is_not_allowed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/internal/isAlive")
        .body(Body::empty())
        .unwrap();

    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    for path in ["/", "/internal", "/internal/selftest", "/internal/isalive"] {
        let response = get(path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
    }
}

#[tokio::test]
async fn hundred_concurrent_requests_all_ok() {
    let app = create_router();

    let requests = (0..100).map(|i| {
        let path = if i % 2 == 0 {
            "/internal/isAlive"
        } else {
            "/internal/isReady"
        };
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let app = app.clone();
        tokio::spawn(async move { app.oneshot(request).await.unwrap() })
    });

    let responses = join_all(requests).await;
    assert_eq!(responses.len(), 100);

    for response in responses {
        let response = response.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }
}

//! Request ID middleware for correlating logs with requests.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the entire request lifecycle. All logs emitted during request
//! processing will include the request_id field for correlation.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID stored in request extensions.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that generates a request ID and creates a request span.
///
/// Install as the outermost layer so the span covers the fallback handler too.
/// Orchestrators poll the probes every few seconds, so completions are logged
/// at debug level.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    // Create the request span with key fields for correlation
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    // Add request ID to extensions for access in handlers if needed
    request.extensions_mut().insert(RequestId(request_id));

    // Process the request within the span
    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        // Record duration and log completion with status code
        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::debug!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn handlers_see_request_id() {
        let app = Router::new()
            .route(
                "/id",
                get(|Extension(id): Extension<RequestId>| async move { id.0.to_string() }),
            )
            .layer(middleware::from_fn(request_id_layer));

        let request = axum::http::Request::builder()
            .uri("/id")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let id = std::str::from_utf8(&body).unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }
}

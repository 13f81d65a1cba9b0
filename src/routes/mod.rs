//! HTTP route handlers.
//!
//! Probe routes live under `/internal` and carry `Cache-Control: no-store`.
//! Every other path falls through to a plain-text 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{extract::OriginalUri, middleware, routing::get, Router};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_PROBE, LIVENESS_PATH, READINESS_PATH};
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Creates the Axum router with the probe routes and request tracing.
pub fn create_router() -> Router {
    // Probes - never cached, always answered fresh
    let health_routes = Router::new()
        .route(LIVENESS_PATH, get(health::is_alive))
        .route(READINESS_PATH, get(health::is_ready))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

//! probekit: liveness and readiness probes for container orchestration.
//!
//! Serves `GET /internal/isAlive` and `GET /internal/isReady`, each answering
//! `200 ok`. The binary in `main.rs` adds configuration, logging and signal
//! handling around [`routes::create_router`].

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;

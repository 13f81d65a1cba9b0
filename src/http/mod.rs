//! HTTP server module.
//!
//! Serves plain HTTP (probes are cluster-internal, TLS terminates elsewhere)
//! with graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};

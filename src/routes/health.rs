//! Health check endpoints for container orchestration.
//!
//! Both probes answer unconditionally: a response at all means the process is
//! serving HTTP. Nothing downstream is checked, so readiness never flaps on a
//! dependency outage.

use crate::config::PROBE_RESPONSE;

/// Liveness probe handler.
///
/// Tells the orchestrator the process is running and must not be restarted.
pub async fn is_alive() -> &'static str {
    PROBE_RESPONSE
}

/// Readiness probe handler.
///
/// Tells the orchestrator the process may receive traffic.
pub async fn is_ready() -> &'static str {
    PROBE_RESPONSE
}

//! Logging setup emitting JSON lines through `tracing`.
//!
//! Events carry the fields `module`, `ev`, `code` and `dur_ms` so log lines keep
//! a single schema across the pipeline stages.

use tracing_subscriber::EnvFilter;

use crate::common::error::ErrorCode;

/// Install the global JSON subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Emit a completed-stage event matching the documented schema.
pub fn stage_done(module: &str, event: &str, dur_ms: u128) {
    tracing::info!(
        module,
        ev = event,
        code = ErrorCode::Ok as u32,
        dur_ms = dur_ms as u64
    );
}

/// Emit a failed-stage event matching the documented schema.
pub fn stage_failed(module: &str, event: &str, code: ErrorCode, dur_ms: u128) {
    tracing::error!(
        module,
        ev = event,
        code = code as u32,
        dur_ms = dur_ms as u64
    );
}

//! Runtime-applied logging settings.

use std::sync::OnceLock;

use crate::config::ServerConfig;

static SLOW_REQUEST_THRESHOLD_MS: OnceLock<u64> = OnceLock::new();

pub(super) fn apply_runtime_config(config: &ServerConfig) {
    _ = SLOW_REQUEST_THRESHOLD_MS.set(config.logging.slow_request_threshold_ms);
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS.get().copied().unwrap_or(1_000)
}

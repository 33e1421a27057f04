//! Metrics collection and Prometheus export.
//!
//! Installs the process-wide recorder and renders it for the /metrics endpoint.

use crate::error::AppError;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Must be called once at startup before any metrics are recorded. Until it
/// is, the `metrics` macros are no-ops.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("failed to install Prometheus recorder: {}", e)))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| AppError::ConfigError(anyhow::anyhow!("metrics handle already initialized")))
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

//! Metrics collection and Prometheus export.
//!
//! Installs the Prometheus recorder behind the `metrics` facade and renders
//! it for the `/metrics` endpoint.

use crate::error::AppError;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Call once at startup before any metrics are recorded. A second call
/// fails because the global recorder is already installed.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!(
            "failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    METRICS_HANDLE.set(handle).map_err(|_| {
        AppError::InternalError(anyhow::anyhow!(
            "failed to set metrics handle: already initialized"
        ))
    })
}

/// Current metrics in Prometheus text format.
pub fn render_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

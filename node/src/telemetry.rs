// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub const DEFAULT_LOG_FILTER: &str = "sheetrow_node=debug,tower_http=debug";

#[derive(thiserror::Error, Debug)]
pub enum TelemetryError {
    #[error("failed to install prometheus recorder: {0}")]
    Recorder(#[from] BuildError),
}

/// Initialize telemetry (logs + metrics)
pub fn init_telemetry() -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let handle = PrometheusBuilder::new().install_recorder()?;
    if PROM_HANDLE.set(handle).is_err() {
        tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
    }

    metrics::describe_counter!(
        "sheetrow_upstream_requests_total",
        "Calls made to the spreadsheet API, by operation"
    );
    metrics::describe_counter!(
        "sheetrow_upstream_failures_total",
        "Spreadsheet API calls that failed, by operation"
    );
    metrics::describe_histogram!(
        "sheetrow_upstream_duration_seconds",
        "Latency of spreadsheet API calls"
    );

    metrics::gauge!("sheetrow_node_up", 1.0);
    Ok(())
}

/// Get the Prometheus handle to render metrics
pub fn render_metrics() -> String {
    match PROM_HANDLE.get() {
        Some(handle) => handle.render(),
        None => "# metrics not initialized\n".to_string(),
    }
}

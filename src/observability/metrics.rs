//! Metrics collection and exposition.
//!
//! # Metrics
//! - `web_requests_total` (counter): requests by status
//! - `web_request_duration_seconds` (histogram): latency distribution
//! - `gate_decisions_total` (counter): gate outcomes (allow, redirect)
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_gate_decision(outcome: &'static str) {
    metrics::counter!("gate_decisions_total", "outcome" => outcome).increment(1);
}

pub fn record_request(status: u16, start: Instant) {
    metrics::counter!("web_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("web_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

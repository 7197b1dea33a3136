//! Metrics collection and exposition.
//!
//! # Metrics
//! - `seneca_mail_requests_total` (counter): requests served, by endpoint
//! - `seneca_mail_request_duration_seconds` (histogram): handler latency
//!
//! # Design Decisions
//! - Endpoint label values are static (`root`, `validate`, `format`)
//! - Without an installed recorder (tests), recording is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and register metric metadata.
///
/// Failure to install (e.g. the metrics port is taken) is logged and the
/// service keeps running without an exporter.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }

    describe_counter!(
        "seneca_mail_requests_total",
        "Total requests served, by endpoint"
    );
    describe_histogram!(
        "seneca_mail_request_duration_seconds",
        "Request handling latency in seconds, by endpoint"
    );
}

/// Record a served request for the given endpoint.
pub fn record_request(endpoint: &'static str, start: Instant) {
    counter!("seneca_mail_requests_total", "endpoint" => endpoint).increment(1);
    histogram!("seneca_mail_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

// Copyright (c) 2025 Press Club
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

/// Install the Prometheus exporter and register the metrics the
/// pipeline emits.
pub fn init_metrics(port: u16) {
    let builder = PrometheusBuilder::new();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = builder.with_http_listener(addr).install() {
        tracing::warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "model_calls_total",
        "Total number of model completion calls by provider and outcome"
    );
    describe_counter!(
        "model_call_retries_total",
        "Total number of retried model completion calls"
    );
    describe_histogram!(
        "model_call_duration_seconds",
        "Duration of model completion calls in seconds, retries included"
    );
    describe_counter!(
        "journalists_discovered_total",
        "Total number of journalist candidates returned by discovery"
    );
    describe_counter!(
        "link_resolutions_total",
        "Total number of article link lookups by outcome"
    );
    describe_counter!(
        "outreach_drafts_total",
        "Total number of outreach drafts by outcome"
    );

    info!("Metrics exporter listening on {}", addr);
}

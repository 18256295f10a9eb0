// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry via macros and
//! an Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::Response,
};
use prometheus::{
    Encoder, HistogramVec, IntCounterVec, TextEncoder, register_histogram_vec,
    register_int_counter_vec,
};

/// Total number of tool requests received, labeled by tool name.
pub static TOOL_REQUESTS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "tools_hub_requests_total",
        "Total number of tool requests, labeled by tool",
        &["tool"]
    )
    .expect("Failed to create tools_hub_requests_total counter vec")
});

/// Histogram for capability resolution durations in seconds.
pub static RESOLUTION_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "tools_hub_resolution_duration",
        "Capability resolution durations in seconds",
        &["capability", "result"],
        vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("Failed to create resolution duration histogram")
});

/// Increment the requests counter for a tool
///
/// # Arguments
/// * `tool` - The name of the tool endpoint
pub fn inc_tool_requests(tool: &str) {
    TOOL_REQUESTS.with_label_values(&[tool]).inc();
}

/// Observe the duration of one capability resolution
///
/// # Arguments
/// * `capability` - The name of the capability that was resolved
/// * `result` - The outcome of the resolution (success, `not_found`, exhausted)
/// * `duration_secs` - The duration of the resolution in seconds
pub fn observe_resolution_duration(capability: &str, result: &str, duration_secs: f64) {
    RESOLUTION_DURATION
        .with_label_values(&[capability, result])
        .observe(duration_secs);
}

/// Axum handler that exports metrics in Prometheus text format
///
/// # Panics
///
/// This function will panic if:
/// - The metrics encoder fails to encode the metrics data
/// - The UTF-8 conversion of the encoded buffer fails
/// - The HTTP response builder fails to create the response
pub async fn metrics_handler() -> Response<String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(String::from_utf8(buffer).expect("metrics buffer should be valid UTF-8"))
        .expect("Failed to create metrics response")
}

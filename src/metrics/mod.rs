//! Prometheus metrics for the alarm forwarder.
//!
//! Delivery is fire-and-forget, so these counters are the only way for
//! an operator to notice that alarms are silently failing to reach
//! Divera247. The host is expected to expose them on its own metrics
//! endpoint via [`encode_metrics`].

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter_vec, Encoder, Histogram, IntCounterVec, TextEncoder,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "divera";

lazy_static! {
    /// Alarms successfully forwarded, by alarm kind
    pub static ref ALARMS_FORWARDED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_alarms_forwarded_total", METRIC_PREFIX),
        "Total alarms successfully forwarded to the Divera247 API",
        &["kind"]
    ).unwrap();

    /// Delivery failures, by alarm kind and failure reason
    pub static ref DELIVERY_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_delivery_failures_total", METRIC_PREFIX),
        "Total alarm delivery failures",
        &["kind", "reason"]
    ).unwrap();

    /// Outbound request latency
    pub static ref DELIVERY_LATENCY: Histogram = register_histogram!(
        format!("{}_delivery_latency_seconds", METRIC_PREFIX),
        "Outbound request latency in seconds",
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    ).unwrap();
}

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording delivery metrics
pub struct DeliveryMetrics;

impl DeliveryMetrics {
    /// Record a successfully forwarded alarm
    pub fn record_forwarded(kind: &str) {
        ALARMS_FORWARDED_TOTAL.with_label_values(&[kind]).inc();
    }

    /// Record a delivery failure caused by a transport error
    pub fn record_transport_failure(kind: &str) {
        DELIVERY_FAILURES_TOTAL
            .with_label_values(&[kind, "transport"])
            .inc();
    }

    /// Record a delivery failure caused by a non-2xx response
    pub fn record_status_failure(kind: &str) {
        DELIVERY_FAILURES_TOTAL
            .with_label_values(&[kind, "status"])
            .inc();
    }

    /// Record the latency of one outbound request
    pub fn record_latency(seconds: f64) {
        DELIVERY_LATENCY.observe(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_metrics() {
        // lazy_static metrics register on first access
        DeliveryMetrics::record_forwarded("pocsag");

        let result = encode_metrics();
        assert!(result.is_ok());
        let output = result.unwrap();
        assert!(output.contains("divera_alarms_forwarded_total"));
    }

    #[test]
    fn test_failure_counters() {
        DeliveryMetrics::record_transport_failure("fms");
        DeliveryMetrics::record_status_failure("fms");
        DeliveryMetrics::record_latency(0.1);

        let failures = DELIVERY_FAILURES_TOTAL.with_label_values(&["fms", "transport"]);
        assert!(failures.get() >= 1);
    }
}

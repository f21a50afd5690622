//! The fixed set of values a report consumes.

use super::document::Summary;

/// One `metrics[metric][statistic]` lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricKey {
    pub metric: &'static str,
    pub statistic: &'static str,
}

impl MetricKey {
    const fn new(metric: &'static str, statistic: &'static str) -> Self {
        Self { metric, statistic }
    }
}

/// Average request latency, ms.
pub const LATENCY_AVG: MetricKey = MetricKey::new("http_req_duration", "avg");
/// 90th-percentile request latency, ms.
pub const LATENCY_P90: MetricKey = MetricKey::new("http_req_duration", "p(90)");
/// 95th-percentile request latency, ms.
pub const LATENCY_P95: MetricKey = MetricKey::new("http_req_duration", "p(95)");
/// Requests per second.
pub const REQUEST_RATE: MetricKey = MetricKey::new("http_reqs", "rate");
/// Fraction of failed requests, 0.0..=1.0.
pub const FAILURE_RATE: MetricKey = MetricKey::new("http_req_failed", "rate");

/// Value used for anything the summary does not carry.
pub const MISSING_VALUE: f64 = 0.0;

/// Values rendered into the report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadTestMetrics {
    pub requests_per_sec: f64,
    /// Already scaled to a percentage.
    pub failure_rate_pct: f64,
    pub avg_ms: f64,
    pub p90_ms: f64,
    pub p95_ms: f64,
}

impl LoadTestMetrics {
    pub fn from_summary(summary: &Summary) -> Self {
        let get = |key: MetricKey| summary.extract(key.metric, key.statistic, MISSING_VALUE);

        let metrics = Self {
            requests_per_sec: get(REQUEST_RATE),
            failure_rate_pct: get(FAILURE_RATE) * 100.0,
            avg_ms: get(LATENCY_AVG),
            p90_ms: get(LATENCY_P90),
            p95_ms: get(LATENCY_P95),
        };
        tracing::debug!(?metrics, "metrics extracted");
        metrics
    }
}

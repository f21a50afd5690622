//! Markdown report rendering.
//!
//! Rendering is pure and deterministic: one fixed layout, every value with
//! exactly two decimals. `{:.2}` rounds the exact binary value, ties to even.

use crate::summary::metrics::LoadTestMetrics;

/// Attribution line closing every report.
pub const FOOTER: &str = "<sub>Generated automatically by k6 during CI</sub>";

pub fn render_markdown(m: &LoadTestMetrics) -> String {
    format!(
        "## CI Load Test Results\n\
         \n\
         ### Throughput & Reliability\n\
         - **Requests/sec:** {rps:.2}\n\
         - **Failure rate:** {fail:.2}%\n\
         \n\
         ### Latency (ms)\n\
         - **Average:** {avg:.2}\n\
         - **p90:** {p90:.2}\n\
         - **p95:** {p95:.2}\n\
         \n\
         {FOOTER}\n",
        rps = m.requests_per_sec,
        fail = m.failure_rate_pct,
        avg = m.avg_ms,
        p90 = m.p90_ms,
        p95 = m.p95_ms,
    )
}

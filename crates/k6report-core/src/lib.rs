//! k6report core: summary model, metric extraction, and markdown rendering.
//!
//! This crate does no I/O. It turns `summary.json` text into a report string;
//! reading and writing files belongs to the `k6report` binary crate.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed input
//! surfaces as `ReportError`, and missing metrics fall back to zero.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod render;
pub mod summary;

/// Shared result type.
pub use error::{ErrorKind, Result, ReportError};
pub use render::render_markdown;
pub use summary::document::Summary;
pub use summary::metrics::LoadTestMetrics;

/// Parse summary text and render the report in one step.
pub fn report_from_json_str(s: &str) -> Result<String> {
    let summary = Summary::from_json_str(s)?;
    Ok(render_markdown(&LoadTestMetrics::from_summary(&summary)))
}

//! k6report library entry.
//!
//! File-system side of the report formatter: fixed paths, reading
//! `summary.json`, writing `report.md` and echoing it to stdout. Used by the
//! binary (`main.rs`) and by integration tests.

pub mod config;
pub mod pipeline;

pub use config::ReportPaths;
pub use pipeline::{emit, load_summary, run};

//! k6report
//!
//! Reads `summary.json` from a k6 run and writes a markdown summary of
//! throughput, failure rate, and latency to `report.md` and stdout.
//! Diagnostics go to stderr, filtered by `RUST_LOG`.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use k6report::{config::ReportPaths, pipeline};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let paths = ReportPaths::default();
    let mut stdout = std::io::stdout().lock();

    match pipeline::run(&paths, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.kind().as_str(), error = %e, "k6report failed");
            ExitCode::FAILURE
        }
    }
}

//! Load -> extract -> format -> emit.
//!
//! Everything before `emit` is side-effect free, so a bad summary never
//! touches the output file.

use std::fs;
use std::io::Write;
use std::path::Path;

use k6report_core::error::{ReportError, Result};
use k6report_core::{render_markdown, LoadTestMetrics, Summary};

use crate::config::ReportPaths;

/// Read and parse the summary file.
pub fn load_summary(path: &Path) -> Result<Summary> {
    let s = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = s.len(), "summary read");
    Summary::from_json_str(&s)
}

/// Overwrite `output` with the report, then echo it to `stdout`.
pub fn emit(report: &str, output: &Path, stdout: &mut impl Write) -> Result<()> {
    fs::write(output, report).map_err(|source| ReportError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %output.display(), bytes = report.len(), "report written");

    writeln!(stdout, "{report}")
        .and_then(|()| stdout.flush())
        .map_err(|source| ReportError::Write {
            path: "<stdout>".into(),
            source,
        })
}

/// Run the whole pipeline once. Returns the rendered report.
pub fn run(paths: &ReportPaths, stdout: &mut impl Write) -> Result<String> {
    let summary = load_summary(&paths.summary)?;
    let metrics = LoadTestMetrics::from_summary(&summary);
    let report = render_markdown(&metrics);
    emit(&report, &paths.output, stdout)?;
    Ok(report)
}

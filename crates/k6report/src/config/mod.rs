//! Fixed input/output locations.
//!
//! The binary always runs with `ReportPaths::default()`: `summary.json` in,
//! `report.md` out, both relative to the working directory. Neither CLI
//! flags nor the environment change them.

use std::path::{Path, PathBuf};

pub const SUMMARY_FILE: &str = "summary.json";
pub const OUTPUT_FILE: &str = "report.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub output: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            summary: PathBuf::from(SUMMARY_FILE),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl ReportPaths {
    /// Same file names, rooted at `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            summary: dir.join(SUMMARY_FILE),
            output: dir.join(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_relative() {
        let p = ReportPaths::default();
        assert_eq!(p.summary, Path::new("summary.json"));
        assert_eq!(p.output, Path::new("report.md"));
    }

    #[test]
    fn in_dir_keeps_file_names() {
        let p = ReportPaths::in_dir("/tmp/ci");
        assert_eq!(p.summary, Path::new("/tmp/ci/summary.json"));
        assert_eq!(p.output, Path::new("/tmp/ci/report.md"));
    }
}

//! Shared error type across k6report crates.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Stable error codes, used as log fields and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Summary file missing or unreadable.
    ReadFailed,
    /// Summary file is not a usable JSON document.
    MalformedSummary,
    /// Report could not be written.
    WriteFailed,
}

impl ErrorKind {
    /// String representation used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ReadFailed => "READ_FAILED",
            ErrorKind::MalformedSummary => "MALFORMED_SUMMARY",
            ErrorKind::WriteFailed => "WRITE_FAILED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Unified error type used by core and the binary.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed summary: {0}")]
    Malformed(String),
    #[error("write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::Read { .. } => ErrorKind::ReadFailed,
            ReportError::Malformed(_) => ErrorKind::MalformedSummary,
            ReportError::Write { .. } => ErrorKind::WriteFailed,
        }
    }
}

//! Parsed k6 summary document.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ReportError, Result};

/// Top-level summary document.
///
/// Only `metrics` is read. k6 also writes `root_group`, `options` and
/// `state`; those are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Summary {
    /// metric name -> { statistic name -> number }
    #[serde(default)]
    pub metrics: Map<String, Value>,
}

impl Summary {
    /// Parse a summary from JSON text.
    ///
    /// Fails if the text is not JSON, the root is not an object, or
    /// `metrics` is present but not an object.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let summary: Summary = serde_json::from_str(s)
            .map_err(|e| ReportError::Malformed(format!("invalid json: {e}")))?;
        tracing::debug!(metrics = summary.metrics.len(), "summary parsed");
        Ok(summary)
    }

    /// Look up `metrics[metric][statistic]`, or `default` when any level is
    /// absent or the statistic is not a number.
    pub fn extract(&self, metric: &str, statistic: &str, default: f64) -> f64 {
        self.metrics
            .get(metric)
            .and_then(|stats| stats.get(statistic))
            .and_then(Value::as_f64)
            .unwrap_or(default)
    }
}

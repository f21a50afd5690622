//! k6 summary document model.
//!
//! - `document`: the parsed `summary.json` and the nested lookup with defaults.
//! - `metrics`: the fixed set of values the report consumes.
//!
//! Lookups never fail. Anything missing or oddly shaped inside `metrics`
//! falls back to the caller's default, so a sparse summary still renders.

pub mod document;
pub mod metrics;

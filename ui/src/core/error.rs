//! Error types for dataset loading and result exports.

use thiserror::Error;

/// Raised while loading the embedded benchmark catalog.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("embedded dataset `{0}` is missing")]
    MissingResource(String),

    #[error("dataset `{name}` could not be parsed: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset `{dataset}`, category `{category}`: {problem}")]
    InvalidSummary {
        dataset: String,
        category: String,
        problem: SummaryProblem,
    },

    #[error("dataset `{dataset}` has an invalid chart preset: {reason}")]
    InvalidPreset { dataset: String, reason: String },

    #[error("dataset `{0}` has no entries")]
    EmptySeries(String),
}

/// A broken invariant on a single [`StatSummary`](super::summary::StatSummary).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryProblem {
    #[error("`{field}` must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("quartiles out of order: min {min} ≤ q1 {q1} ≤ median {median} ≤ q3 {q3} ≤ max {max} does not hold")]
    OutOfOrder {
        min: f64,
        q1: f64,
        median: f64,
        q3: f64,
        max: f64,
    },

    #[error("sample size must be at least 1")]
    EmptySample,
}

/// Failures surfaced by the export panel.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("could not serialise data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("could not write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to determine export directory")]
    ExportDir,

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("browser API failed: {0}")]
    Browser(&'static str),
}

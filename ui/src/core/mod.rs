//! Platform-agnostic building blocks: statistics records, chart geometry,
//! derived metrics, layout policy and the viewport subscription plumbing.

pub mod bars;
pub mod boxplot;
pub mod error;
pub mod format;
pub mod layout;
pub mod marginal;
pub mod platform;
pub mod summary;
pub mod svg;
pub mod viewport;

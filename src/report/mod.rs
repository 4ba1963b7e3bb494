//! Reporting utilities: single-point evaluations and family summaries.

pub mod format;

pub use format::*;

//! Mathematical utilities: table-driven power series.

pub mod power_series;

pub use power_series::*;

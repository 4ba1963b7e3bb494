//! Terminal plots of open-water curve families.

pub mod ascii;

pub use ascii::*;

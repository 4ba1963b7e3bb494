//! Open-water sweeps over the B-series regression.
//!
//! Everything here is a *consumer* of `models::kt` / `models::kq`: grids of
//! advance ratio and pitch ratio, truncation of the curves where they stop
//! being physical, and the derived open-water efficiency.

pub mod curve;
pub mod grid;

pub use curve::*;
pub use grid::*;

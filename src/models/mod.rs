//! Propeller open-water models.
//!
//! Models are implemented as small, pure functions over constant tables so that
//! sweeps, reports and plots can call them freely.

pub mod wageningen;

pub use wageningen::*;

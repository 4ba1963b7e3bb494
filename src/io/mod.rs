//! Input/output helpers.
//!
//! - curve point exports (CSV) (`export`)
//! - curve family JSON read/write (`family`)

pub mod export;
pub mod family;

pub use export::*;
pub use family::*;

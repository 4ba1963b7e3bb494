//! `bseries` library crate.
//!
//! Evaluates the Wageningen B-series open-water regressions (KT, KQ) and
//! sweeps them into curve families for reports, plots and the TUI.
//!
//! The binary (`bseries`) is a thin wrapper around this library so that:
//!
//! - the regression is usable without the CLI
//! - core logic is testable without spawning processes

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod sweep;
pub mod tui;

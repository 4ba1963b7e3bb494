//! Command-line parsing for the B-series open-water tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the regression and sweep code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Series;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "bseries",
    version,
    about = "Wageningen B-series propeller KT/KQ open-water curves"
)]
pub struct Cli {
    /// Log sweep details to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate KT, KQ and efficiency at a single operating point.
    Eval(EvalArgs),
    /// Sweep a family of open-water curves, print a summary and optionally plot/export.
    Sweep(SweepArgs),
    /// Plot a previously exported family JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same sweep pipeline as `bseries sweep`, but renders the
    /// curves in a terminal UI using Ratatui.
    Tui(SweepArgs),
}

/// Options for a single-point evaluation.
#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    /// Advance ratio J = v / nD.
    #[arg(short = 'j', long, allow_negative_numbers = true)]
    pub j: f64,

    /// Pitch-to-diameter ratio P/D.
    #[arg(short = 'p', long)]
    pub pd: f64,

    /// Expanded blade area ratio Ae/Ao.
    #[arg(short = 'a', long)]
    pub ar: f64,

    /// Number of blades.
    #[arg(short = 'z', long)]
    pub z: f64,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Common options for sweeping.
#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    /// Expanded blade area ratio Ae/Ao.
    #[arg(short = 'a', long, default_value_t = 1.05)]
    pub ar: f64,

    /// Number of blades.
    #[arg(short = 'z', long, default_value_t = 7.0)]
    pub z: f64,

    /// First advance ratio of the sweep.
    #[arg(long, default_value_t = 0.0)]
    pub j_min: f64,

    /// Advance ratio upper bound (exclusive).
    #[arg(long, default_value_t = 1.4)]
    pub j_max: f64,

    /// Advance ratio step.
    #[arg(long, default_value_t = 0.001)]
    pub j_step: f64,

    /// First pitch ratio of the family.
    #[arg(long, default_value_t = 0.5)]
    pub pd_min: f64,

    /// Pitch ratio upper bound (exclusive).
    #[arg(long, default_value_t = 1.5)]
    pub pd_max: f64,

    /// Pitch ratio step.
    #[arg(long, default_value_t = 0.1)]
    pub pd_step: f64,

    /// Series to plot.
    #[arg(long, value_enum, default_value_t = Series::Kt)]
    pub series: Series,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Lower y-axis limit.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y_min: f64,

    /// Upper y-axis limit.
    #[arg(long, default_value_t = 0.8)]
    pub y_max: f64,

    /// Fit the y-axis to the data instead of using --y-min/--y-max.
    #[arg(long)]
    pub auto_y: bool,

    /// Export every curve point to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the curve family to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for plotting a saved family.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Family JSON file produced by `bseries sweep --export-json`.
    #[arg(long, value_name = "JSON")]
    pub family: PathBuf,

    /// Series to plot.
    #[arg(long, value_enum, default_value_t = Series::Kt)]
    pub series: Series,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_parses_short_flags() {
        let cli = Cli::parse_from(["bseries", "eval", "-j", "0.6", "-p", "1.0", "-a", "0.65", "-z", "4"]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!((args.j, args.pd, args.ar, args.z), (0.6, 1.0, 0.65, 4.0));
        assert!(!args.json);
    }

    #[test]
    fn sweep_defaults() {
        let cli = Cli::parse_from(["bseries", "sweep"]);
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        assert_eq!(args.ar, 1.05);
        assert_eq!(args.z, 7.0);
        assert_eq!(args.series, Series::Kt);
        assert!(args.plot && !args.no_plot);
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["bseries", "sweep", "-v", "--series", "eta"]);
        assert!(cli.verbose);
    }
}

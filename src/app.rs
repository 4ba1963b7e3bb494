//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs the log subscriber
//! - evaluates single points or sweeps curve families
//! - prints reports/plots
//! - writes optional exports

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, EvalArgs, PlotArgs, SweepArgs};
use crate::domain::{Geometry, GridSpec, OperatingPoint, SweepConfig};
use crate::error::{AppError, EXIT_RUNTIME};

pub mod pipeline;

/// Entry point for the `bseries` binary.
pub fn run() -> Result<(), AppError> {
    // We want `bseries` and `bseries -a 0.55` to behave like `bseries tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    // The TUI owns the terminal; it reports through its status line instead.
    if !matches!(cli.command, Command::Tui(_)) {
        init_tracing(cli.verbose);
    }

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Sweep(args) => handle_sweep(args),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let point = OperatingPoint::new(args.j, args.pd, args.ar, args.z);
    for warning in point.domain_warnings() {
        tracing::warn!("outside the B-series regression domain: {warning}");
    }

    tracing::debug!(
        kt_table = %crate::models::KT_TABLE,
        kq_table = %crate::models::KQ_TABLE,
        "evaluating single point"
    );

    let eval = crate::report::PointEvaluation::at(point);
    if args.json {
        let json = serde_json::to_string_pretty(&eval)
            .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to serialize result: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_point_summary(&eval));
    }
    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = sweep_config_from_args(&args);
    let run = pipeline::run_sweep(&config)?;

    println!("{}", crate::report::format_family_summary(&run.family, run.j_count));

    if config.plot {
        let plot = crate::plot::render_family_plot(
            &run.family,
            config.series,
            config.plot_width,
            config.plot_height,
            config.y_range,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::write_family_csv(path, &run.family)?;
        tracing::info!(path = %path.display(), "wrote curve CSV");
    }
    if let Some(path) = &args.export_json {
        crate::io::write_family_json(path, &run.family)?;
        tracing::info!(path = %path.display(), "wrote family JSON");
    }

    Ok(())
}

fn handle_tui(args: SweepArgs) -> Result<(), AppError> {
    crate::tui::run(sweep_config_from_args(&args))
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_family_json(&args.family)?;
    let plot = crate::plot::render_family_plot(&file.family, args.series, args.width, args.height, None);
    println!("{plot}");
    Ok(())
}

pub fn sweep_config_from_args(args: &SweepArgs) -> SweepConfig {
    SweepConfig {
        geometry: Geometry {
            ar: args.ar,
            z: args.z,
        },
        j_grid: GridSpec {
            start: args.j_min,
            stop: args.j_max,
            step: args.j_step,
        },
        pd_grid: GridSpec {
            start: args.pd_min,
            stop: args.pd_max,
            step: args.pd_step,
        },
        series: args.series,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        y_range: if args.auto_y {
            None
        } else {
            Some((args.y_min, args.y_max))
        },
    }
}

/// Rewrite argv so `bseries` defaults to `bseries tui`.
///
/// Rules:
/// - `bseries`                      -> `bseries tui`
/// - `bseries -a 0.55 ...`          -> `bseries tui -a 0.55 ...`
/// - `bseries --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "eval" | "sweep" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(argv(&["bseries"])), argv(&["bseries", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["bseries", "-a", "0.55"])),
            argv(&["bseries", "tui", "-a", "0.55"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for args in [&["bseries", "sweep"][..], &["bseries", "--help"], &["bseries", "eval", "-j", "0.5"]] {
            assert_eq!(rewrite_args(argv(args)), argv(args));
        }
    }

    #[test]
    fn sweep_config_honours_no_plot_and_auto_y() {
        let cli = crate::cli::Cli::parse_from(["bseries", "sweep", "--no-plot", "--auto-y", "-z", "4"]);
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        let config = sweep_config_from_args(&args);
        assert!(!config.plot);
        assert_eq!(config.y_range, None);
        assert_eq!(config.geometry.z, 4.0);
    }

    #[test]
    fn default_sweep_args_match_default_config() {
        let cli = crate::cli::Cli::parse_from(["bseries", "sweep"]);
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        assert_eq!(sweep_config_from_args(&args), SweepConfig::default());
    }
}

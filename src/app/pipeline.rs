//! Shared "sweep pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! config -> grids -> per-pitch open-water curves
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::domain::{CurveFamily, OperatingPoint, SweepConfig};
use crate::error::AppError;
use crate::sweep::{grid_values, open_water_family};

/// All computed outputs of a single sweep.
#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub family: CurveFamily,
    /// Number of advance ratios evaluated per curve.
    pub j_count: usize,
    /// Advisories for grid corners outside the regression domain.
    pub domain_warnings: Vec<String>,
}

/// Execute the sweep and return the computed family.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepOutput, AppError> {
    let geometry = config.geometry;
    if !(geometry.ar.is_finite() && geometry.z.is_finite()) {
        return Err(AppError::input(format!(
            "Invalid geometry: Ae/Ao={}, Z={} (must be finite).",
            geometry.ar, geometry.z
        )));
    }

    // 1) Grids.
    let js = grid_values(&config.j_grid)?;
    let pds = grid_values(&config.pd_grid)?;

    // 2) Advisory domain check on the grid corners (the regression is evaluated regardless).
    let mut domain_warnings = Vec::new();
    if let (Some(&pd_lo), Some(&pd_hi), Some(&j_lo)) = (pds.first(), pds.last(), js.first()) {
        for pd in [pd_lo, pd_hi] {
            for warning in OperatingPoint::new(j_lo, pd, geometry.ar, geometry.z).domain_warnings() {
                if !domain_warnings.contains(&warning) {
                    domain_warnings.push(warning);
                }
            }
        }
    }
    for warning in &domain_warnings {
        tracing::warn!("outside the B-series regression domain: {warning}");
    }

    // 3) Curves.
    tracing::debug!(
        ar = geometry.ar,
        z = geometry.z,
        j_points = js.len(),
        curves = pds.len(),
        "sweeping open-water family"
    );
    let family = open_water_family(geometry, config.j_grid, &js, &pds);

    Ok(SweepOutput {
        family,
        j_count: js.len(),
        domain_warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Geometry, GridSpec};

    #[test]
    fn default_sweep_produces_ten_curves() {
        let out = run_sweep(&SweepConfig::default()).unwrap();
        assert_eq!(out.family.curves.len(), 10);
        assert_eq!(out.j_count, 1400);
        assert!(out.domain_warnings.is_empty());
    }

    #[test]
    fn out_of_domain_geometry_warns_but_sweeps() {
        let config = SweepConfig {
            geometry: Geometry { ar: 1.2, z: 8.0 },
            ..SweepConfig::default()
        };
        let out = run_sweep(&config).unwrap();
        assert_eq!(out.family.curves.len(), 10);
        assert_eq!(out.domain_warnings.len(), 2, "{:?}", out.domain_warnings);
    }

    #[test]
    fn bad_grid_is_an_input_error() {
        let config = SweepConfig {
            j_grid: GridSpec {
                start: 0.0,
                stop: 1.4,
                step: 0.0,
            },
            ..SweepConfig::default()
        };
        let err = run_sweep(&config).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let config = SweepConfig {
            geometry: Geometry { ar: f64::NAN, z: 4.0 },
            ..SweepConfig::default()
        };
        assert!(run_sweep(&config).is_err());
    }
}

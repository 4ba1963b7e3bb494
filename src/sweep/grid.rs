//! Sweep grid generation.
//!
//! Grids are computed as `start + i * step` rather than by repeated addition, so
//! the i-th value does not depend on rounding in the values before it.

use crate::domain::GridSpec;
use crate::error::AppError;

/// Upper bound on grid length, to catch a mistyped step before allocating.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Values `start, start + step, ...` strictly below `stop`.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, AppError> {
    if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
        return Err(AppError::input(format!(
            "Invalid grid: start={start}, stop={stop}, step={step} (must be finite)."
        )));
    }
    if step <= 0.0 {
        return Err(AppError::input(format!("Grid step must be > 0 (got {step}).")));
    }
    if stop <= start {
        return Err(AppError::input(format!(
            "Empty grid: stop={stop} must be greater than start={start}."
        )));
    }

    let count = ((stop - start) / step).ceil();
    if count > MAX_GRID_POINTS as f64 {
        return Err(AppError::input(format!(
            "Grid too large: {count} points (max {MAX_GRID_POINTS})."
        )));
    }
    let count = count as usize;

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(start + step * i as f64);
    }
    Ok(out)
}

/// Expand a [`GridSpec`] with [`arange`].
pub fn grid_values(grid: &GridSpec) -> Result<Vec<f64>, AppError> {
    arange(grid.start, grid.stop, grid.step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arange_excludes_stop() {
        let v = arange(0.5, 1.5, 0.1).unwrap();
        assert_eq!(v.len(), 10);
        assert_eq!(v[0], 0.5);
        assert!((v[9] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn arange_default_advance_grid_has_1400_points() {
        let v = arange(0.0, 1.4, 0.001).unwrap();
        assert_eq!(v.len(), 1400);
        assert_eq!(v[0], 0.0);
        assert!(v[1399] < 1.4);
    }

    #[test]
    fn arange_rejects_bad_input() {
        assert!(arange(0.0, 1.0, 0.0).is_err());
        assert!(arange(0.0, 1.0, -0.1).is_err());
        assert!(arange(1.0, 1.0, 0.1).is_err());
        assert!(arange(f64::NAN, 1.0, 0.1).is_err());
        assert!(arange(0.0, 1.0, 1e-12).is_err());
    }
}

//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - coefficient and series selectors (`Coefficient`, `Series`)
//! - operating points and the fitted regression domain (`OperatingPoint`, `DomainLimits`)
//! - sweep configuration and outputs (`SweepConfig`, `OpenWaterCurve`, `CurveFamily`)

pub mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_domain_point_has_no_warnings() {
        let p = OperatingPoint::new(0.6, 1.0, 0.65, 4.0);
        assert!(p.domain_warnings().is_empty());
    }

    #[test]
    fn bollard_point_is_in_domain() {
        let p = OperatingPoint::new(0.0, 1.0, 0.65, 4.0);
        assert!(p.domain_warnings().is_empty());
    }

    #[test]
    fn every_out_of_domain_input_is_reported() {
        let p = OperatingPoint::new(-0.1, 1.6, 0.2, 9.0);
        let warnings = p.domain_warnings();
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert!(warnings[1].starts_with("P/D=1.6"));
    }

    #[test]
    fn nan_inputs_are_reported() {
        let p = OperatingPoint::new(f64::NAN, 1.0, 0.65, 4.0);
        assert_eq!(p.domain_warnings().len(), 1);
    }

    #[test]
    fn warnings_do_not_change_evaluation() {
        let p = OperatingPoint::new(1.2, 1.6, 1.2, 8.0);
        assert!(!p.domain_warnings().is_empty());
        assert_eq!(p.kt(), crate::models::kt(1.2, 1.6, 1.2, 8.0));
    }

    #[test]
    fn series_cycle_visits_all() {
        let mut s = Series::Kt;
        for expected in [Series::Kq, Series::Eta, Series::Kt] {
            s = s.next();
            assert_eq!(s, expected);
        }
    }
}

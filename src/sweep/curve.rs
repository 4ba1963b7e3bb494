//! Open-water curves: KT, KQ and efficiency against advance ratio.
//!
//! The regression polynomials keep going past the point where the propeller
//! stops producing thrust. A curve is therefore cut per series:
//!
//! - `KT` keeps the points with `KT >= 0`
//! - `KQ` keeps the points with `KQ >= 0`
//! - `η0` keeps the points with `KT >= 0` and `KQ > 0`
//!
//! Every kept point carries its own `J`, so a series with a gap still plots
//! against the right abscissa.

use std::f64::consts::PI;

use crate::domain::{CurveFamily, CurvePoint, Geometry, GridSpec, OpenWaterCurve};
use crate::models::{kq, kt};

/// Open-water efficiency `η0 = KT·J / (2π·KQ)`.
///
/// Plain arithmetic: `KQ = 0` yields an infinity or NaN, like any division.
pub fn open_water_efficiency(j: f64, kt: f64, kq: f64) -> f64 {
    kt * j / (2.0 * PI * kq)
}

/// Legend label for a pitch ratio, rounded up to one decimal.
///
/// The small offset keeps grid noise such as `1.4000000000000001` from rounding
/// up to the next tenth.
pub fn legend_label(pd: f64) -> String {
    let rounded = ((10.0 * pd) - 1e-9).ceil() / 10.0;
    format!("P/D = {rounded:.1}")
}

/// Evaluate one open-water curve at fixed pitch ratio and geometry.
pub fn open_water_curve(pd: f64, geometry: Geometry, js: &[f64]) -> OpenWaterCurve {
    let mut kt_points = Vec::with_capacity(js.len());
    let mut kq_points = Vec::with_capacity(js.len());
    let mut eta_points = Vec::with_capacity(js.len());
    let mut kt_zero_crossing = None;

    for &j in js {
        let kt_value = kt(j, pd, geometry.ar, geometry.z);
        let kq_value = kq(j, pd, geometry.ar, geometry.z);

        if kt_value >= 0.0 {
            kt_points.push(CurvePoint { j, value: kt_value });
            if kq_value > 0.0 {
                eta_points.push(CurvePoint {
                    j,
                    value: open_water_efficiency(j, kt_value, kq_value),
                });
            }
        } else if kt_zero_crossing.is_none() {
            kt_zero_crossing = Some(j);
        }

        if kq_value >= 0.0 {
            kq_points.push(CurvePoint { j, value: kq_value });
        }
    }

    OpenWaterCurve {
        pd,
        label: legend_label(pd),
        kt: kt_points,
        kq: kq_points,
        eta: eta_points,
        kt_zero_crossing,
    }
}

/// One curve per pitch ratio, all over the same advance-ratio grid.
pub fn open_water_family(
    geometry: Geometry,
    j_grid: GridSpec,
    js: &[f64],
    pds: &[f64],
) -> CurveFamily {
    let curves = pds
        .iter()
        .map(|&pd| {
            let curve = open_water_curve(pd, geometry, js);
            tracing::debug!(
                pd,
                kt_points = curve.kt.len(),
                kq_points = curve.kq.len(),
                kt_zero_crossing = ?curve.kt_zero_crossing,
                "open-water curve"
            );
            curve
        })
        .collect();

    CurveFamily {
        geometry,
        j_grid,
        curves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::arange;

    const GEOMETRY: Geometry = Geometry { ar: 0.65, z: 4.0 };

    fn js() -> Vec<f64> {
        arange(0.0, 1.4, 0.001).unwrap()
    }

    #[test]
    fn efficiency_formula() {
        let eta = open_water_efficiency(0.6, 0.22517810158256016, 0.037049442847488005);
        let expected = 0.22517810158256016 * 0.6 / (2.0 * PI * 0.037049442847488005);
        assert_eq!(eta, expected);
        assert!((eta - 0.5804).abs() < 1e-3, "eta={eta}");
    }

    #[test]
    fn efficiency_is_zero_at_bollard() {
        assert_eq!(open_water_efficiency(0.0, 0.44, 0.065), 0.0);
    }

    #[test]
    fn kt_series_stops_at_zero_crossing() {
        let curve = open_water_curve(1.0, GEOMETRY, &js());
        let crossing = curve.kt_zero_crossing.expect("KT should cross zero before J=1.4");
        assert!((crossing - 1.07).abs() < 1e-9, "crossing={crossing}");
        assert!(curve.kt.iter().all(|p| p.value >= 0.0 && p.j < crossing));
        assert_eq!(curve.kt.len(), 1070);
    }

    #[test]
    fn kq_outlives_kt() {
        let curve = open_water_curve(1.0, GEOMETRY, &js());
        assert!(curve.kq.len() > curve.kt.len());
        assert!(curve.kq.iter().all(|p| p.value >= 0.0));
    }

    #[test]
    fn eta_points_pair_with_kt_points() {
        let curve = open_water_curve(1.0, GEOMETRY, &js());
        assert_eq!(curve.eta.len(), curve.kt.len());
        for (e, t) in curve.eta.iter().zip(&curve.kt) {
            assert_eq!(e.j, t.j);
        }
        let peak = curve.peak_eta().unwrap();
        assert!(peak.value > 0.5 && peak.value < 0.8, "peak={peak:?}");
        assert!(peak.j > 0.6 && peak.j < 1.07, "peak={peak:?}");
    }

    #[test]
    fn curve_values_match_direct_evaluation() {
        let js = [0.0, 0.3, 0.6];
        let curve = open_water_curve(0.9, GEOMETRY, &js);
        for (p, &j) in curve.kt.iter().zip(&js) {
            assert_eq!(p.j, j);
            assert_eq!(p.value, kt(j, 0.9, 0.65, 4.0));
        }
    }

    #[test]
    fn high_pitch_never_crosses_in_range() {
        let geometry = Geometry { ar: 1.05, z: 7.0 };
        let curve = open_water_curve(1.4, geometry, &js());
        assert_eq!(curve.kt_zero_crossing, None);
        assert_eq!(curve.kt.len(), 1400);
    }

    #[test]
    fn legend_labels_round_up_to_one_decimal() {
        assert_eq!(legend_label(0.5), "P/D = 0.5");
        assert_eq!(legend_label(0.7999999999999999), "P/D = 0.8");
        assert_eq!(legend_label(1.4000000000000001), "P/D = 1.4");
        assert_eq!(legend_label(0.83), "P/D = 0.9");
    }

    #[test]
    fn family_has_one_curve_per_pitch() {
        let pds = arange(0.5, 1.5, 0.1).unwrap();
        let grid = GridSpec {
            start: 0.0,
            stop: 1.4,
            step: 0.01,
        };
        let js = arange(grid.start, grid.stop, grid.step).unwrap();
        let family = open_water_family(Geometry { ar: 1.05, z: 7.0 }, grid, &js, &pds);
        assert_eq!(family.curves.len(), 10);
        assert_eq!(family.curves[0].label, "P/D = 0.5");
        assert_eq!(family.curves[9].label, "P/D = 1.4");
        // Higher pitch -> more thrust at bollard.
        for pair in family.curves.windows(2) {
            assert!(pair[1].kt[0].value > pair[0].kt[0].value);
        }
    }
}

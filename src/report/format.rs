//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the regression and sweep code stays clean and testable
//! - output changes are localized (checked by golden-string tests below)

use serde::Serialize;

use crate::domain::{CurveFamily, OperatingPoint};
use crate::sweep::open_water_efficiency;

/// KT, KQ and efficiency at one operating point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointEvaluation {
    pub point: OperatingPoint,
    pub kt: f64,
    pub kq: f64,
    pub eta: f64,
    pub domain_warnings: Vec<String>,
}

impl PointEvaluation {
    pub fn at(point: OperatingPoint) -> Self {
        let kt = point.kt();
        let kq = point.kq();
        Self {
            point,
            kt,
            kq,
            eta: open_water_efficiency(point.j, kt, kq),
            domain_warnings: point.domain_warnings(),
        }
    }
}

/// Format a single-point evaluation.
pub fn format_point_summary(eval: &PointEvaluation) -> String {
    let p = &eval.point;
    let mut out = String::new();

    out.push_str("=== Wageningen B-series ===\n");
    out.push_str(&format!(
        "J={} | P/D={} | Ae/Ao={} | Z={}\n",
        p.j, p.pd, p.ar, p.z
    ));
    out.push_str(&format!("KT   = {:.6}\n", eval.kt));
    out.push_str(&format!("KQ   = {:.6}\n", eval.kq));
    out.push_str(&format!("10KQ = {:.6}\n", 10.0 * eval.kq));
    out.push_str(&format!("eta0 = {:.6}\n", eval.eta));

    if !eval.domain_warnings.is_empty() {
        out.push_str("\nOutside the regression domain (extrapolated):\n");
        for w in &eval.domain_warnings {
            out.push_str(&format!("- {w}\n"));
        }
    }

    out
}

/// Format one summary row per curve of a family.
pub fn format_family_summary(family: &CurveFamily, j_count: usize) -> String {
    let mut out = String::new();

    out.push_str("=== Wageningen B-series open-water curves ===\n");
    out.push_str(&format!(
        "Ae/Ao={} | Z={} | J=[{}, {}) step {} ({j_count} points)\n\n",
        family.geometry.ar,
        family.geometry.z,
        family.j_grid.start,
        family.j_grid.stop,
        family.j_grid.step,
    ));

    out.push_str(
        format!(
            "{:<10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
            "curve", "KT(0)", "10KQ(0)", "J(KT=0)", "eta_max", "J(eta_max)"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<10} {:-<10} {:-<10} {:-<10} {:-<10} {:-<10}\n",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for curve in &family.curves {
        let kt0 = curve.kt.first().map(|p| fmt_num(p.value)).unwrap_or_else(dash);
        let kq0 = curve.kq.first().map(|p| fmt_num(10.0 * p.value)).unwrap_or_else(dash);
        let crossing = curve.kt_zero_crossing.map(fmt_j).unwrap_or_else(dash);
        let (eta_max, eta_j) = curve
            .peak_eta()
            .map(|p| (fmt_num(p.value), fmt_j(p.j)))
            .unwrap_or_else(|| (dash(), dash()));

        out.push_str(
            format!(
                "{:<10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
                truncate(curve.label.trim_start_matches("P/D = "), 10),
                kt0,
                kq0,
                crossing,
                eta_max,
                eta_j
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn fmt_num(v: f64) -> String {
    format!("{v:.4}")
}

fn fmt_j(v: f64) -> String {
    format!("{v:.3}")
}

fn dash() -> String {
    "-".to_string()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurvePoint, Geometry, GridSpec, OpenWaterCurve};

    #[test]
    fn point_summary_golden() {
        let eval = PointEvaluation::at(OperatingPoint::new(0.6, 1.0, 0.65, 4.0));
        let txt = format_point_summary(&eval);
        let expected = concat!(
            "=== Wageningen B-series ===\n",
            "J=0.6 | P/D=1 | Ae/Ao=0.65 | Z=4\n",
            "KT   = 0.225178\n",
            "KQ   = 0.037049\n",
            "10KQ = 0.370494\n",
            "eta0 = 0.580385\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn point_summary_lists_domain_warnings() {
        let eval = PointEvaluation::at(OperatingPoint::new(0.6, 1.0, 0.65, 9.0));
        let txt = format_point_summary(&eval);
        assert!(txt.contains("Outside the regression domain"));
        assert!(txt.contains("- Z=9 is outside [2, 7]"));
    }

    #[test]
    fn family_summary_golden() {
        let family = CurveFamily {
            geometry: Geometry { ar: 0.65, z: 4.0 },
            j_grid: GridSpec {
                start: 0.0,
                stop: 1.0,
                step: 0.5,
            },
            curves: vec![OpenWaterCurve {
                pd: 1.0,
                label: "P/D = 1.0".to_string(),
                kt: vec![
                    CurvePoint { j: 0.0, value: 0.445 },
                    CurvePoint { j: 0.5, value: 0.27 },
                ],
                kq: vec![
                    CurvePoint { j: 0.0, value: 0.0656 },
                    CurvePoint { j: 0.5, value: 0.043 },
                ],
                eta: vec![
                    CurvePoint { j: 0.0, value: 0.0 },
                    CurvePoint { j: 0.5, value: 0.5 },
                ],
                kt_zero_crossing: None,
            }],
        };

        let txt = format_family_summary(&family, 2);
        let expected = concat!(
            "=== Wageningen B-series open-water curves ===\n",
            "Ae/Ao=0.65 | Z=4 | J=[0, 1) step 0.5 (2 points)\n",
            "\n",
            "curve           KT(0)    10KQ(0)    J(KT=0)    eta_max J(eta_max)\n",
            "---------- ---------- ---------- ---------- ---------- ----------\n",
            "1.0            0.4450     0.6560          -     0.5000      0.500\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn empty_series_render_as_dashes() {
        let family = CurveFamily {
            geometry: Geometry { ar: 0.65, z: 4.0 },
            j_grid: GridSpec {
                start: 2.0,
                stop: 3.0,
                step: 0.5,
            },
            curves: vec![OpenWaterCurve {
                pd: 0.5,
                label: "P/D = 0.5".to_string(),
                kt: vec![],
                kq: vec![],
                eta: vec![],
                kt_zero_crossing: Some(2.0),
            }],
        };
        let txt = format_family_summary(&family, 2);
        let last = txt.lines().last().unwrap();
        assert_eq!(last, "0.5                 -          -      2.000          -          -");
    }
}

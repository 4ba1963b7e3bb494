//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each curve of the family is drawn with its own glyph (`a`, `b`, `c`, ...)
//! and listed in a legend under the grid. Where curves overlap, the one drawn
//! first keeps the cell.

use crate::domain::{CurveFamily, Series};

const GLYPHS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
];

/// Fallback x-range when the family has no points.
const DEFAULT_J_RANGE: (f64, f64) = (0.0, 1.4);

/// Render one series of a curve family.
///
/// `y_range` pins the vertical axis (e.g. `(0.0, 0.8)`); `None` fits the data
/// with a 5% margin.
pub fn render_family_plot(
    family: &CurveFamily,
    series: Series,
    width: usize,
    height: usize,
    y_range: Option<(f64, f64)>,
) -> String {
    let curves: Vec<(String, Vec<(f64, f64)>)> = family
        .curves
        .iter()
        .map(|c| {
            let scale = series.plot_scale();
            let points = c
                .series(series)
                .iter()
                .map(|p| (p.j, scale * p.value))
                .collect();
            (c.label.clone(), points)
        })
        .collect();

    let (j_min, j_max) = x_range(family).unwrap_or(DEFAULT_J_RANGE);
    render_plot(&curves, series, j_min, j_max, width, height, y_range)
}

fn render_plot(
    curves: &[(String, Vec<(f64, f64)>)],
    series: Series,
    j_min: f64,
    j_max: f64,
    width: usize,
    height: usize,
    y_range: Option<(f64, f64)>,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = match y_range {
        Some((lo, hi)) if lo.is_finite() && hi.is_finite() && hi > lo => (lo, hi),
        _ => {
            let (lo, hi) = y_range_of(curves).unwrap_or((0.0, 1.0));
            pad_range(lo, hi, 0.05)
        }
    };

    let mut grid = vec![vec![' '; width]; height];

    for (idx, (_, points)) in curves.iter().enumerate() {
        draw_curve(&mut grid, points, glyph(idx), j_min, j_max, y_min, y_max);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {} | J=[{j_min:.3}, {j_max:.3}] | y=[{y_min:.3}, {y_max:.3}]\n",
        series.display_name()
    ));

    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    for (idx, (label, _)) in curves.iter().enumerate() {
        out.push_str(&format!("  {} {label}\n", glyph(idx)));
    }

    out
}

fn glyph(idx: usize) -> char {
    GLYPHS[idx % GLYPHS.len()]
}

fn x_range(family: &CurveFamily) -> Option<(f64, f64)> {
    let grid = &family.j_grid;
    if grid.start.is_finite() && grid.stop.is_finite() && grid.stop > grid.start {
        Some((grid.start, grid.stop))
    } else {
        None
    }
}

fn y_range_of(curves: &[(String, Vec<(f64, f64)>)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for (_, points) in curves {
        for &(_, y) in points {
            if y.is_finite() {
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

/// Row for `y`, or `None` when it falls outside the axis.
fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> Option<usize> {
    if !(y >= y_min && y <= y_max) {
        return None;
    }
    let height = height.max(2);
    let u = (y - y_min) / (y_max - y_min);
    // y=top is max -> row 0
    Some((height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize)
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    ch: char,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev: Option<(usize, usize)> = None;
    for &(x, y) in curve {
        let Some(row) = map_y(y, y_min, y_max, height) else {
            // Off-axis points break the line.
            prev = None;
            continue;
        };
        let col = map_x(x, x_min, x_max, width);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, ch),
            None => {
                if grid[row][col] == ' ' {
                    grid[row][col] = ch;
                }
            }
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurvePoint, Geometry, GridSpec, OpenWaterCurve};

    fn straight_line_family() -> CurveFamily {
        let kt = |start: f64| {
            (0..10)
                .map(|i| CurvePoint {
                    j: i as f64,
                    value: start - i as f64 * 0.1,
                })
                .collect::<Vec<_>>()
        };
        CurveFamily {
            geometry: Geometry { ar: 0.65, z: 4.0 },
            j_grid: GridSpec {
                start: 0.0,
                stop: 9.0,
                step: 1.0,
            },
            curves: vec![
                OpenWaterCurve {
                    pd: 0.5,
                    label: "P/D = 0.5".to_string(),
                    kt: kt(0.9),
                    kq: vec![],
                    eta: vec![],
                    kt_zero_crossing: None,
                },
                OpenWaterCurve {
                    pd: 0.6,
                    label: "P/D = 0.6".to_string(),
                    kt: vec![CurvePoint { j: 0.0, value: 0.0 }, CurvePoint { j: 9.0, value: 0.0 }],
                    kq: vec![],
                    eta: vec![],
                    kt_zero_crossing: None,
                },
            ],
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let txt = render_family_plot(&straight_line_family(), Series::Kt, 10, 10, Some((0.0, 0.9)));
        let expected = concat!(
            "Plot: KT | J=[0.000, 9.000] | y=[0.000, 0.900]\n",
            "a\n",
            " a\n",
            "  a\n",
            "   a\n",
            "    a\n",
            "     a\n",
            "      a\n",
            "       a\n",
            "        a\n",
            "bbbbbbbbba\n",
            "  a P/D = 0.5\n",
            "  b P/D = 0.6\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn points_outside_fixed_range_are_clipped() {
        let txt = render_family_plot(&straight_line_family(), Series::Kt, 10, 10, Some((0.5, 0.9)));
        let rows: Vec<&str> = txt.lines().skip(1).take(10).collect();
        // The zero line of curve `b` lies below the axis.
        assert!(rows.iter().all(|r| !r.contains('b')));
        assert!(rows[0].starts_with('a'));
    }

    #[test]
    fn empty_series_renders_blank_grid_with_legend() {
        let txt = render_family_plot(&straight_line_family(), Series::Eta, 12, 5, None);
        assert!(txt.starts_with("Plot: eta0 | J=[0.000, 9.000] | y=[-0.050, 1.050]\n"));
        assert!(txt.ends_with("  a P/D = 0.5\n  b P/D = 0.6\n"));
        assert_eq!(txt.lines().count(), 1 + 5 + 2);
    }

    #[test]
    fn real_family_plot_is_deterministic() {
        let config = crate::domain::SweepConfig::default();
        let run = crate::app::pipeline::run_sweep(&config).unwrap();
        let a = render_family_plot(&run.family, Series::Kt, 80, 20, config.y_range);
        let b = render_family_plot(&run.family, Series::Kt, 80, 20, config.y_range);
        assert_eq!(a, b);
        assert!(a.contains("  j P/D = 1.4\n"));
    }
}

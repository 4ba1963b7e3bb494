//! Export curve points to CSV.
//!
//! The export is long-format (one row per series point) so it is easy to
//! consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{CurveFamily, Series};
use crate::error::AppError;

/// CSV header written by [`write_family_csv`].
pub const CSV_HEADER: &str = "pd,ar,z,series,j,value";

/// Write every point of every series of a family to a CSV file.
pub fn write_family_csv(path: &Path, family: &CurveFamily) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    write_family_rows(&mut writer, family)?;
    writer
        .flush()
        .map_err(|e| AppError::input(format!("Failed to write export CSV: {e}")))
}

/// Write the CSV body to any writer.
pub fn write_family_rows<W: Write>(out: &mut W, family: &CurveFamily) -> Result<(), AppError> {
    writeln!(out, "{CSV_HEADER}")
        .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for curve in &family.curves {
        for series in Series::ALL {
            for p in curve.series(series) {
                writeln!(
                    out,
                    "{:.4},{},{},{},{:.6},{:.10}",
                    curve.pd,
                    family.geometry.ar,
                    family.geometry.z,
                    series.key(),
                    p.j,
                    p.value,
                )
                .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurvePoint, Geometry, GridSpec, OpenWaterCurve};

    #[test]
    fn rows_are_grouped_by_curve_then_series() {
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
                kt: vec![CurvePoint { j: 0.0, value: 0.44503018550000006 }],
                kq: vec![CurvePoint { j: 0.0, value: 0.06560959176 }],
                eta: vec![CurvePoint { j: 0.0, value: 0.0 }],
                kt_zero_crossing: None,
            }],
        };

        let mut buf = Vec::new();
        write_family_rows(&mut buf, &family).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        let expected = concat!(
            "pd,ar,z,series,j,value\n",
            "1.0000,0.65,4,kt,0.000000,0.4450301855\n",
            "1.0000,0.65,4,kq,0.000000,0.0656095918\n",
            "1.0000,0.65,4,eta,0.000000,0.0000000000\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn missing_directory_is_an_input_error() {
        let family = CurveFamily {
            geometry: Geometry { ar: 0.65, z: 4.0 },
            j_grid: GridSpec {
                start: 0.0,
                stop: 1.0,
                step: 0.5,
            },
            curves: vec![],
        };
        let path = std::env::temp_dir().join("bseries-no-such-dir").join("out.csv");
        let err = write_family_csv(&path, &family).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }
}

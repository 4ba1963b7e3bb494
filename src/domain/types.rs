//! Shared domain types.
//!
//! Output types are serializable so a swept family of curves can be:
//!
//! - used in-memory for reports and plots
//! - exported to JSON/CSV
//! - reloaded later for plotting

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which regression coefficient to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    /// Thrust coefficient `KT`.
    Kt,
    /// Torque coefficient `KQ`.
    Kq,
}

/// Which open-water series to report or plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Kt,
    /// Torque coefficient, scaled by 10 as on a conventional open-water diagram.
    Kq,
    /// Open-water efficiency `η0 = KT·J / (2π·KQ)`.
    Eta,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Kt, Series::Kq, Series::Eta];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Series::Kt => "KT",
            Series::Kq => "10KQ",
            Series::Eta => "eta0",
        }
    }

    /// Column value used in CSV exports.
    pub fn key(self) -> &'static str {
        match self {
            Series::Kt => "kt",
            Series::Kq => "kq",
            Series::Eta => "eta",
        }
    }

    /// Multiplier applied when plotting (10·KQ shares the KT axis).
    pub fn plot_scale(self) -> f64 {
        match self {
            Series::Kq => 10.0,
            Series::Kt | Series::Eta => 1.0,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Series::Kt => Series::Kq,
            Series::Kq => Series::Eta,
            Series::Eta => Series::Kt,
        }
    }
}

/// Slack on domain limits so swept values like `1.4000000000000001` count as `1.4`.
const LIMIT_TOLERANCE: f64 = 1e-9;

/// Closed bounds of one regression input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies inside `[min, max]`, give or take grid rounding.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min - LIMIT_TOLERANCE && value <= self.max + LIMIT_TOLERANCE
    }
}

/// Fitted domain of a regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainLimits {
    /// Lower bound on `J`; there is no upper bound.
    pub j_min: f64,
    pub pitch_ratio: Bounds,
    pub area_ratio: Bounds,
    pub blades: Bounds,
}

/// Documented limits of the B-series regression.
///
/// `J = 0` (bollard pull) is the usual start of an open-water sweep, so the J
/// check is `J >= 0` rather than the strict `J > 0` quoted with the tables.
pub const B_SERIES_LIMITS: DomainLimits = DomainLimits {
    j_min: 0.0,
    pitch_ratio: Bounds::new(0.5, 1.4),
    area_ratio: Bounds::new(0.3, 1.05),
    blades: Bounds::new(2.0, 7.0),
};

/// One operating point `(J, P/D, Ae/Ao, Z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    pub j: f64,
    pub pd: f64,
    pub ar: f64,
    pub z: f64,
}

impl OperatingPoint {
    pub fn new(j: f64, pd: f64, ar: f64, z: f64) -> Self {
        Self { j, pd, ar, z }
    }

    pub fn kt(&self) -> f64 {
        crate::models::kt(self.j, self.pd, self.ar, self.z)
    }

    pub fn kq(&self) -> f64 {
        crate::models::kq(self.j, self.pd, self.ar, self.z)
    }

    /// Advisory messages for inputs outside the fitted regression domain.
    ///
    /// Empty when the point is inside. Evaluation does not consult this.
    pub fn domain_warnings(&self) -> Vec<String> {
        let limits = &B_SERIES_LIMITS;
        let mut out = Vec::new();
        if !(self.j >= limits.j_min) {
            out.push(format!("J={} is below {}", self.j, limits.j_min));
        }
        if !limits.pitch_ratio.contains(self.pd) {
            out.push(format!(
                "P/D={} is outside [{}, {}]",
                self.pd, limits.pitch_ratio.min, limits.pitch_ratio.max
            ));
        }
        if !limits.area_ratio.contains(self.ar) {
            out.push(format!(
                "Ae/Ao={} is outside [{}, {}]",
                self.ar, limits.area_ratio.min, limits.area_ratio.max
            ));
        }
        if !limits.blades.contains(self.z) {
            out.push(format!(
                "Z={} is outside [{}, {}]",
                self.z, limits.blades.min, limits.blades.max
            ));
        }
        out
    }
}

/// Propeller geometry held fixed during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Expanded blade area ratio `Ae/Ao`.
    pub ar: f64,
    /// Blade count.
    pub z: f64,
}

/// Half-open range `[start, stop)` sampled every `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

/// A full sweep configuration, derived from CLI flags (plus defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub geometry: Geometry,
    pub j_grid: GridSpec,
    pub pd_grid: GridSpec,

    pub series: Series,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    /// Fixed y-range for plots. `None` fits the data.
    pub y_range: Option<(f64, f64)>,
}

impl Default for SweepConfig {
    /// A 7-bladed, `Ae/Ao = 1.05` propeller over `J ∈ [0, 1.4)` for
    /// `P/D = 0.5 .. 1.4`, plotted on a `[0, 0.8]` axis.
    fn default() -> Self {
        Self {
            geometry: Geometry { ar: 1.05, z: 7.0 },
            j_grid: GridSpec {
                start: 0.0,
                stop: 1.4,
                step: 0.001,
            },
            pd_grid: GridSpec {
                start: 0.5,
                stop: 1.5,
                step: 0.1,
            },
            series: Series::Kt,
            plot: true,
            plot_width: 100,
            plot_height: 25,
            y_range: Some((0.0, 0.8)),
        }
    }
}

/// One `(J, value)` sample of an open-water series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub j: f64,
    pub value: f64,
}

/// Open-water curves for one pitch ratio.
///
/// Each series only keeps the physically meaningful points (see
/// `sweep::open_water_curve`), so the three vectors can differ in length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWaterCurve {
    pub pd: f64,
    pub label: String,
    pub kt: Vec<CurvePoint>,
    pub kq: Vec<CurvePoint>,
    pub eta: Vec<CurvePoint>,
    /// First swept `J` at which `KT` turned negative, if any.
    pub kt_zero_crossing: Option<f64>,
}

impl OpenWaterCurve {
    pub fn series(&self, series: Series) -> &[CurvePoint] {
        match series {
            Series::Kt => &self.kt,
            Series::Kq => &self.kq,
            Series::Eta => &self.eta,
        }
    }

    /// Highest efficiency point on the curve.
    pub fn peak_eta(&self) -> Option<CurvePoint> {
        self.eta
            .iter()
            .copied()
            .filter(|p| p.value.is_finite())
            .max_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// A family of open-water curves over several pitch ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFamily {
    pub geometry: Geometry,
    pub j_grid: GridSpec,
    pub curves: Vec<OpenWaterCurve>,
}

/// A saved family file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyFile {
    pub tool: String,
    pub version: String,
    pub family: CurveFamily,
}

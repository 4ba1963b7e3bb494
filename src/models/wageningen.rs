//! Wageningen B-series open-water regression.
//!
//! KT and KQ polynomials from Oosterveld & van Oossanen's regression of the
//! Wageningen B-series open-water tests (University of Michigan, Dept. of Naval
//! Architecture and Marine Engineering, Publication No. 237):
//!
//! ```text
//! KT = Σ C_T · J^s · (P/D)^t · (Ae/Ao)^u · Z^v      (39 terms)
//! KQ = Σ C_Q · J^s · (P/D)^t · (Ae/Ao)^u · Z^v      (47 terms)
//! ```
//!
//! The regression was fitted over
//!
//! - `J > 0` (advance ratio `v / nD`)
//! - `0.5 < P/D < 1.4`
//! - `0.3 < Ae/Ao < 1.05`
//! - `2 < Z < 7`
//!
//! The functions in this module do **not** check those limits. Any input is
//! evaluated; outside the fitted domain the result is an extrapolation of the
//! polynomial and may be physically meaningless. Callers that care should use
//! [`crate::domain::OperatingPoint::domain_warnings`].

use crate::domain::Coefficient;
use crate::math::{RegressionTable, Term};

/// Thrust coefficient terms `(C_T, s, t, u, v)` in published order.
#[rustfmt::skip]
pub const KT_TERMS: [Term; 39] = [
    Term::new( 8.80496e-3, 0, 0, 0, 0),
    Term::new(-2.04554e-1, 1, 0, 0, 0),
    Term::new( 1.66351e-1, 0, 1, 0, 0),
    Term::new( 1.58114e-1, 0, 2, 0, 0),
    Term::new(-1.47581e-1, 2, 0, 1, 0),
    Term::new(-4.81497e-1, 1, 1, 1, 0),
    Term::new( 4.15437e-1, 0, 2, 1, 0),
    Term::new( 1.44043e-2, 0, 0, 0, 1),
    Term::new(-5.30054e-2, 2, 0, 0, 1),
    Term::new( 1.43481e-2, 0, 1, 0, 1),
    Term::new( 6.06826e-2, 1, 1, 0, 1),
    Term::new(-1.25894e-2, 0, 0, 1, 1),
    Term::new( 1.09689e-2, 1, 0, 1, 1),
    Term::new(-1.33698e-1, 0, 3, 0, 0),
    Term::new( 6.38407e-3, 0, 6, 0, 0),
    Term::new(-1.32718e-3, 2, 6, 0, 0),
    Term::new( 1.68496e-1, 3, 0, 1, 0),
    Term::new(-5.07214e-2, 0, 0, 2, 0),
    Term::new( 8.54559e-2, 2, 0, 2, 0),
    Term::new(-5.04475e-2, 3, 0, 2, 0),
    Term::new( 1.04650e-2, 1, 6, 2, 0),
    Term::new(-6.48272e-3, 2, 6, 2, 0),
    Term::new(-8.41728e-3, 0, 3, 0, 1),
    Term::new( 1.68424e-2, 1, 3, 0, 1),
    Term::new(-1.02296e-3, 3, 3, 0, 1),
    Term::new(-3.17791e-2, 0, 3, 1, 1),
    Term::new( 1.86040e-2, 1, 0, 2, 1),
    Term::new(-4.10798e-3, 0, 2, 2, 1),
    Term::new(-6.06848e-4, 0, 0, 0, 2),
    Term::new(-4.98190e-3, 1, 0, 0, 2),
    Term::new( 2.59830e-3, 2, 0, 0, 2),
    Term::new(-5.60528e-4, 3, 0, 0, 2),
    Term::new(-1.63652e-3, 1, 2, 0, 2),
    Term::new(-3.28787e-4, 1, 6, 0, 2),
    Term::new( 1.16502e-4, 2, 6, 0, 2),
    Term::new( 6.90904e-4, 0, 0, 1, 2),
    Term::new( 4.21749e-3, 0, 3, 1, 2),
    Term::new( 5.65229e-5, 3, 6, 1, 2),
    Term::new(-1.46564e-3, 0, 3, 2, 2),
];

/// Torque coefficient terms `(C_Q, s, t, u, v)` in published order.
#[rustfmt::skip]
pub const KQ_TERMS: [Term; 47] = [
    Term::new( 3.79368e-3, 0, 0, 0, 0),
    Term::new( 8.86523e-3, 2, 0, 0, 0),
    Term::new(-3.22410e-2, 1, 1, 0, 0),
    Term::new( 3.44778e-3, 0, 2, 0, 0),
    Term::new(-4.08811e-2, 0, 1, 1, 0),
    Term::new(-1.08009e-1, 1, 1, 1, 0),
    Term::new(-8.85381e-2, 2, 1, 1, 0),
    Term::new( 1.88561e-1, 0, 2, 1, 0),
    Term::new(-3.70871e-3, 1, 0, 0, 1),
    Term::new( 5.13696e-3, 0, 1, 0, 1),
    Term::new( 2.09449e-2, 1, 1, 0, 1),
    Term::new( 4.74319e-3, 2, 1, 0, 1),
    Term::new(-7.23408e-3, 2, 0, 1, 1),
    Term::new( 4.38388e-3, 1, 1, 1, 1),
    Term::new(-2.69403e-2, 0, 2, 1, 1),
    Term::new( 5.58082e-2, 3, 0, 1, 0),
    Term::new( 1.61886e-2, 0, 3, 1, 0),
    Term::new( 3.18086e-3, 1, 3, 1, 0),
    Term::new( 1.58960e-2, 0, 0, 2, 0),
    Term::new( 4.71729e-2, 1, 0, 2, 0),
    Term::new( 1.96283e-2, 3, 0, 2, 0),
    Term::new(-5.02782e-2, 0, 1, 2, 0),
    Term::new(-3.00550e-2, 3, 1, 2, 0),
    Term::new( 4.17122e-2, 2, 2, 2, 0),
    Term::new(-3.97722e-2, 0, 3, 2, 0),
    Term::new(-3.50024e-3, 0, 6, 2, 0),
    Term::new(-1.06854e-2, 3, 0, 0, 1),
    Term::new( 1.10903e-3, 3, 3, 0, 1),
    Term::new(-3.13912e-4, 0, 6, 0, 1),
    Term::new( 3.59850e-3, 3, 0, 1, 1),
    Term::new(-1.42121e-3, 0, 6, 1, 1),
    Term::new(-3.83637e-3, 1, 0, 2, 1),
    Term::new( 1.26803e-2, 0, 2, 2, 1),
    Term::new(-3.18278e-3, 2, 3, 2, 1),
    Term::new( 3.34268e-3, 0, 6, 2, 1),
    Term::new(-1.83491e-3, 1, 1, 0, 2),
    Term::new( 1.12451e-4, 3, 2, 0, 2),
    Term::new(-2.97228e-5, 3, 6, 0, 2),
    Term::new( 2.69551e-4, 1, 0, 1, 2),
    Term::new( 8.32650e-4, 2, 0, 1, 2),
    Term::new( 1.55334e-3, 0, 2, 1, 2),
    Term::new( 3.02683e-4, 0, 6, 1, 2),
    Term::new(-1.84300e-4, 0, 0, 2, 2),
    Term::new(-4.25399e-4, 0, 3, 2, 2),
    Term::new( 8.69243e-5, 3, 3, 2, 2),
    Term::new(-4.65900e-4, 0, 6, 2, 2),
    Term::new( 5.54194e-5, 1, 6, 2, 2),
];

pub const KT_TABLE: RegressionTable = RegressionTable::new("KT", &KT_TERMS);
pub const KQ_TABLE: RegressionTable = RegressionTable::new("KQ", &KQ_TERMS);

/// Thrust coefficient `KT(J, P/D, Ae/Ao, Z)`.
///
/// Inputs are not validated; see the module docs for the fitted domain.
pub fn kt(j: f64, pd: f64, ar: f64, z: f64) -> f64 {
    KT_TABLE.evaluate(j, pd, ar, z)
}

/// Torque coefficient `KQ(J, P/D, Ae/Ao, Z)`.
///
/// Inputs are not validated; see the module docs for the fitted domain.
pub fn kq(j: f64, pd: f64, ar: f64, z: f64) -> f64 {
    KQ_TABLE.evaluate(j, pd, ar, z)
}

/// Regression table backing a coefficient.
pub fn table(coefficient: Coefficient) -> &'static RegressionTable {
    match coefficient {
        Coefficient::Kt => &KT_TABLE,
        Coefficient::Kq => &KQ_TABLE,
    }
}

/// Evaluate one coefficient at a single point.
pub fn evaluate(coefficient: Coefficient, j: f64, pd: f64, ar: f64, z: f64) -> f64 {
    table(coefficient).evaluate(j, pd, ar, z)
}

/// Evaluate one coefficient for every advance ratio in `js` at fixed geometry.
///
/// Element `i` is exactly `evaluate(coefficient, js[i], pd, ar, z)`.
pub fn evaluate_many(coefficient: Coefficient, js: &[f64], pd: f64, ar: f64, z: f64) -> Vec<f64> {
    let table = table(coefficient);
    js.iter().map(|&j| table.evaluate(j, pd, ar, z)).collect()
}

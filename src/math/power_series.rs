//! Table-driven multivariate power series in four variables.
//!
//! A regression table is an ordered list of terms
//!
//! ```text
//! c · J^s · (P/D)^t · Ar^u · Z^v
//! ```
//!
//! with real coefficients `c` and non-negative integer exponents. Evaluation is a
//! plain sum over the table.
//!
//! Numerical notes:
//! - Terms are summed in table order and each product is formed left to right
//!   (`c`, then `J`, `P/D`, `Ar`, `Z`). Floating-point addition is not
//!   associative, so reordering either would change the low bits of the result.
//! - A zero exponent yields exactly `1.0` for any base, including `0`, `NaN` and
//!   infinities. This is checked explicitly instead of trusting `pow`.
//! - Inputs are not validated. Anything outside the fitted domain is simply
//!   extrapolated, and non-finite inputs propagate through the arithmetic.

/// One regression term: a coefficient and the exponents of `J`, `P/D`, `Ar`, `Z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub j: u32,
    pub pd: u32,
    pub ar: u32,
    pub z: u32,
}

impl Term {
    pub const fn new(coefficient: f64, j: u32, pd: u32, ar: u32, z: u32) -> Self {
        Self {
            coefficient,
            j,
            pd,
            ar,
            z,
        }
    }

    /// Value of this single term at `(j, pd, ar, z)`.
    #[inline]
    pub fn evaluate(&self, j: f64, pd: f64, ar: f64, z: f64) -> f64 {
        self.coefficient
            * int_pow(j, self.j)
            * int_pow(pd, self.pd)
            * int_pow(ar, self.ar)
            * int_pow(z, self.z)
    }

    /// True when every exponent is zero (the constant term).
    pub fn is_constant(&self) -> bool {
        self.j == 0 && self.pd == 0 && self.ar == 0 && self.z == 0
    }
}

/// A named, immutable regression table.
#[derive(Debug, Clone, Copy)]
pub struct RegressionTable {
    pub name: &'static str,
    pub terms: &'static [Term],
}

impl RegressionTable {
    pub const fn new(name: &'static str, terms: &'static [Term]) -> Self {
        Self { name, terms }
    }

    pub const fn len(&self) -> usize {
        self.terms.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the series at one point. See [`evaluate`].
    #[inline]
    pub fn evaluate(&self, j: f64, pd: f64, ar: f64, z: f64) -> f64 {
        evaluate(self, j, pd, ar, z)
    }
}

impl std::fmt::Display for RegressionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} terms)", self.name, self.terms.len())
    }
}

/// Sum every term of `table` at `(j, pd, ar, z)`, in table order.
pub fn evaluate(table: &RegressionTable, j: f64, pd: f64, ar: f64, z: f64) -> f64 {
    let mut result = 0.0;
    for term in table.terms {
        result += term.evaluate(j, pd, ar, z);
    }
    result
}

/// `base^exp` for a non-negative integer exponent, with `base^0 == 1` for every base.
///
/// Non-zero exponents go through `powf` so results match a conventional
/// double-precision `pow` bit for bit.
#[inline]
pub fn int_pow(base: f64, exp: u32) -> f64 {
    match exp {
        0 => 1.0,
        1 => base,
        _ => base.powf(f64::from(exp)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: [Term; 3] = [
        Term::new(2.0, 0, 0, 0, 0),
        Term::new(3.0, 1, 0, 0, 0),
        Term::new(-1.0, 2, 1, 1, 1),
    ];

    #[test]
    fn zero_exponent_is_one_for_any_base() {
        for &base in &[0.0, -0.0, 1.0, -3.5, 1e300, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(int_pow(base, 0), 1.0, "base {base}");
        }
    }

    #[test]
    fn zero_base_with_positive_exponent_is_zero() {
        for exp in 1..=6 {
            assert_eq!(int_pow(0.0, exp), 0.0);
        }
    }

    #[test]
    fn int_pow_matches_repeated_multiplication_for_exact_values() {
        assert_eq!(int_pow(2.0, 6), 64.0);
        assert_eq!(int_pow(4.0, 2), 16.0);
        assert_eq!(int_pow(-1.5, 3), -3.375);
    }

    #[test]
    fn evaluate_sums_terms() {
        let table = RegressionTable::new("tiny", &TINY);
        // 2 + 3*2 - 1 * 4 * 0.5 * 1 * 3 = 2 + 6 - 6 = 2
        let v = table.evaluate(2.0, 0.5, 1.0, 3.0);
        assert!((v - 2.0).abs() < 1e-15, "got {v}");
    }

    #[test]
    fn constant_term_survives_zero_inputs() {
        let table = RegressionTable::new("tiny", &TINY);
        assert_eq!(table.evaluate(0.0, 0.0, 0.0, 0.0), 2.0);
        assert!(TINY[0].is_constant());
        assert!(!TINY[1].is_constant());
    }

    #[test]
    fn nan_input_propagates() {
        let table = RegressionTable::new("tiny", &TINY);
        assert!(table.evaluate(f64::NAN, 1.0, 1.0, 1.0).is_nan());
    }
}

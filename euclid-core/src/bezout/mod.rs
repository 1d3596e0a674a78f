//! Extended Euclidean algorithm producing Bézout coefficients.

use serde::{Deserialize, Serialize};

/// Coefficients of the Bézout identity `a * u + b * v = gcd(a, b)`.
///
/// The identity holds for the *signed* original inputs; `gcd` is always
/// non-negative.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BezoutResult {
    pub gcd: i64,
    pub u: i64,
    pub v: i64,
}

/// Finds `(g, u, v)` such that `a * u + b * v = g = gcd(a, b)`.
///
/// Iterative back-substitution with two accumulator pairs, so the
/// recursion depth of the textbook formulation never becomes a concern.
/// Quotient and remainder use the same truncating convention throughout,
/// which keeps the identity valid for negative operands; the final sign
/// flip then normalizes `g` to be non-negative.
///
/// # Example
///
/// ```
/// # use euclid_core::extended_gcd;
/// let r = extended_gcd(35, 15);
/// assert_eq!(r.gcd, 5);
/// assert_eq!(35 * r.u + 15 * r.v, 5);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> BezoutResult {
    // Invariants: a * u0 + b * v0 = r0 and a * u1 + b * v1 = r1.
    let (mut r0, mut r1) = (a, b);
    let (mut u0, mut u1) = (1i64, 0i64);
    let (mut v0, mut v1) = (0i64, 1i64);

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (u0, u1) = (u1, u0 - q * u1);
        (v0, v1) = (v1, v0 - q * v1);
    }

    if r0 < 0 {
        (r0, u0, v0) = (-r0, -u0, -v0);
    }

    BezoutResult {
        gcd: r0,
        u: u0,
        v: v0,
    }
}

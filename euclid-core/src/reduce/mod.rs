//! Euclidean reduction loop with a recorded division trace.

use crate::errors::EuclidError;

use num_integer::Integer;

use serde::{Deserialize, Serialize};

/// One Euclidean division `dividend = divisor * quotient + remainder`.
///
/// Steps are recorded in algorithm order and never mutated afterwards.
/// For every step `0 <= remainder < divisor` holds, since the loop runs
/// on non-negative values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DivisionStep {
    pub dividend: i64,
    pub divisor: i64,
    pub quotient: i64,
    pub remainder: i64,
}

/// Result of [`reduce`]: the gcd together with the full division trace.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Reduction {
    /// Greatest common divisor of the two inputs, always non-negative.
    pub gcd: i64,
    /// Division steps in chronological order; empty when the second
    /// operand (after taking absolute values) is zero.
    pub steps: Vec<DivisionStep>,
}

impl Reduction {
    /// Whether the two original inputs are coprime (gcd = 1).
    ///
    /// # Example
    ///
    /// ```
    /// # use euclid_core::reduce;
    /// assert!(reduce(35, 12).unwrap().is_coprime());
    /// assert!(!reduce(48, 18).unwrap().is_coprime());
    /// ```
    pub fn is_coprime(&self) -> bool {
        self.gcd == 1
    }
}

/// Runs the Euclidean algorithm on `a` and `b`, recording every division.
///
/// The loop works on the absolute values of the inputs; the sign of the
/// operands does not change the gcd. Termination is guaranteed because
/// each remainder is strictly smaller than the previous divisor.
///
/// # Errors
///
/// Returns [`EuclidError::UndefinedGcd`] when both inputs are zero.
///
/// # Example
///
/// ```
/// # use euclid_core::reduce;
/// let reduction = reduce(48, 18).unwrap();
/// assert_eq!(reduction.gcd, 6);
/// assert_eq!(reduction.steps.len(), 3);
///
/// // A zero divisor means the gcd is known without any division.
/// let trivial = reduce(7, 0).unwrap();
/// assert_eq!(trivial.gcd, 7);
/// assert!(trivial.steps.is_empty());
/// ```
pub fn reduce(a: i64, b: i64) -> Result<Reduction, EuclidError> {
    if a == 0 && b == 0 {
        return Err(EuclidError::UndefinedGcd);
    }

    let mut dividend = a.abs();
    let mut divisor = b.abs();

    let mut steps = Vec::new();
    while divisor != 0 {
        let (quotient, remainder) = dividend.div_rem(&divisor);
        steps.push(DivisionStep {
            dividend,
            divisor,
            quotient,
            remainder,
        });
        (dividend, divisor) = (divisor, remainder);
    }

    Ok(Reduction {
        gcd: dividend,
        steps,
    })
}

//! Solver for the linear Diophantine equation `a * u + b * v = c`.

use crate::bezout::extended_gcd;
use crate::errors::EuclidError;

use serde::{Deserialize, Serialize};

/// Integer solution family of `a * u + b * v = c`.
///
/// `(u0, v0)` is a particular solution; every integer solution is
/// `(u0 + step_u * t, v0 + step_v * t)` for exactly one `t`, with
/// `step_u = b / g` and `step_v = -a / g`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SolutionFamily {
    pub u0: i64,
    pub v0: i64,
    pub step_u: i64,
    pub step_v: i64,
}

impl SolutionFamily {
    /// The family member for parameter `t`.
    ///
    /// # Example
    ///
    /// ```
    /// # use euclid_core::{DiophantineOutcome, solve_diophantine};
    /// let DiophantineOutcome::Solvable(family) = solve_diophantine(35, 15, 10).unwrap() else {
    ///     unreachable!();
    /// };
    /// let (u, v) = family.solution_at(3);
    /// assert_eq!(35 * u + 15 * v, 10);
    /// ```
    pub fn solution_at(&self, t: i64) -> (i64, i64) {
        (self.u0 + self.step_u * t, self.v0 + self.step_v * t)
    }
}

/// Outcome of [`solve_diophantine`]: either a solution family or the
/// signal that none exists. `NoSolution` is a normal value, not a fault;
/// it carries the gcd so callers can report why `c` was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum DiophantineOutcome {
    Solvable(SolutionFamily),
    NoSolution { gcd: i64 },
}

/// Solves `a * u + b * v = c` over the integers.
///
/// A solution exists iff `gcd(a, b)` divides `c`. When it does, the
/// Bézout coefficients of `(a, b)` are scaled by `c / gcd` to obtain the
/// particular solution, and the step sizes `b / gcd` and `-a / gcd` span
/// the full solution family.
///
/// # Errors
///
/// Returns [`EuclidError::UndefinedGcd`] when both `a` and `b` are zero.
///
/// # Example
///
/// ```
/// # use euclid_core::{DiophantineOutcome, solve_diophantine};
/// match solve_diophantine(35, 15, 10).unwrap() {
///     DiophantineOutcome::Solvable(family) => {
///         assert_eq!(35 * family.u0 + 15 * family.v0, 10);
///     }
///     DiophantineOutcome::NoSolution { .. } => unreachable!(),
/// }
///
/// // gcd(6, 9) = 3 does not divide 4.
/// assert_eq!(
///     solve_diophantine(6, 9, 4).unwrap(),
///     DiophantineOutcome::NoSolution { gcd: 3 }
/// );
/// ```
pub fn solve_diophantine(a: i64, b: i64, c: i64) -> Result<DiophantineOutcome, EuclidError> {
    if a == 0 && b == 0 {
        return Err(EuclidError::UndefinedGcd);
    }

    let bezout = extended_gcd(a, b);
    if c % bezout.gcd != 0 {
        return Ok(DiophantineOutcome::NoSolution { gcd: bezout.gcd });
    }

    let k = c / bezout.gcd;
    Ok(DiophantineOutcome::Solvable(SolutionFamily {
        u0: bezout.u * k,
        v0: bezout.v * k,
        step_u: b / bezout.gcd,
        step_v: -a / bezout.gcd,
    }))
}

//! # Euclid Core
//!
//! Arithmetic core of the Euclidean-algorithm teaching tool: the division
//! trace ([`reduce`]), Bézout coefficients ([`extended_gcd`]) and the
//! linear Diophantine solver ([`solve_diophantine`]).
//!
//! All functions are pure and synchronous; reading input and printing the
//! trace belong to the `cli` crate.

pub mod bezout;
pub mod diophantine;
pub mod errors;
pub mod reduce;

pub use bezout::{BezoutResult, extended_gcd};
pub use diophantine::{DiophantineOutcome, SolutionFamily, solve_diophantine};
pub use errors::EuclidError;
pub use reduce::{DivisionStep, Reduction, reduce};

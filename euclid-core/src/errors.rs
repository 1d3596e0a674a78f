#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EuclidError {
    /// Error when asking for gcd(0, 0), which has no defined value.
    #[error("gcd(0, 0) is undefined")]
    UndefinedGcd,
}

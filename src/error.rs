use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Polynomial long division where the dividend has a smaller degree than
    /// the divisor.
    #[error("cannot divide a polynomial of degree {dividend} by one of degree {divisor}")]
    Degree { dividend: usize, divisor: usize },

    /// Division by an exact zero, either a scalar, a zero polynomial or a
    /// denominator that vanishes at an evaluation point.
    #[error("attempted to divide by zero")]
    DivideByZero,

    /// An iterative root finder ran out of iterations before meeting its
    /// tolerance. The roots it would have produced are unreliable.
    #[error("did not converge within {max_iter} iterations")]
    NoConverge { max_iter: usize },

    /// Curve inputs that cannot describe a valid rational curve.
    #[error("degenerate curve construction: {0}")]
    DegenerateConstruction(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

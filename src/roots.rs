//! Root finding for polynomials of any degree.
//!
//! Degrees 1 to 3 (1 to 2 for complex coefficients) are solved in closed
//! form. Higher degrees go through one of the numerical methods selected by
//! [`RootStrategy`].

use num::Complex;

use crate::{
    util::{casting::f64_to_real, doc_macros::errors_no_converge},
    Poly, RealScalar, Result,
};

mod closed_form;
mod eigenvalue;
mod laguerre;

/// A root together with its multiplicity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root<T> {
    pub multiplicity: usize,
    pub value: Complex<T>,
}

impl<T: RealScalar> Root<T> {
    #[must_use]
    pub const fn new(value: Complex<T>, multiplicity: usize) -> Self {
        Self {
            multiplicity,
            value,
        }
    }

    /// A root of multiplicity one.
    #[must_use]
    pub const fn simple(value: Complex<T>) -> Self {
        Self::new(value, 1)
    }

    #[must_use]
    pub fn real(value: T, multiplicity: usize) -> Self {
        Self::new(Complex::new(value, T::zero()), multiplicity)
    }
}

/// Repeat every root as many times as its multiplicity.
///
/// ```
/// use nurbs_poly::{poly, roots::expand_multiplicities, RootStrategy};
///
/// // (x - 1)^2 (x - 2)
/// let roots = poly![1.0, -4.0, 5.0, -2.0].roots(RootStrategy::default()).unwrap();
/// assert_eq!(roots.len(), 2);
/// assert_eq!(expand_multiplicities(&roots).len(), 3);
/// ```
#[must_use]
pub fn expand_multiplicities<T: RealScalar>(roots: &[Root<T>]) -> Vec<Complex<T>> {
    roots
        .iter()
        .flat_map(|r| std::iter::repeat(r.value).take(r.multiplicity))
        .collect()
}

/// Numerical method used for polynomials that have no closed-form solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RootStrategy {
    /// Eigenvalues of the companion matrix.
    #[default]
    Eigenvalue,

    /// Laguerre's method with deflation.
    Laguerre,
}

/// Options for [`Poly::roots_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootsConfig {
    pub strategy: RootStrategy,

    /// Target accuracy of iterative methods.
    pub epsilon: f64,

    /// Iteration cap of iterative methods.
    pub max_iter: usize,
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self {
            strategy: RootStrategy::Eigenvalue,
            epsilon: 1E-12,
            max_iter: 1000,
        }
    }
}

impl RootsConfig {
    #[must_use]
    pub fn with_strategy(strategy: RootStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

impl<T: RealScalar> Poly<T> {
    /// Find all roots using the default [`RootsConfig`] with the given
    /// strategy. The multiplicities of the returned roots add up to the
    /// degree of the polynomial.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    ///
    /// # Examples
    /// ```
    /// use nurbs_poly::{poly, RootStrategy};
    ///
    /// let roots = poly![1.0, 0.0, -1.0].roots(RootStrategy::Eigenvalue).unwrap();
    /// let mut values: Vec<f64> = roots.iter().map(|r| r.value.re).collect();
    /// values.sort_by(f64::total_cmp);
    /// assert_eq!(values, vec![-1.0, 1.0]);
    /// ```
    pub fn roots(&self, strategy: RootStrategy) -> Result<Vec<Root<T>>> {
        self.roots_with(&RootsConfig::with_strategy(strategy))
    }

    /// Same as [`Poly::roots`], with full control over the solver settings.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn roots_with(&self, config: &RootsConfig) -> Result<Vec<Root<T>>> {
        debug_assert!(self.is_trimmed());

        let c = self.coeffs();
        match self.degree() {
            0 => Ok(vec![]),
            1 => Ok(closed_form::linear(c[0], c[1])),
            2 => Ok(closed_form::quadratic(c[0], c[1], c[2])),
            3 => Ok(closed_form::cubic(c[0], c[1], c[2], c[3])),
            n => {
                log::debug!("{{degree: {n}, strategy: {:?}}}", config.strategy);
                match config.strategy {
                    RootStrategy::Eigenvalue => self.roots_eigenvalue(config.max_iter),
                    RootStrategy::Laguerre => {
                        self.roots_laguerre(f64_to_real(config.epsilon), config.max_iter)
                    }
                }
            }
        }
    }

    /// Roots as eigenvalues of the companion matrix, for any degree.
    ///
    /// Every root is reported as simple, repeated roots show up as clusters
    /// of nearby values.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn roots_eigenvalue(&self, max_iter: usize) -> Result<Vec<Root<T>>> {
        eigenvalue::eigenvalue_roots(self.to_complex().coeffs(), max_iter)
    }

    /// Roots with Laguerre's method and deflation, for any degree.
    ///
    /// Exact zero roots are split off up front and reported as a single root
    /// with their multiplicity.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn roots_laguerre(&self, epsilon: T, max_iter: usize) -> Result<Vec<Root<T>>> {
        laguerre::laguerre_roots(self.to_complex().coeffs(), epsilon, max_iter, true)
    }
}

impl<T: RealScalar> Poly<Complex<T>> {
    /// Find all roots of a polynomial with complex coefficients.
    ///
    /// Degrees 1 and 2 are solved in closed form, higher degrees use the
    /// given strategy.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    ///
    /// # Examples
    /// ```
    /// use nurbs_poly::{poly, RootStrategy};
    ///
    /// // x^2 + 1
    /// let p = poly![(1.0f64, 0.0), (0.0, 0.0), (1.0, 0.0)];
    /// let roots = p.complex_roots(RootStrategy::default()).unwrap();
    /// assert!(roots.iter().all(|r| (r.value.im.abs() - 1.0).abs() < 1E-15));
    /// ```
    pub fn complex_roots(&self, strategy: RootStrategy) -> Result<Vec<Root<T>>> {
        self.complex_roots_with(&RootsConfig::with_strategy(strategy))
    }

    /// Same as [`Poly::complex_roots`], with full control over the solver
    /// settings.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn complex_roots_with(&self, config: &RootsConfig) -> Result<Vec<Root<T>>> {
        debug_assert!(self.is_trimmed());

        let c = self.coeffs();
        match self.degree() {
            0 => Ok(vec![]),
            1 => Ok(closed_form::complex_linear(c[0], c[1])),
            2 => Ok(closed_form::complex_quadratic(c[0], c[1], c[2])),
            n => {
                log::debug!("{{degree: {n}, strategy: {:?}}}", config.strategy);
                match config.strategy {
                    RootStrategy::Eigenvalue => {
                        eigenvalue::eigenvalue_roots(c, config.max_iter)
                    }
                    RootStrategy::Laguerre => laguerre::laguerre_roots(
                        c,
                        f64_to_real(config.epsilon),
                        config.max_iter,
                        false,
                    ),
                }
            }
        }
    }
}

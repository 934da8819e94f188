use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use num::Zero;

use crate::Scalar;

mod calculus;
mod conversions;
mod eval;
mod impl_num;

/// A dense polynomial in one variable.
///
/// Coefficients are stored highest degree first, so `[a, b, c]` is
/// `a*x^2 + b*x + c`. There is always at least one coefficient, and the
/// leading coefficient is only zero for the zero polynomial `[0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: Scalar>(pub(crate) Vec<T>);

impl<T: Scalar> Poly<T> {
    /// Build a polynomial from its coefficients, highest degree first.
    ///
    /// Exact leading zeros are dropped.
    ///
    /// ```
    /// use nurbs_poly::Poly;
    ///
    /// let p = Poly::new(&[0.0, 0.0, 1.0, 2.0]);
    /// assert_eq!(p.degree(), 1);
    /// assert_eq!(p.coeffs(), &[1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self::from_vec(coeffs.to_vec())
    }

    /// Same as [`Poly::new`], taking ownership of the coefficients.
    #[must_use]
    pub fn from_vec(coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self(coeffs).trimmed()
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(vec![T::zero()])
    }

    #[must_use]
    pub fn one() -> Self {
        Self(vec![T::one()])
    }

    /// A polynomial of degree 0.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self(vec![c])
    }

    /// Monic polynomial with the given roots, `(x - r_1)(x - r_2)...`
    ///
    /// ```
    /// use nurbs_poly::{poly, Poly};
    ///
    /// assert_eq!(Poly::from_roots(&[1.0, -1.0]), poly![1.0, 0.0, -1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        roots
            .iter()
            .map(|r| Self(vec![T::one(), -*r]))
            .fold(Self::one(), |acc, x| acc * x)
    }

    /// The degree of the polynomial. The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_trimmed());
        self.0.len() - 1
    }

    /// Coefficients, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.0
    }

    /// The coefficient of the highest power.
    #[must_use]
    pub fn leading(&self) -> T {
        self.0[0]
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        debug_assert!(self.is_trimmed());
        self.0.len() == 1 && self.0[0].is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        debug_assert!(self.is_trimmed());
        self.0.len() == 1 && self.0[0].is_one()
    }

    /// Iterate over the coefficients, highest degree first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Make the polynomial monic, returning the leading coefficient it had.
    ///
    /// If the leading coefficient is zero (only possible for the zero
    /// polynomial) nothing happens and `1` is returned.
    ///
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// let mut p = poly![2.0, 4.0, -6.0];
    /// assert_eq!(p.normalize(), 2.0);
    /// assert_eq!(p, poly![1.0, 2.0, -3.0]);
    /// ```
    pub fn normalize(&mut self) -> T {
        let lead = self.leading();
        if lead.is_zero() {
            return T::one();
        }
        for c in &mut self.0 {
            *c /= lead;
        }
        lead
    }

    /// Drop leading coefficients that are exactly zero.
    pub fn trim(&mut self) {
        self.trim_tolerance(<T::Real as Zero>::zero());
    }

    /// Drop leading coefficients whose modulus is at most `epsilon`. If
    /// every coefficient is dropped, the result is the zero polynomial.
    pub fn trim_tolerance(&mut self, epsilon: T::Real) {
        let first = self
            .0
            .iter()
            .position(|c| c.modulus() > epsilon)
            .unwrap_or(self.0.len());
        if first == self.0.len() {
            *self = Self::zero();
            return;
        }
        self.0.drain(..first);
    }

    /// [`Poly::trim_tolerance`] with a tolerance of `1E-8`.
    pub fn trim_real(&mut self) {
        self.trim_tolerance(crate::util::casting::f64_to_real(1E-8));
    }

    pub(crate) fn trimmed(mut self) -> Self {
        self.trim();
        self
    }

    pub(crate) fn is_trimmed(&self) -> bool {
        !self.0.is_empty() && (self.0.len() == 1 || !self.0[0].is_zero())
    }
}

impl<T: Scalar> Index<usize> for Poly<T> {
    type Output = T;

    /// The `i`-th coefficient, highest degree first.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Poly<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> Display for Poly<T> {
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, -2.5, 3.0].to_string(), "[1, -2.5, 3]");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use crate::Poly;

    #[test]
    fn new_trims_leading_zeros() {
        assert_eq!(poly![0.0, 0.0, 3.0].coeffs(), &[3.0]);
        assert_eq!(poly![0.0, 0.0].coeffs(), &[0.0]);
        assert_eq!(Poly::<f64>::new(&[]), Poly::zero());
    }

    #[test]
    fn degree_follows_length() {
        assert_eq!(poly![1.0, 2.0, 3.0].degree(), 2);
        assert_eq!(Poly::<f64>::zero().degree(), 0);
    }

    #[test]
    fn normalize_zero_is_noop() {
        let mut p = Poly::<f64>::zero();
        assert_eq!(p.normalize(), 1.0);
        assert!(p.is_zero());
    }

    #[test]
    fn trim_tolerance() {
        let mut p = poly![1E-14, -1E-10, 1.0, 2.0];
        p.trim_tolerance(1E-13);
        assert_eq!(p.coeffs(), &[-1E-10, 1.0, 2.0]);
        p.trim_real();
        assert_eq!(p.coeffs(), &[1.0, 2.0]);

        let mut tiny = poly![1E-9, 1E-10];
        tiny.trim_real();
        assert!(tiny.is_zero());
    }

    #[test]
    fn from_roots() {
        assert_eq!(Poly::from_roots(&[2.0, 3.0]), poly![1.0, -5.0, 6.0]);
        assert!(Poly::<f64>::from_roots(&[]).is_one());
    }

    #[test]
    fn display() {
        assert_eq!(poly![2.0, 0.5].to_string(), "[2, 0.5]");
        assert_eq!(poly![(1.0, 2.0), (0.0, -1.0)].to_string(), "[1+2i, 0-1i]");
    }

    #[test]
    fn index() {
        let p = poly![4.0, 5.0, 6.0];
        assert_eq!(p[0], 4.0);
        assert_eq!(p[2], 6.0);
        assert_eq!(p.leading(), 4.0);
    }
}

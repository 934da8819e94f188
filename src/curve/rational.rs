use crate::{util::casting::f64_to_real, Error, Poly, RealScalar, Result};

/// Higher-order denominator coefficients may only be dropped by the uniform
/// polish if they are below this fraction of the largest coefficient.
const UNIFORM_DROP_TOLERANCE: f64 = 1E-8;

/// A vector-valued rational function `numerators[d] / denominator`, one
/// polynomial piece of a [`crate::RationalCurve`].
#[derive(Clone, Debug, PartialEq)]
pub struct RationalFunction<T: RealScalar, const D: usize> {
    pub numerators: [Poly<T>; D],
    pub denominator: Poly<T>,
}

impl<T: RealScalar, const D: usize> RationalFunction<T, D> {
    /// Evaluate every component at `t`.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] if the denominator is exactly zero at `t`.
    pub fn eval(&self, t: T) -> Result<[T; D]> {
        let w = self.denominator.eval(t);
        if w.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(std::array::from_fn(|d| self.numerators[d].eval(t) / w))
    }

    /// Derivative of component `d` at `t` by the quotient rule, returned as
    /// the pair `(numerator, denominator)` of `(N'W - NW') / W^2` without the
    /// common `W^2`.
    pub(crate) fn derivative_parts(&self, d: usize, t: T) -> (T, T) {
        let n = &self.numerators[d];
        let w = &self.denominator;
        let num = n.diff().eval(t) * w.eval(t) - n.eval(t) * w.diff().eval(t);
        (num, w.eval(t))
    }

    /// Drop leading coefficients at most `epsilon` in magnitude from every
    /// polynomial.
    pub fn polish(&mut self, epsilon: T) {
        self.denominator.trim_tolerance(epsilon);
        for n in &mut self.numerators {
            n.trim_tolerance(epsilon);
        }
    }

    /// Polish for interior spans of a curve with uniform knots and linearly
    /// ramped weights, where the denominator is linear in exact arithmetic.
    ///
    /// The denominator is truncated to degree 1 only if every dropped
    /// coefficient is negligible next to the largest one. Returns `false`
    /// and falls back to [`RationalFunction::polish`] otherwise.
    pub fn polish_uniform_interior(&mut self, epsilon: T) -> bool {
        let coeffs = self.denominator.coeffs();
        let len = coeffs.len();
        if len <= 2 {
            self.polish(epsilon);
            return true;
        }

        let max = coeffs.iter().fold(T::zero(), |acc, c| acc.max(c.abs()));
        let tolerance = f64_to_real::<T>(UNIFORM_DROP_TOLERANCE) * max;
        if coeffs[..len - 2].iter().any(|c| c.abs() > tolerance) {
            self.polish(epsilon);
            return false;
        }

        self.denominator = Poly::new(&coeffs[len - 2..]);
        for n in &mut self.numerators {
            n.trim_tolerance(epsilon);
        }
        true
    }
}

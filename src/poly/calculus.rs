use itertools::chain;

use crate::{util::casting::usize_to_scalar, Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// Derivative
    ///
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].diff(), poly![2.0, 2.0]);
    /// ```
    #[must_use]
    pub fn diff(&self) -> Self {
        debug_assert!(self.is_trimmed());

        // derivative of constant is zero
        let n = self.degree();
        if n == 0 {
            return Self::zero();
        }

        let coeffs = self.0[..n]
            .iter()
            .enumerate()
            .map(|(i, c)| *c * usize_to_scalar(n - i))
            .collect();
        Self(coeffs).trimmed()
    }

    /// The `k`-th derivative.
    #[must_use]
    pub fn diff_n(&self, k: usize) -> Self {
        (0..k).fold(self.clone(), |acc, _| acc.diff())
    }

    /// Antiderivative (with C=0)
    ///
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![3.0, 2.0, 1.0].integral(), poly![1.0, 1.0, 1.0, 0.0]);
    /// ```
    #[must_use]
    pub fn integral(&self) -> Self {
        debug_assert!(self.is_trimmed());

        let n = self.degree();
        let coeffs = chain(
            self.0
                .iter()
                .enumerate()
                .map(|(i, c)| *c / usize_to_scalar(n - i + 1)),
            [T::zero()],
        )
        .collect();
        Self(coeffs).trimmed()
    }

    /// Integral over `[from, to]`, i.e. `F(to) - F(from)` for the
    /// antiderivative `F`.
    #[must_use]
    pub fn definite_integral(&self, from: T, to: T) -> T {
        let antiderivative = self.integral();
        antiderivative.eval(to) - antiderivative.eval(from)
    }
}

#[cfg(test)]
mod test {
    use crate::Poly;

    #[test]
    fn diff() {
        let p = poly![3.0, 2.0, 1.0];
        assert_eq!(p.diff(), poly![6.0, 2.0]);
    }

    #[test]
    fn diff_of_constant() {
        let one = poly![1.0];
        assert_eq!(one.diff(), Poly::zero());
        assert_eq!(one.diff().degree(), 0);
    }

    #[test]
    fn diff_n() {
        let p = poly![1.0, 0.0, 0.0, 0.0];
        assert_eq!(p.diff_n(2), poly![6.0, 0.0]);
        assert!(p.diff_n(4).is_zero());
        assert_eq!(p.diff_n(0), p);
    }

    #[test]
    fn integral() {
        let p = poly![3.0, 2.0, 1.0];
        assert_eq!(p.integral(), poly![1.0, 1.0, 1.0, 0.0]);
        assert!(Poly::<f64>::zero().integral().is_zero());
    }

    #[test]
    fn integral_diff() {
        let p = poly![4.0, -1.5, 0.25, 2.0];
        assert_eq!(p.integral().diff(), p);
    }

    #[test]
    fn definite_integral() {
        // x^2 - 1 over [0, 1]
        let p = poly![1.0f64, 0.0, -1.0];
        assert!((p.definite_integral(0.0, 1.0) + 2.0 / 3.0).abs() < 1E-15);
    }
}

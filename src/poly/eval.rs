use num::{Complex, Zero};

use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].eval(2.0), 11.0);
    /// ```
    pub fn eval(&self, x: T) -> T {
        // use Horner's method: https://en.wikipedia.org/wiki/Horner%27s_method
        debug_assert!(self.is_trimmed());
        self.0.iter().fold(T::zero(), |acc, c| acc * x + *c)
    }

    /// Compensated Horner scheme.
    ///
    /// Every product and sum of the regular Horner recurrence is split into
    /// its rounded value and its rounding error with [`Scalar::two_prod`] and
    /// [`Scalar::two_sum`]. The errors are accumulated in a second Horner
    /// recurrence and added back at the end, which gives roughly twice the
    /// working precision near roots and in ill-conditioned regions.
    ///
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// // (x - 1)^3 near its triple root
    /// let p = poly![1.0_f64, -3.0, 3.0, -1.0];
    /// let x: f64 = 1.0 + 1E-5;
    /// assert!((p.eval_compensated(x) - 1E-15).abs() < 1E-20);
    /// ```
    pub fn eval_compensated(&self, x: T) -> T {
        debug_assert!(self.is_trimmed());
        let mut s = T::zero();
        let mut c = T::zero();
        for a in &self.0 {
            let (p, pi) = T::two_prod(s, x);
            let (sum, sigma) = T::two_sum(p, *a);
            s = sum;
            c = c * x + (pi + sigma);
        }
        s + c
    }

    /// Evaluate at a complex point, promoting the coefficients.
    pub fn eval_complex(&self, z: Complex<T::Real>) -> Complex<T::Real> {
        debug_assert!(self.is_trimmed());
        self.0
            .iter()
            .fold(Complex::zero(), |acc, c| acc * z + c.to_complex())
    }
}

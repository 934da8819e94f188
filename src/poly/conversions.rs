use num::Complex;

use crate::{Poly, RealScalar, Scalar};

impl<T: Scalar> Poly<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    /// Promote every coefficient to a complex number.
    ///
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0].to_complex(), poly![(1.0, 0.0), (2.0, 0.0)]);
    /// ```
    #[must_use]
    pub fn to_complex(&self) -> Poly<Complex<T::Real>> {
        Poly(self.0.iter().map(Scalar::to_complex).collect())
    }
}

impl<T: RealScalar> Poly<Complex<T>> {
    /// Real parts of the coefficients.
    #[must_use]
    pub fn re(&self) -> Poly<T> {
        Poly::from_vec(self.0.iter().map(|c| c.re).collect())
    }
}

impl<T: Scalar> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_vec(value)
    }
}

impl<T: Scalar> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::new(value)
    }
}

impl<T: Scalar> From<Poly<T>> for Vec<T> {
    fn from(val: Poly<T>) -> Self {
        val.0
    }
}

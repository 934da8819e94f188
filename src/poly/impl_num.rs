#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations, operators and number theory

use itertools::{EitherOrBoth, Itertools};
use num::{One, Zero};
use std::{
    iter::Sum,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::{
    util::{doc_macros::panic_absurd_size, linalg::convolve_1d},
    Error, Poly, Result, Scalar,
};

impl<T: Scalar> Poly<T> {
    /// Calculate the quotient and remainder using long division. More efficient than
    /// calculating them separately.
    ///
    /// The results satisfy `self == divisor * quotient + remainder`, with the
    /// remainder of lower degree than the divisor. Dividing by a constant
    /// always leaves a zero remainder.
    ///
    /// # Errors
    /// - [`Error::DivideByZero`] if `divisor` is the zero polynomial
    /// - [`Error::Degree`] if `self` has a lower degree than `divisor`
    ///
    /// # Examples
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// // x^3 = (x - 1)(x^2 + x + 1) + 1
    /// let (q, r) = poly![1.0, 0.0, 0.0, 0.0].div_rem(&poly![1.0, -1.0]).unwrap();
    /// assert_eq!(q, poly![1.0, 1.0, 1.0]);
    /// assert_eq!(r, poly![1.0]);
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        debug_assert!(self.is_trimmed());
        debug_assert!(divisor.is_trimmed());

        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }

        let n = self.degree();
        let m = divisor.degree();
        if n < m {
            return Err(Error::Degree {
                dividend: n,
                divisor: m,
            });
        }

        let lead = divisor.leading();
        let mut rem = self.0.clone();
        let mut quot = Vec::with_capacity(n - m + 1);
        for i in 0..=n - m {
            let c = rem[i] / lead;
            quot.push(c);
            for (j, d) in divisor.iter().enumerate() {
                rem[i + j] -= c * *d;
            }
        }

        let remainder = if m == 0 {
            Self::zero()
        } else {
            Self::new(&rem[n - m + 1..])
        };
        Ok((Self::from_vec(quot), remainder))
    }

    /// Divide every coefficient by a scalar.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] if `rhs` is exactly zero.
    pub fn checked_div_scalar(&self, rhs: T) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self(self.0.iter().map(|c| *c / rhs).collect()).trimmed())
    }

    /// Raise to a non-negative integer power.
    ///
    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 1.0].pow(2), poly![1.0, 2.0, 1.0]);
    /// ```
    #[doc = panic_absurd_size!()]
    #[must_use]
    pub fn pow(&self, pow: u32) -> Self {
        debug_assert!(self.is_trimmed());

        if pow == 0 {
            return Self::one();
        }

        if pow == 1 || self.is_zero() || self.is_one() {
            return self.clone();
        }

        let mut res = self.clone();
        for _ in 1..pow {
            res = &res * self;
        }
        res
    }
}

impl<T: Scalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self(vec![T::zero()])
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl<T: Scalar> One for Poly<T> {
    fn one() -> Self {
        Self(vec![T::one()])
    }
}

impl<T: Scalar> Add<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: &Poly<T>) -> Self::Output {
        // invariant: polynomials are trimmed
        debug_assert!(self.is_trimmed());
        debug_assert!(rhs.is_trimmed());

        // align the constant terms by walking both from the back
        let sum = self
            .0
            .iter()
            .rev()
            .zip_longest(rhs.0.iter().rev())
            .map(|p| match p {
                EitherOrBoth::Both(l, r) => *l + *r,
                EitherOrBoth::Left(c) | EitherOrBoth::Right(c) => *c,
            })
            .collect_vec();
        Poly(sum.into_iter().rev().collect()).trimmed()
    }
}

impl<T: Scalar> Add<Self> for Poly<T> {
    type Output = Self;

    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0] + poly![1.0, 1.0], poly![1.0, 3.0, 4.0]);
    /// ```
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        &self + rhs
    }
}

impl<T: Scalar> Add<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn add(self, rhs: Poly<T>) -> Self::Output {
        self + &rhs
    }
}

impl<T: Scalar> Add<T> for Poly<T> {
    type Output = Self;

    /// Add a scalar to the constant term.
    fn add(mut self, rhs: T) -> Self::Output {
        let last = self.0.len() - 1;
        self.0[last] += rhs;
        self.trimmed()
    }
}

impl<T: Scalar> Sub<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: &Poly<T>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<T: Scalar> Sub<Self> for Poly<T> {
    type Output = Self;

    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0] - poly![1.0, 2.0, 1.0], poly![2.0]);
    /// ```
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn sub(self, rhs: Poly<T>) -> Self::Output {
        self - &rhs
    }
}

impl<T: Scalar> Mul<&Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: &Poly<T>) -> Self::Output {
        // invariant: polynomials are trimmed
        debug_assert!(self.is_trimmed());
        debug_assert!(rhs.is_trimmed());

        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        Poly(convolve_1d(&self.0, &rhs.0)).trimmed()
    }
}

impl<T: Scalar> Mul<Self> for Poly<T> {
    type Output = Self;

    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0] * poly![1.0, -2.0], poly![1.0, 0.0, -4.0]);
    /// ```
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Poly<T>> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: Poly<T>) -> Self::Output {
        self * &rhs
    }
}

impl<T: Scalar> Mul<T> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Poly(self.0.iter().map(|c| *c * rhs).collect()).trimmed()
    }
}

impl<T: Scalar> Mul<T> for Poly<T> {
    type Output = Self;

    /// ```
    /// use nurbs_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0] * 3.0, poly![3.0, 6.0]);
    /// ```
    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}

impl<T: Scalar> Div<T> for &Poly<T> {
    type Output = Poly<T>;

    /// # Panics
    /// Panics if `rhs` is zero, use [`Poly::checked_div_scalar`] to handle
    /// that case.
    fn div(self, rhs: T) -> Self::Output {
        self.checked_div_scalar(rhs)
            .expect("attempted to divide a polynomial by zero")
    }
}

impl<T: Scalar> Div<T> for Poly<T> {
    type Output = Self;

    /// # Panics
    /// Panics if `rhs` is zero, use [`Poly::checked_div_scalar`] to handle
    /// that case.
    fn div(self, rhs: T) -> Self::Output {
        &self / rhs
    }
}

impl<T: Scalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        Poly(self.0.iter().map(|c| -*c).collect())
    }
}

impl<T: Scalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Scalar> Sum for Poly<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: Scalar> Sum<&'a Poly<T>> for Poly<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Poly};

    #[test]
    fn add_aligns_constant_terms() {
        assert_eq!(poly![1.0, 0.0, 0.0] + poly![2.0], poly![1.0, 0.0, 2.0]);
        assert_eq!(poly![1.0, 2.0] + poly![-1.0, 0.0], poly![2.0]);
    }

    #[test]
    fn add_sub_identity() {
        let a = poly![3.0, -1.0, 0.5, 2.0];
        let b = poly![7.0, 0.25];
        assert_eq!(a.clone() + &b - &b, a);
    }

    #[test]
    fn sub_to_zero() {
        let a = poly![1.0, 2.0, 3.0];
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn mul_then_div_rem() {
        let a = poly![2.0, -3.0, 1.0, 4.0];
        let b = poly![1.0, 1.0];
        let (q, r) = (&a * &b).div_rem(&b).unwrap();
        assert_eq!(q, a);
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_by_constant() {
        let (q, r) = poly![2.0, 4.0].div_rem(&poly![2.0]).unwrap();
        assert_eq!(q, poly![1.0, 2.0]);
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_degree_error() {
        assert!(matches!(
            poly![1.0, 2.0].div_rem(&poly![1.0, 0.0, 0.0]),
            Err(Error::Degree {
                dividend: 1,
                divisor: 2
            })
        ));
    }

    #[test]
    fn div_rem_by_zero() {
        assert!(matches!(
            poly![1.0, 2.0].div_rem(&Poly::zero()),
            Err(Error::DivideByZero)
        ));
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(poly![1.0, 2.0] + 1.0, poly![1.0, 3.0]);
        assert_eq!(poly![2.0, 4.0] / 2.0, poly![1.0, 2.0]);
        assert!(matches!(
            poly![2.0, 4.0].checked_div_scalar(0.0),
            Err(Error::DivideByZero)
        ));
        assert!((poly![2.0, 4.0] * 0.0).is_zero());
    }

    #[test]
    #[should_panic(expected = "divide a polynomial by zero")]
    fn div_scalar_panics() {
        let _ = poly![1.0] / 0.0;
    }

    #[test]
    fn pow() {
        assert_eq!(
            poly![3.0, 2.0, 1.0].pow(2),
            poly![9.0, 12.0, 10.0, 4.0, 1.0]
        );
        assert!(poly![5.0, 1.0].pow(0).is_one());
    }

    #[test]
    fn sum() {
        let s: Poly<f64> = [poly![1.0, 0.0], poly![1.0], poly![2.0, 0.0, 0.0]]
            .into_iter()
            .sum();
        assert_eq!(s, poly![2.0, 1.0, 1.0]);
    }

    #[test]
    fn complex_div_rem() {
        // (x - i)(x + i) = x^2 + 1
        let p = poly![(1.0, 0.0), (0.0, 0.0), (1.0, 0.0)];
        let (q, r) = p.div_rem(&poly![(1.0, 0.0), (0.0, -1.0)]).unwrap();
        assert_eq!(q, poly![(1.0, 0.0), (0.0, 1.0)]);
        assert!(r.is_zero());
    }
}

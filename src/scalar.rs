use std::{
    fmt::{Debug, Display},
    ops::Neg,
};

use num::{traits::NumAssign, Complex, Float, FromPrimitive, Num};

/// A coefficient type for [`crate::Poly`], either real or complex.
///
/// Genericity over the scalar is expressed through this trait rather than
/// separate real and complex polynomial types. A polynomial with complex
/// coefficients is just `Poly<Complex<T>>`.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Num
    + NumAssign
    + Neg<Output = Self>
    + FromPrimitive
    + Send
    + Sync
    + 'static
{
    /// The type of the real part of a number. If the number is already real,
    /// this is just `Self`.
    type Real: RealScalar;

    /// Absolute value (complex modulus for complex numbers).
    fn modulus(&self) -> Self::Real;

    fn from_real(x: Self::Real) -> Self;

    fn to_complex(&self) -> Complex<Self::Real>;

    /// Error-free transformation of a sum: returns `(s, e)` with `s = fl(a + b)`
    /// and `a + b = s + e` exactly.
    fn two_sum(a: Self, b: Self) -> (Self, Self);

    /// Error-free transformation of a product: returns `(p, e)` with
    /// `p = fl(a * b)` and `a * b = p + e`. Exact for reals, first-order
    /// accurate for complex numbers.
    fn two_prod(a: Self, b: Self) -> (Self, Self);
}

/// A real floating point scalar.
pub trait RealScalar: Scalar<Real = Self> + Float {}

macro_rules! impl_real_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            type Real = Self;

            fn modulus(&self) -> Self {
                <$t>::abs(*self)
            }

            fn from_real(x: Self) -> Self {
                x
            }

            fn to_complex(&self) -> Complex<Self> {
                Complex::new(*self, 0.0)
            }

            fn two_sum(a: Self, b: Self) -> (Self, Self) {
                let s = a + b;
                let bs = s - a;
                let as_ = s - bs;
                (s, (b - bs) + (a - as_))
            }

            fn two_prod(a: Self, b: Self) -> (Self, Self) {
                let p = a * b;
                (p, <$t>::mul_add(a, b, -p))
            }
        }

        impl RealScalar for $t {}
    };
}

impl_real_scalar!(f32);
impl_real_scalar!(f64);

impl<T: RealScalar> Scalar for Complex<T> {
    type Real = T;

    fn modulus(&self) -> T {
        self.norm()
    }

    fn from_real(x: T) -> Self {
        Self::new(x, T::zero())
    }

    fn to_complex(&self) -> Self {
        *self
    }

    fn two_sum(a: Self, b: Self) -> (Self, Self) {
        // complex addition is component-wise, so is its error
        let (re, re_err) = T::two_sum(a.re, b.re);
        let (im, im_err) = T::two_sum(a.im, b.im);
        (Self::new(re, im), Self::new(re_err, im_err))
    }

    fn two_prod(a: Self, b: Self) -> (Self, Self) {
        // (a.re * b.re - a.im * b.im) + i (a.re * b.im + a.im * b.re), every
        // partial product and partial sum is split into value and error
        let (rr, rr_err) = T::two_prod(a.re, b.re);
        let (ii, ii_err) = T::two_prod(a.im, b.im);
        let (ri, ri_err) = T::two_prod(a.re, b.im);
        let (ir, ir_err) = T::two_prod(a.im, b.re);
        let (re, re_err) = T::two_sum(rr, -ii);
        let (im, im_err) = T::two_sum(ri, ir);
        (
            Self::new(re, im),
            Self::new(rr_err - ii_err + re_err, ri_err + ir_err + im_err),
        )
    }
}

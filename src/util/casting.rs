use num::{cast, Complex};

use crate::{RealScalar, Scalar};

pub(crate) fn usize_to_i32(x: usize) -> i32 {
    x.try_into().unwrap_or(i32::MAX)
}

pub(crate) fn usize_to_u32(x: usize) -> u32 {
    x.try_into().unwrap_or(u32::MAX)
}

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_f64(x: usize) -> f64 {
    cast(x).unwrap_or(f64::INFINITY)
}

/// Convert an `f64` constant into `T`, producing NaN if it cannot be represented.
pub(crate) fn f64_to_real<T: RealScalar>(x: f64) -> T {
    T::from_f64(x).unwrap_or_else(T::nan)
}

pub(crate) fn usize_to_real<T: RealScalar>(x: usize) -> T {
    f64_to_real(usize_to_f64(x))
}

pub(crate) fn usize_to_scalar<T: Scalar>(x: usize) -> T {
    T::from_real(usize_to_real(x))
}

pub(crate) fn c_to_f64<T: RealScalar>(z: Complex<T>) -> Complex<f64> {
    Complex::new(
        z.re.to_f64().unwrap_or(f64::NAN),
        z.im.to_f64().unwrap_or(f64::NAN),
    )
}

pub(crate) fn c_from_f64<T: RealScalar>(z: Complex<f64>) -> Complex<T> {
    Complex::new(f64_to_real(z.re), f64_to_real(z.im))
}

// internal utilities for dealing with Complex annoyances

use std::cmp::Ordering;

use num::Complex;

use crate::RealScalar;

// sort a vector of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut<T: RealScalar>(v: &mut [Complex<T>]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

/// Largest of two complex numbers by modulus, preferring `a` on ties
pub(crate) fn c_max_norm<T: RealScalar>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    if a.norm_sqr() >= b.norm_sqr() {
        a
    } else {
        b
    }
}

/// Snap a nearly-real number onto the real axis
pub(crate) fn c_snap_real<T: RealScalar>(z: Complex<T>, epsilon: T) -> Complex<T> {
    if z.im.abs() <= epsilon * z.re.abs().max(T::one()) {
        Complex::new(z.re, T::zero())
    } else {
        z
    }
}

#[cfg(test)]
mod test {
    use num::Complex;

    use super::{c_max_norm, c_snap_real, complex_sort_mut};

    #[test]
    fn sort_by_real_then_imaginary() {
        let mut v = vec![
            Complex::new(1.0, 0.0),
            Complex::new(-1.0, 2.0),
            Complex::new(-1.0, -2.0),
        ];
        complex_sort_mut(&mut v);
        assert_eq!(
            v,
            vec![
                Complex::new(-1.0, -2.0),
                Complex::new(-1.0, 2.0),
                Complex::new(1.0, 0.0)
            ]
        );
    }

    #[test]
    fn max_norm() {
        let a = Complex::new(0.0, 3.0);
        let b = Complex::new(-2.0, 0.0);
        assert_eq!(c_max_norm(a, b), a);
        assert_eq!(c_max_norm(b, a), a);
    }

    #[test]
    fn snap() {
        assert_eq!(
            c_snap_real(Complex::new(2.0, 1E-14), 1E-12),
            Complex::new(2.0, 0.0)
        );
        assert_eq!(
            c_snap_real(Complex::new(2.0, 1E-3), 1E-12),
            Complex::new(2.0, 1E-3)
        );
    }
}

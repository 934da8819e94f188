//! Closed-form solvers for low degrees.

use num::Complex;

use crate::{
    util::casting::{f64_to_real, usize_to_real},
    RealScalar, Root,
};

/// Below this the quadratic discriminant counts as zero.
const DISCRIMINANT_EPSILON: f64 = 1E-15;

/// Tolerance of the cubic degenerate case checks.
const CUBIC_EPSILON: f64 = 1E-12;

pub(super) fn linear<T: RealScalar>(a: T, b: T) -> Vec<Root<T>> {
    vec![Root::real(-b / a, 1)]
}

/// Quadratic formula, written so the two real roots never subtract two
/// nearly equal numbers.
pub(super) fn quadratic<T: RealScalar>(a: T, b: T, c: T) -> Vec<Root<T>> {
    let two = usize_to_real::<T>(2);
    let four = usize_to_real::<T>(4);

    let d = b * b - four * a * c;
    if d.abs() < f64_to_real(DISCRIMINANT_EPSILON) {
        return vec![Root::real(-b / (two * a), 2)];
    }

    if d > T::zero() {
        let q = -(b + b.signum() * d.sqrt()) / two;
        return vec![Root::real(q / a, 1), Root::real(c / q, 1)];
    }

    let re = -b / (two * a);
    let im = (-d).sqrt() / (two * a);
    vec![
        Root::simple(Complex::new(re, im)),
        Root::simple(Complex::new(re, -im)),
    ]
}

/// Cardano's method on the monic form `x^3 + a x^2 + b x + c`.
#[allow(clippy::many_single_char_names)]
#[allow(clippy::similar_names)]
pub(super) fn cubic<T: RealScalar>(c0: T, c1: T, c2: T, c3: T) -> Vec<Root<T>> {
    let n = usize_to_real::<T>;
    let eps = f64_to_real::<T>(CUBIC_EPSILON);

    let a = c1 / c0;
    let b = c2 / c0;
    let c = c3 / c0;

    let q = a * a - n(3) * b;
    let r = n(2) * a * a * a - n(9) * a * b + n(27) * c;
    let big_q = q / n(9);
    let big_r = r / n(54);
    let shift = a / n(3);

    // triple root
    if big_r.abs() < eps && big_q.abs() < eps {
        return vec![Root::real(-shift, 3)];
    }

    // one double and one simple root
    if (n(729) * r * r - n(2916) * q * q * q).abs() < eps {
        let sqrt_q = big_q.max(T::zero()).sqrt();
        if big_r > T::zero() {
            return vec![
                Root::real(-n(2) * sqrt_q - shift, 1),
                Root::real(sqrt_q - shift, 2),
            ];
        }
        return vec![
            Root::real(-sqrt_q - shift, 2),
            Root::real(n(2) * sqrt_q - shift, 1),
        ];
    }

    let r2 = big_r * big_r;
    let q3 = big_q * big_q * big_q;

    // three distinct real roots
    if r2 < q3 {
        let ratio = (big_r.signum() * (r2 / q3).sqrt()).max(-T::one()).min(T::one());
        let theta = ratio.acos();
        let norm = -n(2) * big_q.sqrt();
        let tau = f64_to_real::<T>(std::f64::consts::TAU);
        return vec![
            Root::real(norm * (theta / n(3)).cos() - shift, 1),
            Root::real(norm * ((theta + tau) / n(3)).cos() - shift, 1),
            Root::real(norm * ((theta - tau) / n(3)).cos() - shift, 1),
        ];
    }

    // one real root and a pair of roots from the deflated quadratic
    let big_a = -big_r.signum() * (big_r.abs() + (r2 - q3).sqrt()).cbrt();
    let big_b = if big_a.is_zero() {
        T::zero()
    } else {
        big_q / big_a
    };
    let root = big_a + big_b - shift;

    // synthetic division of the monic cubic by (x - root)
    let d1 = a + root;
    let d2 = b + root * d1;
    let mut roots = quadratic(T::one(), d1, d2);
    roots.push(Root::real(root, 1));
    roots
}

pub(super) fn complex_linear<T: RealScalar>(a: Complex<T>, b: Complex<T>) -> Vec<Root<T>> {
    vec![Root::simple(-b / a)]
}

pub(super) fn complex_quadratic<T: RealScalar>(
    a: Complex<T>,
    b: Complex<T>,
    c: Complex<T>,
) -> Vec<Root<T>> {
    let two = Complex::new(usize_to_real::<T>(2), T::zero());
    let four = Complex::new(usize_to_real::<T>(4), T::zero());

    let d = b * b - four * a * c;
    if d.norm() < f64_to_real(DISCRIMINANT_EPSILON) {
        return vec![Root::new(-b / (two * a), 2)];
    }

    // pick the sign that makes |b + s| large
    let mut s = d.sqrt();
    if (b.conj() * s).re < T::zero() {
        s = -s;
    }
    let q = -(b + s) / two;
    vec![Root::simple(q / a), Root::simple(c / q)]
}

#[cfg(test)]
mod test {
    use num::Complex;

    use super::{complex_quadratic, cubic, quadratic};
    use crate::{roots::expand_multiplicities, Poly, RootStrategy, __testing::roots_match};

    #[test]
    fn quadratic_double_root() {
        // (x - 3)^2
        let roots = quadratic(1.0, -6.0, 9.0);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].multiplicity, 2);
        assert_eq!(roots[0].value, complex!(3.0));
    }

    #[test]
    fn quadratic_no_cancellation() {
        // roots 1E8 and 1E-8, the textbook formula loses the small one
        let roots = quadratic(1.0, -(1E8 + 1E-8), 1.0);
        let small = roots
            .iter()
            .map(|r| r.value.re)
            .fold(f64::INFINITY, f64::min);
        assert!((small - 1E-8).abs() < 1E-22);
    }

    #[test]
    fn quadratic_complex_pair() {
        // x^2 + 2x + 5 = (x + 1 - 2i)(x + 1 + 2i)
        let roots = quadratic(1.0, 2.0, 5.0);
        assert!(roots_match(
            expand_multiplicities(&roots),
            vec![complex!(-1.0, 2.0), complex!(-1.0, -2.0)],
            1E-15,
        ));
    }

    #[test]
    fn cubic_triple_root() {
        // (x - 2)^3
        let roots = cubic(1.0, -6.0, 12.0, -8.0);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].multiplicity, 3);
        assert!((roots[0].value - complex!(2.0)).norm() < 1E-14);
    }

    #[test]
    fn cubic_double_root() {
        // (x - 1)^2 (x - 2)
        let roots = cubic(1.0, -4.0, 5.0, -2.0);
        assert_eq!(roots.len(), 2);
        let double = roots.iter().find(|r| r.multiplicity == 2).unwrap();
        let simple = roots.iter().find(|r| r.multiplicity == 1).unwrap();
        assert!((double.value - complex!(1.0)).norm() < 1E-14);
        assert!((simple.value - complex!(2.0)).norm() < 1E-14);

        // (x + 1)(x - 2)^2, the other sign of R
        let roots = cubic(2.0, -6.0, 0.0, 8.0);
        let double = roots.iter().find(|r| r.multiplicity == 2).unwrap();
        assert!((double.value - complex!(2.0)).norm() < 1E-14);
    }

    #[test]
    fn cubic_three_real_roots() {
        // 2 (x - 1)(x - 2)(x + 3)
        let roots = cubic(2.0, 0.0, -14.0, 12.0);
        assert!(roots_match(
            expand_multiplicities(&roots),
            vec![complex!(1.0), complex!(2.0), complex!(-3.0)],
            1E-12,
        ));
    }

    #[test]
    fn cubic_one_real_root() {
        // (x - 2)(x^2 + 1)
        let roots = cubic(1.0, -2.0, 1.0, -2.0);
        assert!(roots_match(
            expand_multiplicities(&roots),
            vec![complex!(2.0), complex!(0.0, 1.0), complex!(0.0, -1.0)],
            1E-12,
        ));
    }

    #[test]
    fn cubic_matches_eigenvalues() {
        for roots in [[0.3, -1.7, 4.2], [1.0, 1.5, 2.0], [-5.0, 0.1, 0.2]] {
            let p = Poly::from_roots(&roots) * 1.5;
            let closed = expand_multiplicities(&p.roots(RootStrategy::default()).unwrap());
            let eigen = expand_multiplicities(&p.roots_eigenvalue(1000).unwrap());
            assert!(roots_match(closed, eigen, 1E-6));
        }
    }

    #[test]
    fn complex_quadratic_roots() {
        // (x - i)(x - 2 - i)
        let p = Poly::from_roots(&[complex!(0.0, 1.0), complex!(2.0, 1.0)]);
        let c = p.coeffs();
        let roots = complex_quadratic(c[0], c[1], c[2]);
        assert!(roots_match(
            expand_multiplicities(&roots),
            vec![Complex::new(0.0, 1.0), Complex::new(2.0, 1.0)],
            1E-14,
        ));
    }
}

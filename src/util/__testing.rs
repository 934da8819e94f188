//! Testing utilities, do not depend on any of these in production!

use std::ops::Range;

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, Complex};

use crate::{Poly64, RationalCurve};

/// Seeded source of random test inputs.
pub struct Samples {
    rng: Rng,
}

impl Samples {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Uniform in `range`, never exactly on its lower end.
    pub fn uniform(&mut self, range: Range<f64>) -> f64 {
        debug_assert!(range.start <= range.end);
        // exact zeros make for degenerate test cases
        let x = self.rng.f64().max(f64::EPSILON);
        x.mul_add(range.end - range.start, range.start)
    }

    pub fn uniform_vec(&mut self, range: Range<f64>, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.uniform(range.clone())).collect()
    }

    /// Uniform over an annulus sector, `turns` being fractions of a full
    /// turn.
    pub fn annulus(&mut self, radius: Range<f64>, turns: Range<f64>) -> Complex64 {
        debug_assert!(radius.start >= 0.0 && turns.start >= 0.0 && turns.end <= 1.0);
        let r = self.uniform(radius);
        let a = self.uniform(turns);
        Complex::from_polar(r, a * std::f64::consts::TAU)
    }

    /// Polynomial of the given degree with coefficients drawn from `range`.
    pub fn poly(&mut self, range: Range<f64>, degree: usize) -> Poly64 {
        Poly64::from_vec(self.uniform_vec(range, degree + 1))
    }

    /// Non-monic polynomial with real roots drawn from `range`, the first of
    /// them repeated `multiplicity` times.
    pub fn real_roots_case(
        &mut self,
        range: Range<f64>,
        degree: usize,
        multiplicity: usize,
    ) -> (Poly64, Vec<Complex64>) {
        assert!((1..=degree).contains(&multiplicity));
        let mut roots = self.uniform_vec(range, degree + 1 - multiplicity);
        roots.extend(std::iter::repeat(roots[0]).take(multiplicity - 1));
        let poly = Poly64::from_roots(&roots) * self.uniform(1.0..10.0);
        (poly, roots.into_iter().map(|r| complex!(r)).collect())
    }

    /// Real polynomial whose complex roots come in conjugate pairs, plus one
    /// real root on odd degrees.
    pub fn conjugate_roots_case(
        &mut self,
        radius: Range<f64>,
        turns: Range<f64>,
        degree: usize,
    ) -> (Poly64, Vec<Complex64>) {
        let mut poly = Poly64::one();
        let mut roots = Vec::with_capacity(degree);
        for _ in 0..degree / 2 {
            let z = self.annulus(radius.clone(), turns.clone());
            // (x - z)(x - z*) = x^2 - 2 re(z) x + |z|^2
            poly = poly * Poly64::new(&[1.0, -2.0 * z.re, z.norm_sqr()]);
            roots.extend([z, z.conj()]);
        }
        if degree % 2 == 1 {
            let r = self.uniform(-radius.end..radius.end);
            poly = poly * Poly64::new(&[1.0, -r]);
            roots.push(complex!(r));
        }
        (poly * self.uniform(1.0..10.0), roots)
    }

    /// Planar curve on open-uniform knots, with `n` control points in
    /// `[-5, 5)^2` and weights in `[0.5, 2)`.
    ///
    /// # Panics
    /// If the counts do not make a valid curve.
    pub fn curve(&mut self, degree: usize, n: usize) -> RationalCurve<f64, 2> {
        let weights = self.uniform_vec(0.5..2.0, n);
        let points = (0..n)
            .map(|_| [self.uniform(-5.0..5.0), self.uniform(-5.0..5.0)])
            .collect();
        RationalCurve::with_uniform_knots(degree, weights, points)
            .expect("test curve should be well formed")
    }
}

/// Every found root lies within `tol` of a distinct expected root.
///
/// Roots are paired greedily, each found root taking its nearest expected
/// root that is still free.
#[must_use]
pub fn roots_match(found: Vec<Complex64>, mut free: Vec<Complex64>, tol: f64) -> bool {
    if found.len() != free.len() {
        return false;
    }
    found.iter().all(|z| {
        let nearest = free
            .iter()
            .position_min_by(|a, b| (z - *a).norm().total_cmp(&(z - *b).norm()));
        nearest.is_some_and(|i| (z - free.swap_remove(i)).norm() <= tol)
    })
}

#[cfg(test)]
mod test {
    use super::{roots_match, Samples};

    #[test]
    fn conjugate_case_has_real_coefficients() {
        let mut samples = Samples::new(1);
        let (poly, expected) = samples.conjugate_roots_case(0.5..2.0, 0.0..0.5, 5);
        assert_eq!(poly.degree(), 5);
        assert_eq!(expected.len(), 5);
        for z in expected {
            assert!(poly.eval_complex(z).norm() < 1E-10);
        }
    }

    #[test]
    fn repeated_root_case() {
        let mut samples = Samples::new(2);
        let (poly, roots) = samples.real_roots_case(-2.0..2.0, 6, 3);
        assert_eq!(poly.degree(), 6);
        assert_eq!(roots.iter().filter(|z| **z == roots[0]).count(), 3);
    }

    #[test]
    fn curves_are_reproducible() {
        let a = Samples::new(3).curve(3, 7).sample_points(5).unwrap();
        let b = Samples::new(3).curve(3, 7).sample_points(5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn matching_pairs_each_root_once() {
        assert!(roots_match(
            vec![complex!(1.0), complex!(2.0)],
            vec![complex!(2.0 + 1E-9), complex!(1.0)],
            1E-8
        ));
        assert!(!roots_match(
            vec![complex!(1.0), complex!(1.0)],
            vec![complex!(1.0), complex!(2.0)],
            1E-8
        ));
        assert!(!roots_match(vec![complex!(1.0)], Vec::new(), 1.0));
    }
}

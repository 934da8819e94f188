//! Closed-form integration of rational functions and of quantities derived
//! from [`RationalCurve`]s.
//!
//! A proper rational function is split into pole terms by partial fractions,
//! every pole term has an elementary antiderivative:
//!
//! ```text
//! c / (t - r)     ->  c ln(t - r)
//! c / (t - r)^k   ->  c / (1 - k) (t - r)^(1 - k)
//! ```
//!
//! Poles are complex in general, so results are complex too. For real
//! inputs the imaginary part is rounding noise.

use anyhow::anyhow;
use num::{Complex, Zero};

use crate::{
    curve::RationalFunction,
    util::casting::{usize_to_i32, usize_to_real, usize_to_u32},
    Error, Poly, RationalCurve, RealScalar, Result, Root, RootStrategy,
};

mod partial_fractions;
mod quadrature;

pub use partial_fractions::PoleTerm;

/// Exact `∫ num / den` over `[from, to]`.
///
/// # Errors
/// - [`Error::DivideByZero`]: `den` is the zero polynomial.
/// - [`Error::NoConverge`]: the roots of `den` could not be found.
/// - [`Error::Other`]: the partial fraction system is singular.
///
/// # Examples
/// ```
/// use nurbs_poly::{integrate::integrate_rational, poly, RootStrategy};
///
/// // 1 / (t^2 + 1) over [0, 1] is atan(1)
/// let area = integrate_rational(&poly![1.0f64], &poly![1.0, 0.0, 1.0], 0.0, 1.0, RootStrategy::default())
///     .unwrap();
/// assert!((area.re - std::f64::consts::FRAC_PI_4).abs() < 1E-14);
/// ```
pub fn integrate_rational<T: RealScalar>(
    num: &Poly<T>,
    den: &Poly<T>,
    from: T,
    to: T,
    strategy: RootStrategy,
) -> Result<Complex<T>> {
    let factored = FactoredDenominator::new(den, strategy)?;
    factored.integrate_power(num, 1, from, to)
}

/// Exact `∫ num / monic_den` over `[from, to]`, where `roots` are the roots
/// of the monic denominator with their multiplicities.
///
/// # Errors
/// [`Error::Other`] if the multiplicities of `roots` do not add up to the
/// degree of `monic_den`, or if two of the roots coincide.
pub fn integrate_with_roots<T: RealScalar>(
    num: &Poly<T>,
    monic_den: &Poly<T>,
    roots: &[Root<T>],
    from: T,
    to: T,
) -> Result<Complex<T>> {
    let n: usize = roots.iter().map(|r| r.multiplicity).sum();
    if n != monic_den.degree() {
        return Err(anyhow!(
            "{n} roots given for a denominator of degree {}",
            monic_den.degree()
        )
        .into());
    }

    let (quotient, remainder) = split(num, monic_den)?;
    let mut total = Complex::new(quotient.definite_integral(from, to), T::zero());
    if remainder.is_zero() {
        return Ok(total);
    }

    for term in partial_fractions::partial_fractions(&remainder, roots)? {
        total += pole_integral(&term, from, to);
    }
    Ok(total)
}

/// Decompose `num / prod (t - r_i)^m_i` into pole terms. The degree of
/// `num` must be lower than the sum of the multiplicities.
///
/// # Errors
/// [`Error::Other`] if two of the roots coincide.
pub fn partial_fractions<T: RealScalar>(
    num: &Poly<T>,
    roots: &[Root<T>],
) -> Result<Vec<PoleTerm<T>>> {
    partial_fractions::partial_fractions(num, roots)
}

fn pole_integral<T: RealScalar>(term: &PoleTerm<T>, from: T, to: T) -> Complex<T> {
    let a = Complex::new(from, T::zero()) - term.root;
    let b = Complex::new(to, T::zero()) - term.root;
    if term.order == 1 {
        return term.coefficient * (b.ln() - a.ln());
    }
    let exponent = 1 - usize_to_i32(term.order);
    let scale = Complex::new(usize_to_real::<T>(term.order - 1), T::zero());
    -term.coefficient / scale * (b.powi(exponent) - a.powi(exponent))
}

/// `(p / w, p % w)`, or `(0, p)` when `p` is already proper.
fn split<T: RealScalar>(p: &Poly<T>, w: &Poly<T>) -> Result<(Poly<T>, Poly<T>)> {
    if p.degree() >= w.degree() {
        p.div_rem(w)
    } else {
        Ok((Poly::zero(), p.clone()))
    }
}

/// A denominator `lead * prod (t - r_i)^m_i`, factored once and integrated
/// against several numerators and powers.
struct FactoredDenominator<T: RealScalar> {
    lead: T,
    monic: Poly<T>,
    roots: Vec<Root<T>>,
}

impl<T: RealScalar> FactoredDenominator<T> {
    fn new(den: &Poly<T>, strategy: RootStrategy) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::DivideByZero);
        }
        let mut monic = den.clone();
        let lead = monic.normalize();
        let roots = monic.roots(strategy)?;
        log::trace!("{{denominator: {den}, roots: {roots:?}}}");
        Ok(Self { lead, monic, roots })
    }

    /// `∫ num / den^k` over `[from, to]`.
    fn integrate_power(&self, num: &Poly<T>, k: usize, from: T, to: T) -> Result<Complex<T>> {
        if num.is_zero() {
            return Ok(Complex::zero());
        }
        let scaled = num.checked_div_scalar(self.lead.powi(usize_to_i32(k)))?;
        let roots: Vec<Root<T>> = self
            .roots
            .iter()
            .map(|r| Root::new(r.value, r.multiplicity * k))
            .collect();
        integrate_with_roots(&scaled, &self.monic.pow(usize_to_u32(k)), &roots, from, to)
    }
}

/// Sum `f` over the parts of every segment that overlap `[t0, t1]`. Reversed
/// bounds flip the sign.
fn over_segments<T: RealScalar, const D: usize>(
    curve: &RationalCurve<T, D>,
    t0: T,
    t1: T,
    mut f: impl FnMut(&RationalFunction<T, D>, T, T) -> Result<T>,
) -> Result<T> {
    if t1 < t0 {
        return Ok(-over_segments(curve, t1, t0, f)?);
    }
    let mut total = T::zero();
    for (i, segment) in curve.segments().iter().enumerate() {
        let (start, end) = curve.segment_range(i);
        if start > t1 {
            break;
        }
        if end < t0 {
            continue;
        }
        let (from, to) = (start.max(t0), end.min(t1));
        if from < to {
            total += f(segment, from, to)?;
        }
    }
    Ok(total)
}

impl<T: RealScalar, const D: usize> RationalCurve<T, D> {
    /// Exact `∫ x_d(t) dt` over `[from, to]`.
    ///
    /// # Errors
    /// Same as [`integrate_rational`].
    ///
    /// # Panics
    /// If `d` is not a dimension of the curve.
    pub fn integrate_component(&self, d: usize, from: T, to: T) -> Result<T> {
        assert!(d < D, "dimension {d} out of range for a {D}-dimensional curve");
        over_segments(self, from, to, |segment, a, b| {
            let factored = FactoredDenominator::new(&segment.denominator, RootStrategy::default())?;
            Ok(factored.integrate_power(&segment.numerators[d], 1, a, b)?.re)
        })
    }
}

impl<T: RealScalar> RationalCurve<T, 2> {
    /// Signed area `∫ y dx = ∫ y(t) x'(t) dt` over the parameter interval
    /// `[t0, t1]`, computed in closed form.
    ///
    /// Every segment is written as `y = Y/W`, `x = X/W` and its integrand
    /// `y x' = (Y/W)(X'/W) - (Y/W)(X/W)(W'/W)` is expanded by splitting each
    /// factor into a polynomial and a proper fraction. This leaves a
    /// polynomial plus terms over `W`, `W^2` and `W^3` of low degree.
    ///
    /// # Errors
    /// Same as [`integrate_rational`].
    ///
    /// # Examples
    /// ```
    /// use nurbs_poly::{RationalCurve, RootStrategy};
    ///
    /// // quarter circle from (1, 0) to (0, 1), traversed with decreasing x
    /// let w = std::f64::consts::FRAC_1_SQRT_2;
    /// let curve = RationalCurve::new(
    ///     2,
    ///     vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    ///     vec![1.0, w, 1.0],
    ///     vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    /// )
    /// .unwrap();
    /// let area = curve.area_integral(0.0, 1.0, RootStrategy::default()).unwrap();
    /// assert!((area + std::f64::consts::FRAC_PI_4).abs() < 1E-12);
    /// ```
    pub fn area_integral(&self, t0: T, t1: T, strategy: RootStrategy) -> Result<T> {
        over_segments(self, t0, t1, |segment, from, to| {
            let [x, y] = &segment.numerators;
            let w = &segment.denominator;
            let factored = FactoredDenominator::new(w, strategy)?;

            let (qy, ry) = split(y, w)?;
            let (qdx, rdx) = split(&x.diff(), w)?;
            let (qx, rx) = split(x, w)?;
            let (qdw, rdw) = split(&w.diff(), w)?;

            let qyqx = &qy * &qx;
            let qyrx = &qy * &rx;
            let ryqx = &ry * &qx;
            let ryrx = &ry * &rx;
            let terms = [
                &qy * &qdx - &qyqx * &qdw,
                &qy * &rdx + &ry * &qdx - (&qyqx * &rdw + &qyrx * &qdw + &ryqx * &qdw),
                &ry * &rdx - (&qyrx * &rdw + &ryqx * &rdw + &ryrx * &qdw),
                -(&ryrx * &rdw),
            ];

            let mut total = Complex::new(terms[0].definite_integral(from, to), T::zero());
            for (k, term) in (1..).zip(&terms[1..]) {
                total += factored.integrate_power(term, k, from, to)?;
            }
            Ok(total.re)
        })
    }

    /// Same as [`RationalCurve::area_integral`], integrating
    /// `Y (X'W - XW') / W^3` directly over the cubed denominator.
    ///
    /// # Errors
    /// Same as [`integrate_rational`].
    pub fn area_integral_cubed(&self, t0: T, t1: T, strategy: RootStrategy) -> Result<T> {
        over_segments(self, t0, t1, |segment, from, to| {
            let [x, y] = &segment.numerators;
            let w = &segment.denominator;
            let factored = FactoredDenominator::new(w, strategy)?;
            let num = y * &(&x.diff() * w - x * &w.diff());
            Ok(factored.integrate_power(&num, 3, from, to)?.re)
        })
    }

    /// Signed area `∫ y dx` over `[t0, t1]` by composite 5-point
    /// Gauss-Legendre quadrature with `subdivisions` pieces per segment.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] if a weight vanishes at a quadrature node.
    pub fn numerical_area_integral(&self, t0: T, t1: T, subdivisions: usize) -> Result<T> {
        over_segments(self, t0, t1, |segment, from, to| {
            let integrand = |t: T| {
                let (dx, w) = segment.derivative_parts(0, t);
                if w.is_zero() {
                    return Err(Error::DivideByZero);
                }
                let y = segment.numerators[1].eval(t) / w;
                Ok(y * dx / (w * w))
            };
            quadrature::gauss_legendre(integrand, from, to, subdivisions)
        })
    }
}

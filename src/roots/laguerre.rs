use num::{Complex, One, Zero};

use crate::{
    util::{
        casting::{f64_to_real, usize_to_real},
        complex::{c_max_norm, c_snap_real},
    },
    Error, Poly, RealScalar, Result, Root,
};

/// Trailing coefficients below this are treated as zero roots.
const ZERO_TAIL: f64 = 1E-16;

/// Every this many steps a shortened step is taken to break limit cycles.
const CYCLE_BREAK_PERIOD: usize = 10;

/// Step fractions used to break limit cycles.
const CYCLE_BREAK_FRACTIONS: [f64; 8] = [0.5, 0.25, 0.75, 0.13, 0.38, 0.62, 0.88, 1.0];

/// Laguerre steps spent polishing each root on the undeflated polynomial.
const POLISH_STEPS: usize = 4;

/// Laguerre's method with deflation.
///
/// `coeffs` are highest degree first and trimmed. If `real_input` is set,
/// roots that are real up to `epsilon` get their imaginary part removed.
pub(super) fn laguerre_roots<T: RealScalar>(
    coeffs: &[Complex<T>],
    epsilon: T,
    max_iter: usize,
    real_input: bool,
) -> Result<Vec<Root<T>>> {
    let mut roots = vec![];
    if coeffs.len() < 2 {
        return Ok(roots);
    }

    // exact zero roots are split off before iterating
    let tail = f64_to_real::<T>(ZERO_TAIL);
    let zeros = coeffs[1..]
        .iter()
        .rev()
        .take_while(|c| c.norm() < tail)
        .count();
    if zeros > 0 {
        roots.push(Root::new(Complex::zero(), zeros));
    }
    let undeflated = Poly::new(&coeffs[..coeffs.len() - zeros]);

    let mut work = undeflated.clone();
    while work.degree() > 0 {
        let x = laguerre(&work, epsilon, max_iter)?;
        roots.push(Root::simple(x));
        work = work.div_rem(&Poly::new(&[Complex::one(), -x]))?.0;
    }

    for root in roots.iter_mut().skip(usize::from(zeros > 0)) {
        root.value = polish(&undeflated, root.value, epsilon);
        if real_input {
            root.value = c_snap_real(root.value, epsilon);
        }
    }
    Ok(roots)
}

/// Lower bound on the modulus of the roots, used as a starting point.
fn lower_bound<T: RealScalar>(poly: &Poly<Complex<T>>) -> T {
    let lead = poly.leading();
    let max = poly
        .iter()
        .skip(1)
        .map(|c| (*c / lead).norm())
        .fold(T::zero(), T::max);
    T::one() / (T::one() + max)
}

/// Bound on the rounding error of a Horner evaluation at `x`.
fn eval_error_bound<T: RealScalar>(poly: &Poly<Complex<T>>, x: Complex<T>) -> T {
    let abs_x = x.norm();
    let sum = poly
        .iter()
        .fold(T::zero(), |acc, c| acc * abs_x + c.norm());
    usize_to_real::<T>(4 * poly.degree() + 4) * T::epsilon() * sum
}

/// One Laguerre step from `x`, `None` if `x` is a root up to rounding.
fn step<T: RealScalar>(
    poly: &Poly<Complex<T>>,
    d1: &Poly<Complex<T>>,
    d2: &Poly<Complex<T>>,
    x: Complex<T>,
) -> Option<Complex<T>> {
    let px = poly.eval(x);
    if px.norm() <= eval_error_bound(poly, x) {
        return None;
    }
    let n = Complex::from(usize_to_real::<T>(poly.degree()));
    let g = d1.eval(x) / px;
    let h = g * g - d2.eval(x) / px;
    let sq = ((n - Complex::one()) * (n * h - g * g)).sqrt();
    let denom = c_max_norm(g + sq, g - sq);
    if denom.is_zero() {
        // flat spot, move off it along a circle
        return Some(Complex::from_polar(T::one() + x.norm(), T::one()));
    }
    Some(n / denom)
}

fn laguerre<T: RealScalar>(
    poly: &Poly<Complex<T>>,
    epsilon: T,
    max_iter: usize,
) -> Result<Complex<T>> {
    let d1 = poly.diff();
    let d2 = d1.diff();

    // a purely real start can never leave the real axis for real input
    let start = lower_bound(poly);
    let mut x = Complex::new(start, start * f64_to_real(1E-3));

    for i in 1..=max_iter {
        if poly.eval(x).norm() < epsilon {
            return Ok(x);
        }
        let Some(mut dx) = step(poly, &d1, &d2, x) else {
            return Ok(x);
        };
        if i % CYCLE_BREAK_PERIOD == 0 {
            let k = (i / CYCLE_BREAK_PERIOD) % CYCLE_BREAK_FRACTIONS.len();
            dx = dx.scale(f64_to_real(CYCLE_BREAK_FRACTIONS[k]));
        }
        x -= dx;
        log::trace!("{{iteration: {i}, guess: {x}, step: {}}}", dx.norm());
        if dx.norm() < epsilon * x.norm().max(T::one()) {
            return Ok(x);
        }
    }

    log::trace!("did not converge {{guess: {x}, poly: {poly}}}");
    Err(Error::NoConverge { max_iter })
}

/// Refine `x` on the undeflated polynomial. The refined value is only kept
/// if it has a smaller residual and stays close to `x`.
fn polish<T: RealScalar>(poly: &Poly<Complex<T>>, x: Complex<T>, epsilon: T) -> Complex<T> {
    let d1 = poly.diff();
    let d2 = d1.diff();

    let mut y = x;
    for _ in 0..POLISH_STEPS {
        match step(poly, &d1, &d2, y) {
            Some(dy) => y -= dy,
            None => break,
        }
    }

    let improves = poly.eval(y).norm() < poly.eval(x).norm();
    let close = (y - x).norm() <= epsilon.sqrt() * x.norm().max(T::one());
    if improves && close {
        return y;
    }
    if improves {
        log::warn!("rejected polished root {{root: {x}, polished: {y}}}");
    }
    x
}

use anyhow::anyhow;
use num::{Complex, Zero};

use crate::{util::linalg::solve_columns, Poly, RealScalar, Result, Root};

/// One term `coefficient / (t - root)^order` of a partial fraction
/// decomposition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoleTerm<T> {
    pub root: Complex<T>,
    pub order: usize,
    pub coefficient: Complex<T>,
}

/// Decompose `num / prod (t - r_i)^m_i` into pole terms.
///
/// The terms of each root are found on their own. Near `r` with
/// multiplicity `m`, write `s = t - r` and `num / den = g(s) / s^m` with
/// `g = num / q` and `q` the product of the other factors. The coefficient
/// of `1 / s^k` is the Taylor coefficient `g_(m-k)`, and matching the Taylor
/// series of `num = g q` gives a lower triangular Toeplitz system in the
/// first `m` coefficients of `g`.
///
/// Only the principal parts are returned, so a numerator of too high a
/// degree loses its polynomial part.
///
/// # Errors
/// [`crate::Error::Other`] if a local system is singular, which happens when
/// two of the given roots coincide.
pub(crate) fn partial_fractions<T: RealScalar>(
    num: &Poly<T>,
    roots: &[Root<T>],
) -> Result<Vec<PoleTerm<T>>> {
    let num = num.to_complex();
    let mut terms = Vec::with_capacity(roots.iter().map(|r| r.multiplicity).sum());

    for (i, root) in roots.iter().enumerate() {
        let m = root.multiplicity;
        let r = root.value;

        let rhs = taylor_coefficients(num.coeffs(), r, m);
        let mut cofactor = vec![Complex::zero(); m];
        cofactor[0] = Complex::new(T::one(), T::zero());
        for other in roots.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, o)| o) {
            for _ in 0..other.multiplicity {
                mul_linear(&mut cofactor, r - other.value);
            }
        }

        // column j of the Toeplitz matrix is the cofactor series shifted by j
        let columns: Vec<Vec<Complex<T>>> = (0..m)
            .map(|j| {
                let mut column = vec![Complex::zero(); j];
                column.extend_from_slice(&cofactor[..m - j]);
                column
            })
            .collect();
        let g = solve_columns(&columns, &rhs)
            .ok_or_else(|| anyhow!("singular partial fraction system at root {r}"))?;

        terms.extend((1..=m).map(|order| PoleTerm {
            root: r,
            order,
            coefficient: g[m - order],
        }));
    }
    Ok(terms)
}

/// First `count` Taylor coefficients of the polynomial at `x`, lowest order
/// first, by repeated synthetic division.
fn taylor_coefficients<T: RealScalar>(
    coeffs: &[Complex<T>],
    x: Complex<T>,
    count: usize,
) -> Vec<Complex<T>> {
    let mut work = coeffs.to_vec();
    let mut taylor = Vec::with_capacity(count);
    for _ in 0..count {
        let mut acc = Complex::zero();
        let mut quotient = Vec::with_capacity(work.len());
        for c in &work {
            acc = acc * x + c;
            quotient.push(acc);
        }
        taylor.push(quotient.pop().unwrap_or_else(Complex::zero));
        work = quotient;
    }
    taylor
}

/// Multiply a truncated power series in `s`, lowest order first, by `s + d`.
fn mul_linear<T: RealScalar>(series: &mut [Complex<T>], d: Complex<T>) {
    for k in (0..series.len()).rev() {
        let carry = if k > 0 { series[k - 1] } else { Complex::zero() };
        series[k] = series[k] * d + carry;
    }
}

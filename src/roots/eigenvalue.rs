use num::{Complex, Zero};

use crate::{
    util::{
        casting::f64_to_real,
        complex::complex_sort_mut,
        linalg::{companion, eigenvalues},
    },
    Error, RealScalar, Result, Root,
};

/// Eigenvalues smaller than this are reported as exact zeros.
const SNAP_TO_ZERO: f64 = 1E-15;

/// Roots as the eigenvalues of the Frobenius companion matrix of the
/// normalized polynomial, sorted by real part. `coeffs` are highest degree
/// first and trimmed.
pub(super) fn eigenvalue_roots<T: RealScalar>(
    coeffs: &[Complex<T>],
    max_iter: usize,
) -> Result<Vec<Root<T>>> {
    if coeffs.len() < 2 {
        return Ok(vec![]);
    }

    let lead = coeffs[0];
    let monic: Vec<_> = coeffs.iter().map(|c| *c / lead).collect();
    let matrix = companion(&monic);

    let mut values: Vec<Complex<T>> =
        eigenvalues(matrix, max_iter).ok_or(Error::NoConverge { max_iter })?;
    complex_sort_mut(&mut values);
    log::trace!("{{eigenvalues: {values:?}}}");

    let snap = f64_to_real::<T>(SNAP_TO_ZERO);
    Ok(values
        .into_iter()
        .map(|z| if z.norm() < snap { Complex::zero() } else { z })
        .map(Root::simple)
        .collect())
}

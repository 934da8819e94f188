use na::{DMatrix, DVector};
use num::Complex;

use crate::{
    util::casting::{c_from_f64, c_to_f64},
    RealScalar, Scalar,
};

pub(crate) fn convolve_1d<T: Scalar>(input: &[T], kernel: &[T]) -> Vec<T> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    debug_assert!(input_len + kernel_len > 0);
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![T::zero(); output_len];

    for (i, a) in input.iter().enumerate() {
        for (j, b) in kernel.iter().enumerate() {
            output[i + j] += *a * *b;
        }
    }
    output
}

/// Frobenius companion matrix of a monic polynomial with descending
/// coefficients `[1, a_1, ..., a_n]`, whose eigenvalues are the roots.
///
/// ```text
/// [0, 0, ..., 0, -a_n    ]
/// [1, 0, ..., 0, -a_{n-1}]
/// [0, 1, ..., 0, -a_{n-2}]
/// [:, :, ..., :,   :     ]
/// [0, 0, ..., 1, -a_1    ]
/// ```
pub(crate) fn companion<T: RealScalar>(monic: &[Complex<T>]) -> DMatrix<Complex<f64>> {
    debug_assert!(monic.len() >= 2);
    let n = monic.len() - 1;
    let mut m = DMatrix::<Complex<f64>>::zeros(n, n);
    for i in 1..=n {
        m[(i - 1, n - 1)] = -c_to_f64(monic[n - i + 1]);
    }
    for i in 0..n - 1 {
        m[(i + 1, i)] = Complex::new(1.0, 0.0);
    }
    m
}

/// Eigenvalues through the complex Schur decomposition, `None` if the QR
/// iterations did not converge.
pub(crate) fn eigenvalues<T: RealScalar>(
    matrix: DMatrix<Complex<f64>>,
    max_iter: usize,
) -> Option<Vec<Complex<T>>> {
    let schur = matrix.try_schur(f64::EPSILON, max_iter)?;
    let values = schur.eigenvalues()?;
    Some(values.iter().copied().map(c_from_f64).collect())
}

/// Solve the dense square system `A x = b` with partial-pivoting LU,
/// `None` if the system is singular.
///
/// `columns[j]` holds the j-th column of `A`.
pub(crate) fn solve_columns<T: RealScalar>(
    columns: &[Vec<Complex<T>>],
    rhs: &[Complex<T>],
) -> Option<Vec<Complex<T>>> {
    let n = rhs.len();
    debug_assert_eq!(columns.len(), n);
    if n == 0 {
        return Some(vec![]);
    }
    let a = DMatrix::<Complex<f64>>::from_fn(n, n, |i, j| c_to_f64(columns[j][i]));
    let b = DVector::<Complex<f64>>::from_iterator(n, rhs.iter().copied().map(c_to_f64));
    let x = a.lu().solve(&b)?;
    if x.iter().any(|z| z.re.is_nan() || z.im.is_nan()) {
        return None;
    }
    Some(x.iter().copied().map(c_from_f64).collect())
}

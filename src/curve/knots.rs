//! Knot vector and parameter helpers.

use crate::{util::casting::usize_to_real, RealScalar};

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// ```
/// use nurbs_poly::curve::knots::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
#[must_use]
pub fn linspace<T: RealScalar>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let last = usize_to_real::<T>(n - 1);
            let mut values: Vec<T> = (0..n)
                .map(|i| start + (end - start) * usize_to_real::<T>(i) / last)
                .collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Open-uniform (clamped) knot vector on `[0, 1]` for `n` control points of
/// the given degree. The first and last knots are repeated `degree + 1`
/// times, the interior knots are evenly spaced.
///
/// ```
/// use nurbs_poly::curve::knots::open_uniform;
///
/// assert_eq!(open_uniform::<f64>(4, 2), vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0]);
/// ```
///
/// # Panics
/// If `n < degree + 1`.
#[must_use]
pub fn open_uniform<T: RealScalar>(n: usize, degree: usize) -> Vec<T> {
    assert!(n > degree, "need at least degree + 1 control points");
    let spans = n - degree;
    let mut knots = vec![T::zero(); degree + 1];
    knots.extend((1..spans).map(|i| usize_to_real::<T>(i) / usize_to_real::<T>(spans)));
    knots.extend(std::iter::repeat(T::one()).take(degree + 1));
    knots
}

/// Knot indices where non-empty spans of the domain start, followed by the
/// index of the domain end.
pub(crate) fn boundaries<T: RealScalar>(knots: &[T], domain: (usize, usize)) -> Vec<usize> {
    let (start, end) = domain;
    (start..end)
        .filter(|&k| knots[k] < knots[k + 1])
        .chain(std::iter::once(end))
        .collect()
}

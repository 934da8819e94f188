use crate::{Poly, RealScalar, Result};

use super::RationalFunction;

/// Polynomial pieces of the span starting at knot `k`.
///
/// Runs the de Boor recurrence on polynomial-valued homogeneous points
/// `(P w, w)`, so the result is the weighted numerator in every dimension
/// and the weight function as denominator, valid on `[knots[k], knots[k+1]]`.
pub(super) fn de_boor_span<T: RealScalar, const D: usize>(
    k: usize,
    degree: usize,
    knots: &[T],
    weights: &[T],
    control_points: &[[T; D]],
) -> Result<RationalFunction<T, D>> {
    let p = degree;
    debug_assert!(k >= p);
    debug_assert!(k + 1 < knots.len());

    let mut den: Vec<Poly<T>> = (0..=p).map(|i| Poly::constant(weights[i + k - p])).collect();
    let mut num: Vec<[Poly<T>; D]> = (0..=p)
        .map(|i| {
            let w = weights[i + k - p];
            let point = &control_points[i + k - p];
            std::array::from_fn(|d| Poly::constant(point[d] * w))
        })
        .collect();

    for r in 1..=p {
        for j in (r..=p).rev() {
            let lo = knots[j + k - p];
            let hi = knots[j + 1 + k - r];
            // (t - lo) d_j + (hi - t) d_{j-1}, over (hi - lo)
            let rising = Poly::new(&[T::one(), -lo]);
            let falling = Poly::new(&[-T::one(), hi]);
            let width = hi - lo;
            let blend = |right: &Poly<T>, left: &Poly<T>| {
                (&rising * right + &falling * left).checked_div_scalar(width)
            };

            den[j] = blend(&den[j], &den[j - 1])?;
            for d in 0..D {
                num[j][d] = blend(&num[j][d], &num[j - 1][d])?;
            }
        }
    }

    let denominator = den.swap_remove(p);
    let numerators = num.swap_remove(p);
    Ok(RationalFunction {
        numerators,
        denominator,
    })
}

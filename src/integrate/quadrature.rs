use crate::{
    util::casting::{f64_to_real, usize_to_real},
    RealScalar, Result,
};

/// Nodes of the 5-point Gauss-Legendre rule on `[-1, 1]`.
const NODES: [f64; 5] = [
    0.0,
    -0.538_469_310_105_683_1,
    0.538_469_310_105_683_1,
    -0.906_179_845_938_664_0,
    0.906_179_845_938_664_0,
];

const WEIGHTS: [f64; 5] = [
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
    0.236_926_885_056_189_1,
];

/// Composite 5-point Gauss-Legendre quadrature of `f` over `[from, to]`,
/// split into `subdivisions` equal pieces (at least one).
///
/// Exact for polynomials up to degree 9 on each piece.
pub(crate) fn gauss_legendre<T: RealScalar>(
    f: impl Fn(T) -> Result<T>,
    from: T,
    to: T,
    subdivisions: usize,
) -> Result<T> {
    let pieces = subdivisions.max(1);
    let two = usize_to_real::<T>(2);
    let h = (to - from) / usize_to_real(pieces);
    let half = h / two;

    let mut sum = T::zero();
    for i in 0..pieces {
        let mid = from + h * usize_to_real(i) + half;
        for (node, weight) in NODES.iter().zip(WEIGHTS) {
            sum += f64_to_real::<T>(weight) * f(mid + half * f64_to_real(*node))?;
        }
    }
    Ok(sum * half)
}

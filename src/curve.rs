//! Rational B-spline (NURBS) curves as piecewise rational polynomials.
//!
//! A curve is split into one [`RationalFunction`] per non-empty knot span at
//! construction time. Everything else (sampling, slopes, integrals) works on
//! those polynomial pieces.

use std::io;

use anyhow::anyhow;

use crate::{
    util::{casting::f64_to_real, doc_macros::errors_divide_by_zero},
    Error, RealScalar, Result,
};

mod de_boor;
pub mod knots;
mod rational;

pub use rational::RationalFunction;

/// Default tolerance of [`RationalCurve::polish`].
pub const POLISH_EPSILON: f64 = 1E-13;

/// A rational B-spline curve in `D` dimensions.
///
/// ```
/// use nurbs_poly::RationalCurve;
///
/// // quarter of the unit circle
/// let w = std::f64::consts::FRAC_1_SQRT_2;
/// let curve = RationalCurve::new(
///     2,
///     vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
///     vec![1.0, w, 1.0],
///     vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
/// )
/// .unwrap();
/// let [x, y] = curve.point_at(0.5).unwrap();
/// assert!((x.hypot(y) - 1.0).abs() < 1E-15);
/// ```
#[derive(Clone, Debug)]
pub struct RationalCurve<T: RealScalar, const D: usize> {
    degree: usize,
    knots: Vec<T>,
    weights: Vec<T>,
    control_points: Vec<[T; D]>,
    domain: (usize, usize),
    boundaries: Vec<usize>,
    segments: Vec<RationalFunction<T, D>>,
}

impl<T: RealScalar, const D: usize> RationalCurve<T, D> {
    /// Curve with explicit knots and weights.
    ///
    /// # Errors
    /// [`Error::DegenerateConstruction`] if the inputs do not describe a
    /// curve: no control points, degree 0, too few control points for the
    /// degree, mismatched knot or weight counts, decreasing or non-finite
    /// knots, non-positive weights, or an empty domain.
    pub fn new(
        degree: usize,
        knots: Vec<T>,
        weights: Vec<T>,
        control_points: Vec<[T; D]>,
    ) -> Result<Self> {
        let mut curve = Self::build(degree, knots, weights, control_points)?;
        curve.polish(f64_to_real(POLISH_EPSILON));
        Ok(curve)
    }

    /// Curve with open-uniform knots on `[0, 1]`.
    ///
    /// # Errors
    /// Same as [`RationalCurve::new`].
    pub fn with_uniform_knots(
        degree: usize,
        weights: Vec<T>,
        control_points: Vec<[T; D]>,
    ) -> Result<Self> {
        check_counts::<D>(degree, control_points.len())?;
        let knots = knots::open_uniform(control_points.len(), degree);
        Self::new(degree, knots, weights, control_points)
    }

    /// Curve with open-uniform knots on `[0, 1]` and weights ramping linearly
    /// from `w_start` to `w_end`.
    ///
    /// With such weights the denominator of every interior span is linear,
    /// so interior denominators are truncated to degree 1 when the discarded
    /// terms are negligible.
    ///
    /// # Errors
    /// Same as [`RationalCurve::new`].
    pub fn with_weight_ramp(
        degree: usize,
        w_start: T,
        w_end: T,
        control_points: Vec<[T; D]>,
    ) -> Result<Self> {
        check_counts::<D>(degree, control_points.len())?;
        let n = control_points.len();
        let knots = knots::open_uniform(n, degree);
        let weights = knots::linspace(w_start, w_end, n);
        let mut curve = Self::build(degree, knots, weights, control_points)?;
        curve.polish_uniform(f64_to_real(POLISH_EPSILON));
        Ok(curve)
    }

    fn build(
        degree: usize,
        knots: Vec<T>,
        weights: Vec<T>,
        control_points: Vec<[T; D]>,
    ) -> Result<Self> {
        let n = control_points.len();
        check_counts::<D>(degree, n)?;
        if weights.len() != n {
            return Err(degenerate(format!(
                "expected {n} weights, got {}",
                weights.len()
            )));
        }
        if knots.len() != n + degree + 1 {
            return Err(degenerate(format!(
                "expected {} knots, got {}",
                n + degree + 1,
                knots.len()
            )));
        }
        if knots.iter().any(|k| !k.is_finite()) || knots.windows(2).any(|w| w[0] > w[1]) {
            return Err(degenerate("knots must be finite and non-decreasing".into()));
        }
        if weights.iter().any(|w| !w.is_finite() || *w <= T::zero()) {
            return Err(degenerate("weights must be finite and positive".into()));
        }

        let domain = (degree, knots.len() - degree - 1);
        if knots[domain.0] >= knots[domain.1] {
            return Err(degenerate("the curve domain has zero length".into()));
        }

        let boundaries = knots::boundaries(&knots, domain);
        let segments = boundaries[..boundaries.len() - 1]
            .iter()
            .map(|&k| de_boor::de_boor_span(k, degree, &knots, &weights, &control_points))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("{{degree: {degree}, segments: {}}}", segments.len());

        Ok(Self {
            degree,
            knots,
            weights,
            control_points,
            domain,
            boundaries,
            segments,
        })
    }

    /// Drop leading coefficients at most `epsilon` in magnitude from every
    /// segment. Constructors already do this with [`POLISH_EPSILON`].
    pub fn polish(&mut self, epsilon: T) {
        for segment in &mut self.segments {
            segment.polish(epsilon);
        }
    }

    fn polish_uniform(&mut self, epsilon: T) {
        let len = self.segments.len();
        let edge = self.degree - 1;
        if len <= 2 * edge {
            log::debug!("too few segments for uniform polishing {{segments: {len}}}");
            self.polish(epsilon);
            return;
        }
        for (i, segment) in self.segments.iter_mut().enumerate() {
            if i < edge || i >= len - edge {
                segment.polish(epsilon);
            } else if !segment.polish_uniform_interior(epsilon) {
                log::warn!("interior denominator is not linear, keeping it {{segment: {i}}}");
            }
        }
    }

    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    #[must_use]
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    #[must_use]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    #[must_use]
    pub fn control_points(&self) -> &[[T; D]] {
        &self.control_points
    }

    /// Knot indices bounding the parameter domain.
    #[must_use]
    pub const fn domain(&self) -> (usize, usize) {
        self.domain
    }

    /// Knot indices where each segment starts, followed by the domain end.
    #[must_use]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    #[must_use]
    pub fn segments(&self) -> &[RationalFunction<T, D>] {
        &self.segments
    }

    /// Parameter values covered by the domain.
    #[must_use]
    pub fn parameter_range(&self) -> (T, T) {
        (self.knots[self.domain.0], self.knots[self.domain.1])
    }

    /// Parameter interval of segment `i`.
    ///
    /// # Panics
    /// If `i` is not a segment index.
    #[must_use]
    pub fn segment_range(&self, i: usize) -> (T, T) {
        (
            self.knots[self.boundaries[i]],
            self.knots[self.boundaries[i + 1]],
        )
    }

    /// Evaluate segment `i` at `t`. The segment polynomials extend beyond
    /// their own interval, which is useful to check continuity at
    /// boundaries.
    ///
    /// # Errors
    #[doc = errors_divide_by_zero!()]
    ///
    /// # Panics
    /// If `i` is not a segment index.
    pub fn eval_segment(&self, i: usize, t: T) -> Result<[T; D]> {
        self.segments[i].eval(t)
    }

    /// Point on the curve at parameter `t`.
    ///
    /// # Errors
    #[doc = errors_divide_by_zero!()]
    /// - [`Error::Other`]: `t` is outside the parameter domain.
    pub fn point_at(&self, t: T) -> Result<[T; D]> {
        let (start, end) = self.parameter_range();
        if !(start <= t && t <= end) {
            return Err(anyhow!("parameter {t} outside of the curve domain [{start}, {end}]").into());
        }
        self.segments[self.segment_index(t)].eval(t)
    }

    /// Segment owning parameter `t`, where boundary parameters belong to the
    /// segment on their left.
    fn segment_index(&self, t: T) -> usize {
        (0..self.segments.len() - 1)
            .find(|&i| t <= self.segment_range(i).1)
            .unwrap_or(self.segments.len() - 1)
    }

    /// Evaluate the curve at `n` evenly spaced parameters over the whole
    /// domain, both ends included.
    ///
    /// # Errors
    #[doc = errors_divide_by_zero!()]
    pub fn sample_points(&self, n: usize) -> Result<Vec<[T; D]>> {
        self.sample(n, |segment, t| segment.eval(t))
    }

    /// Walk `n` evenly spaced parameters and the segments together, both are
    /// monotonic so each is visited once.
    fn sample<R>(
        &self,
        n: usize,
        f: impl Fn(&RationalFunction<T, D>, T) -> Result<R>,
    ) -> Result<Vec<R>> {
        let (start, end) = self.parameter_range();
        let mut segment = 0;
        knots::linspace(start, end, n)
            .into_iter()
            .map(|t| {
                while segment + 1 < self.segments.len() && t > self.segment_range(segment).1 {
                    segment += 1;
                }
                f(&self.segments[segment], t)
            })
            .collect()
    }

    /// Write the numerator of dimension `d` of every segment, one polynomial
    /// per line.
    ///
    /// # Errors
    /// Any error of the writer, or [`io::ErrorKind::InvalidInput`] if `d` is
    /// not a dimension of the curve.
    pub fn write_numerators(&self, d: usize, w: &mut impl io::Write) -> io::Result<()> {
        if d >= D {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("dimension {d} out of range for a {D}-dimensional curve"),
            ));
        }
        for segment in &self.segments {
            writeln!(w, "{}", segment.numerators[d])?;
        }
        Ok(())
    }

    /// Write the denominator of every segment, one polynomial per line.
    ///
    /// # Errors
    /// Any error of the writer.
    pub fn write_denominators(&self, w: &mut impl io::Write) -> io::Result<()> {
        for segment in &self.segments {
            writeln!(w, "{}", segment.denominator)?;
        }
        Ok(())
    }
}

impl<T: RealScalar> RationalCurve<T, 2> {
    /// Slope `dy/dx` at `n` evenly spaced parameters over the domain.
    ///
    /// A vertical tangent gives an infinity carrying the sign of `dy/dt`.
    ///
    /// # Errors
    /// - [`Error::DivideByZero`]: the weight vanishes at a requested
    ///   parameter.
    pub fn sample_slope(&self, n: usize) -> Result<Vec<T>> {
        self.sample(n, |segment, t| {
            let (dx, w) = segment.derivative_parts(0, t);
            let (dy, _) = segment.derivative_parts(1, t);
            if w.is_zero() {
                return Err(Error::DivideByZero);
            }
            if dx.is_zero() {
                return Ok(if dy.is_sign_negative() {
                    T::neg_infinity()
                } else {
                    T::infinity()
                });
            }
            Ok(dy / dx)
        })
    }
}

fn check_counts<const D: usize>(degree: usize, n: usize) -> Result<()> {
    if n == 0 || D == 0 {
        return Err(degenerate("no control points".into()));
    }
    if degree == 0 {
        return Err(degenerate("degree must be at least 1".into()));
    }
    if n < degree + 1 {
        return Err(degenerate(format!(
            "degree {degree} needs at least {} control points, got {n}",
            degree + 1
        )));
    }
    Ok(())
}

const fn degenerate(reason: String) -> Error {
    Error::DegenerateConstruction(reason)
}

#[cfg(test)]
mod test {
    use super::RationalCurve;
    use crate::Error;

    fn quarter_circle() -> RationalCurve<f64, 2> {
        RationalCurve::new(
            2,
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            vec![1.0, std::f64::consts::FRAC_1_SQRT_2, 1.0],
            vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        )
        .unwrap()
    }

    #[test]
    fn line() {
        let curve =
            RationalCurve::with_uniform_knots(1, vec![1.0f64, 1.0], vec![[0.0, 0.0], [2.0, 4.0]])
                .unwrap();
        assert_eq!(curve.segments().len(), 1);
        assert_eq!(curve.boundaries(), &[1, 2]);
        let points = curve.sample_points(3).unwrap();
        assert_eq!(points, vec![[0.0, 0.0], [1.0, 2.0], [2.0, 4.0]]);
        let slopes = curve.sample_slope(3).unwrap();
        assert!(slopes.iter().all(|s| (s - 2.0).abs() < 1E-15));
    }

    #[test]
    fn quarter_circle_points_on_circle() {
        let curve = quarter_circle();
        for [x, y] in curve.sample_points(17).unwrap() {
            assert!((x.hypot(y) - 1.0).abs() < 1E-14);
        }
        let ends = curve.sample_points(2).unwrap();
        for (point, expected) in ends.iter().zip([[1.0, 0.0], [0.0, 1.0]]) {
            assert!((point[0] - expected[0]).abs() < 1E-15);
            assert!((point[1] - expected[1]).abs() < 1E-15);
        }
    }

    #[test]
    fn quarter_circle_slope() {
        // tangent of the circle at (x, y) has slope -x / y
        let curve = quarter_circle();
        let points = curve.sample_points(9).unwrap();
        let slopes = curve.sample_slope(9).unwrap();
        // vertical at (1, 0), with y increasing
        assert_eq!(slopes[0], f64::INFINITY);
        for ([x, y], s) in points.iter().zip(slopes).skip(1) {
            assert!((s + x / y).abs() < 1E-12);
        }
    }

    #[test]
    fn vertical_tangent_sign() {
        // x = 1 - t^2 turns back at t = 0 while y falls
        let curve = RationalCurve::with_uniform_knots(
            2,
            vec![1.0f64, 1.0, 1.0],
            vec![[1.0, 0.0], [1.0, -1.0], [0.0, -2.0]],
        )
        .unwrap();
        let slopes = curve.sample_slope(3).unwrap();
        assert_eq!(slopes[0], f64::NEG_INFINITY);
        assert!(slopes[1].is_finite());
    }

    #[test]
    fn vanishing_weight_is_divide_by_zero() {
        let mut curve = quarter_circle();
        curve.segments[0].denominator = poly![1.0, -1.0];
        assert!(matches!(curve.sample_slope(2), Err(Error::DivideByZero)));
    }

    #[test]
    fn continuity_at_boundaries() {
        let points: Vec<[f64; 2]> = vec![
            [0.0, 0.0],
            [1.0, 2.0],
            [2.0, -1.0],
            [3.0, 3.0],
            [4.0, 0.5],
            [5.0, 1.0],
            [6.0, -2.0],
        ];
        let weights = vec![1.0f64, 0.5, 2.0, 1.5, 0.75, 1.0, 3.0];
        let curve = RationalCurve::with_uniform_knots(3, weights, points).unwrap();
        assert_eq!(curve.segments().len(), 4);
        for i in 0..curve.segments().len() - 1 {
            let t = curve.segment_range(i).1;
            let left = curve.eval_segment(i, t).unwrap();
            let right = curve.eval_segment(i + 1, t).unwrap();
            for d in 0..2 {
                assert!((left[d] - right[d]).abs() < 1E-8);
            }
        }
    }

    #[test]
    fn weight_ramp_truncates_interior_denominators() {
        let points: Vec<[f64; 2]> = (0..9)
            .map(|i| {
                let t = f64::from(i);
                [t, (t * 0.7).sin()]
            })
            .collect();
        let curve = RationalCurve::with_weight_ramp(3, 1.0, 3.0, points.clone()).unwrap();
        let reference =
            RationalCurve::with_uniform_knots(3, crate::curve::knots::linspace(1.0, 3.0, 9), points)
                .unwrap();
        let len = curve.segments().len();
        assert_eq!(len, 6);
        for segment in &curve.segments()[2..len - 2] {
            assert!(segment.denominator.degree() <= 1);
        }
        let a = curve.sample_points(50).unwrap();
        let b = reference.sample_points(50).unwrap();
        for (p, q) in a.iter().zip(&b) {
            assert!((p[0] - q[0]).abs() < 1E-10);
            assert!((p[1] - q[1]).abs() < 1E-10);
        }
    }

    #[test]
    fn point_at_outside_domain() {
        let curve = quarter_circle();
        assert!(matches!(curve.point_at(1.5), Err(Error::Other(_))));
        assert!(curve.point_at(1.0).is_ok());
    }

    #[test]
    fn degenerate_inputs() {
        let no_points: Vec<[f64; 2]> = vec![];
        assert!(matches!(
            RationalCurve::with_uniform_knots(2, vec![], no_points),
            Err(Error::DegenerateConstruction(_))
        ));
        assert!(matches!(
            RationalCurve::with_uniform_knots(0, vec![1.0f64], vec![[1.0]]),
            Err(Error::DegenerateConstruction(_))
        ));
        assert!(matches!(
            RationalCurve::with_uniform_knots(3, vec![1.0f64; 2], vec![[1.0], [2.0]]),
            Err(Error::DegenerateConstruction(_))
        ));
        assert!(matches!(
            RationalCurve::with_uniform_knots(1, vec![1.0f64], vec![[1.0], [2.0]]),
            Err(Error::DegenerateConstruction(_))
        ));
        assert!(matches!(
            RationalCurve::new(1, vec![0.0f64, 1.0, 0.5, 1.0], vec![1.0; 2], vec![[1.0], [2.0]]),
            Err(Error::DegenerateConstruction(_))
        ));
        assert!(matches!(
            RationalCurve::new(1, vec![0.0f64, 0.0, 1.0], vec![1.0; 2], vec![[1.0], [2.0]]),
            Err(Error::DegenerateConstruction(_))
        ));
        assert!(matches!(
            RationalCurve::with_uniform_knots(1, vec![1.0f64, -1.0], vec![[1.0], [2.0]]),
            Err(Error::DegenerateConstruction(_))
        ));
        assert!(matches!(
            RationalCurve::new(1, vec![0.0f64, 1.0, 1.0, 1.0], vec![1.0; 2], vec![[1.0], [2.0]]),
            Err(Error::DegenerateConstruction(_))
        ));
    }

    #[test]
    fn export() {
        let curve = quarter_circle();
        let mut out = vec![];
        curve.write_denominators(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with('['));

        let mut out = vec![];
        curve.write_numerators(1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
        assert!(curve.write_numerators(2, &mut vec![]).is_err());
    }
}

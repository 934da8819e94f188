/// Build a polynomial from its coefficients, highest degree first.
///
/// Tuples are read as complex coefficients `(re, im)`.
///
/// ```
/// use nurbs_poly::{poly, Poly};
///
/// assert_eq!(poly![1.0, 2.0, 3.0], Poly::new(&[1.0, 2.0, 3.0]));
/// assert_eq!(poly![(1.0, 1.0), (0.0, 2.0)].degree(), 1);
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        <$crate::Poly<f64>>::zero()
    };
    ($(($re:expr, $im:expr)),+ $(,)?) => {
        $crate::Poly::new(&[$($crate::num::Complex::new($re, $im)),+])
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(&[$($c),+])
    };
}

/// Shorthand for `Complex::new`, with the imaginary part defaulting to zero.
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::Complex::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

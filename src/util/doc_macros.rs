//! Macros for reducing doc comment boilerplate.

/// Documents panics due to absurdly large polynomials
macro_rules! panic_absurd_size {
    () => {
        r"May theoretically panic for absurdly large polynomials, however such polynomials will likely not fit in memory anyway.\n\n"
    }
}
pub(crate) use panic_absurd_size;

/// Default explanation for [`crate::Error::NoConverge`] errors.
macro_rules! errors_no_converge {
    () => {
        r"- [`crate::Error::NoConverge`]: the root finder did not converge within the configured number of iterations.\n"
    };
}
pub(crate) use errors_no_converge;

/// Default explanation for [`crate::Error::DivideByZero`] errors at evaluation points.
macro_rules! errors_divide_by_zero {
    () => {
        r"- [`crate::Error::DivideByZero`]: a denominator evaluated to exactly zero at a requested parameter.\n"
    };
}
pub(crate) use errors_divide_by_zero;

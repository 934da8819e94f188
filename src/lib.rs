//! Dense polynomials over real and complex scalars, root finding across all
//! degrees, and exact evaluation and integration of rational (NURBS) curves.
//!
//! # Examples
//!
//! ```
//! use nurbs_poly::{poly, RootStrategy};
//!
//! // x^2 - 1
//! let p = poly![1.0_f64, 0.0, -1.0];
//! let roots = p.roots(RootStrategy::default()).unwrap();
//! assert_eq!(roots.len(), 2);
//! assert!((p.definite_integral(0.0, 1.0) + 2.0 / 3.0).abs() < 1E-15);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

extern crate nalgebra as na;

pub use num;

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::{RealScalar, Scalar};

mod poly;
pub use poly::Poly;

pub mod roots;
pub use roots::{Root, RootStrategy, RootsConfig};

pub mod curve;
pub use curve::{RationalCurve, RationalFunction};

pub mod integrate;

mod util;

// re-exported by crate root
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
pub type CPoly32 = Poly<num::Complex<f32>>;
pub type CPoly64 = Poly<num::Complex<f64>>;

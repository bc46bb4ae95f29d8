//! Right-triangle side arithmetic.
//!
//! Given two sides of a right triangle, compute the third; given three,
//! check whether they satisfy `a² + b² = c²`.
//!
//! Every operation is a pure function over `f64` side lengths. Inputs are
//! validated up front and violations are reported through [`TriangleError`],
//! never clamped or coerced.
//!
//! ```
//! use pythagoras::prelude::*;
//!
//! assert_eq!(compute_hypotenuse(3.0, 4.0).unwrap(), 5.0);
//! assert!(is_right_triangle(5.0, 3.0, 4.0).unwrap());
//! // `validate_triangle` trusts the caller's choice of hypotenuse.
//! assert!(!validate_triangle(5.0, 4.0, 3.0).unwrap());
//! ```

pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use triangle::{
    compute_hypotenuse, compute_side_a, compute_side_b, is_right_triangle, is_right_triangle_eps,
    validate_triangle, validate_triangle_eps, TriangleCfg, TriangleError, RIGHT_EPS,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::triangle::{
        compute_hypotenuse, compute_side_a, compute_side_b, is_right_triangle,
        is_right_triangle_eps, validate_triangle, validate_triangle_eps, TriangleCfg,
        TriangleError, RIGHT_EPS,
    };
}

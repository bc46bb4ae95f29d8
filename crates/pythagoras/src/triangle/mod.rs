//! Right-triangle operations over plain `f64` side lengths.
//!
//! Purpose
//! - Solve for a missing side (`compute_*`) or check the Pythagorean
//!   relation on three given sides (`is_right_triangle`, `validate_triangle`).
//! - Keep the API minimal and numerically explicit (eps-aware checks).
//!
//! Two checks, on purpose
//! - `is_right_triangle` sorts its inputs and treats the longest side as the
//!   hypotenuse, so it is invariant under argument permutation.
//! - `validate_triangle` takes the third argument as the hypotenuse as given.
//!   `validate_triangle(5, 4, 3)` is `false` even though {3, 4, 5} is right.
//!
//! Code cross-refs: `TriangleCfg`, `TriangleError`, `RIGHT_EPS`

mod cfg;
mod checks;
mod solvers;
mod types;
mod util;

pub use cfg::RIGHT_EPS;
pub use checks::{
    is_right_triangle, is_right_triangle_eps, validate_triangle, validate_triangle_eps,
};
pub use solvers::{compute_hypotenuse, compute_side_a, compute_side_b};
pub use types::{TriangleCfg, TriangleError};

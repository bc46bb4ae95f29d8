//! Error type and tolerance configuration.
//!
//! - `TriangleError`: the ways an input can be rejected.
//! - `TriangleCfg`: carries the tolerance for the boolean checks.

use std::fmt;

use super::cfg::RIGHT_EPS;
use super::checks::{is_right_triangle_eps, validate_triangle_eps};

/// Errors surfaced by every triangle operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriangleError {
    /// A side length is not strictly positive and finite (zero, negative, NaN, inf).
    InvalidInput { param: &'static str, value: f64 },
    /// The designated hypotenuse is not longer than the other given side.
    InvalidGeometry { hypotenuse: f64, side: f64 },
    /// The hypotenuse of two finite legs exceeds `f64::MAX`.
    Overflow { side_a: f64, side_b: f64 },
}

impl TriangleError {
    pub(crate) fn invalid_input(param: &'static str, value: f64) -> Self {
        Self::InvalidInput { param, value }
    }

    pub(crate) fn invalid_geometry(hypotenuse: f64, side: f64) -> Self {
        Self::InvalidGeometry { hypotenuse, side }
    }

    pub(crate) fn overflow(side_a: f64, side_b: f64) -> Self {
        Self::Overflow { side_a, side_b }
    }

    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    #[inline]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { param, value } => write!(
                f,
                "all sides must be finite and greater than zero ({param} = {value})"
            ),
            Self::InvalidGeometry { hypotenuse, side } => write!(
                f,
                "hypotenuse must be longer than the other sides (hypotenuse = {hypotenuse}, side = {side})"
            ),
            Self::Overflow { side_a, side_b } => write!(
                f,
                "hypotenuse exceeds the f64 range (side_a = {side_a}, side_b = {side_b})"
            ),
        }
    }
}

impl std::error::Error for TriangleError {}

/// Tolerance configuration for the right-angle checks.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    pub eps_right: f64,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            eps_right: RIGHT_EPS,
        }
    }
}

impl TriangleCfg {
    #[inline]
    pub fn with_eps(eps_right: f64) -> Self {
        Self { eps_right }
    }

    /// `is_right_triangle` with this config's tolerance.
    #[inline]
    pub fn is_right_triangle(
        &self,
        side_a: f64,
        side_b: f64,
        side_c: f64,
    ) -> Result<bool, TriangleError> {
        is_right_triangle_eps(side_a, side_b, side_c, self.eps_right)
    }

    /// `validate_triangle` with this config's tolerance.
    #[inline]
    pub fn validate_triangle(
        &self,
        side_a: f64,
        side_b: f64,
        hypotenuse: f64,
    ) -> Result<bool, TriangleError> {
        validate_triangle_eps(side_a, side_b, hypotenuse, self.eps_right)
    }
}

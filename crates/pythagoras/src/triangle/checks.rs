use super::cfg::RIGHT_EPS;
use super::types::TriangleError;
use super::util::{leg_norm, positive, sorted3};

/// Do three sides, in any order, form a right triangle?
///
/// The longest side is taken as the hypotenuse, so the answer does not depend
/// on argument order. Returns `Ok(false)` for any non-right triple; the error
/// channel is only used for non-positive sides.
pub fn is_right_triangle(side_a: f64, side_b: f64, side_c: f64) -> Result<bool, TriangleError> {
    is_right_triangle_eps(side_a, side_b, side_c, RIGHT_EPS)
}

/// [`is_right_triangle`] with an explicit absolute tolerance.
pub fn is_right_triangle_eps(
    side_a: f64,
    side_b: f64,
    side_c: f64,
    eps: f64,
) -> Result<bool, TriangleError> {
    let a = positive("side_a", side_a)?;
    let b = positive("side_b", side_b)?;
    let c = positive("side_c", side_c)?;
    let [s0, s1, s2] = sorted3(a, b, c);
    Ok((leg_norm(s0, s1) - s2).abs() < eps)
}

/// Is `hypotenuse` the hypotenuse of the right triangle with legs `side_a`, `side_b`?
///
/// No reordering: the third argument is trusted as the hypotenuse, so
/// `validate_triangle(5.0, 4.0, 3.0)` is `Ok(false)`.
pub fn validate_triangle(side_a: f64, side_b: f64, hypotenuse: f64) -> Result<bool, TriangleError> {
    validate_triangle_eps(side_a, side_b, hypotenuse, RIGHT_EPS)
}

/// [`validate_triangle`] with an explicit absolute tolerance.
pub fn validate_triangle_eps(
    side_a: f64,
    side_b: f64,
    hypotenuse: f64,
    eps: f64,
) -> Result<bool, TriangleError> {
    let a = positive("side_a", side_a)?;
    let b = positive("side_b", side_b)?;
    let c = positive("hypotenuse", hypotenuse)?;
    Ok((leg_norm(a, b) - c).abs() < eps)
}

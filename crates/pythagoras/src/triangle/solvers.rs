use super::types::TriangleError;
use super::util::{leg_from, leg_norm, longer, positive};

/// Hypotenuse `sqrt(a² + b²)` of the right triangle with legs `side_a`, `side_b`.
///
/// Fails with `InvalidInput` if either leg is not strictly positive and finite,
/// and with `Overflow` if the hypotenuse itself exceeds `f64::MAX`.
pub fn compute_hypotenuse(side_a: f64, side_b: f64) -> Result<f64, TriangleError> {
    let a = positive("side_a", side_a)?;
    let b = positive("side_b", side_b)?;
    let c = leg_norm(a, b);
    if c.is_finite() {
        Ok(c)
    } else {
        Err(TriangleError::overflow(a, b))
    }
}

/// Leg `a = sqrt(c² − b²)` given the hypotenuse and the other leg.
///
/// Positivity is checked first (`InvalidInput`), then `hypotenuse > side_b`
/// (`InvalidGeometry`).
pub fn compute_side_a(hypotenuse: f64, side_b: f64) -> Result<f64, TriangleError> {
    missing_leg(hypotenuse, "side_b", side_b)
}

/// Leg `b = sqrt(c² − a²)`; mirror of [`compute_side_a`].
pub fn compute_side_b(hypotenuse: f64, side_a: f64) -> Result<f64, TriangleError> {
    missing_leg(hypotenuse, "side_a", side_a)
}

fn missing_leg(hypotenuse: f64, param: &'static str, leg: f64) -> Result<f64, TriangleError> {
    let c = positive("hypotenuse", hypotenuse)?;
    let l = positive(param, leg)?;
    longer(c, l)?;
    Ok(leg_from(c, l))
}

use super::types::TriangleError;

/// `Ok(value)` iff `0 < value < inf`. NaN fails the comparison and is rejected.
#[inline]
pub(super) fn positive(param: &'static str, value: f64) -> Result<f64, TriangleError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(TriangleError::invalid_input(param, value))
    }
}

/// Hypotenuse must strictly exceed the paired side; both already positive.
#[inline]
pub(super) fn longer(hypotenuse: f64, side: f64) -> Result<(), TriangleError> {
    if hypotenuse > side {
        Ok(())
    } else {
        Err(TriangleError::invalid_geometry(hypotenuse, side))
    }
}

/// `sqrt(a² + b²)` without squaring overflow; infinite only if the true value exceeds `f64::MAX`.
#[inline]
pub(super) fn leg_norm(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// `sqrt(c² − l²)` for finite `c > l > 0`. Always finite and at most `c`.
#[inline]
pub(super) fn leg_from(c: f64, l: f64) -> f64 {
    let prod = (c - l) * (c + l);
    if prod.is_normal() {
        prod.sqrt()
    } else {
        // c² out of range (overflow or underflow): work relative to c.
        let r = l / c;
        c * ((1.0 - r) * (1.0 + r)).sqrt()
    }
}

/// Sort three sides ascending. Inputs are validated, so `total_cmp` never sees NaN.
#[inline]
pub(super) fn sorted3(a: f64, b: f64, c: f64) -> [f64; 3] {
    let mut s = [a, b, c];
    s.sort_by(f64::total_cmp);
    s
}

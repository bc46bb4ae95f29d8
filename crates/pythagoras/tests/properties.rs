//! Property tests for the right-triangle laws.
//!
//! Side lengths are drawn from [1e-2, 1e3] so that `c² − b²` keeps enough
//! significant bits for the 1e-5 round-trip tolerance.

use proptest::prelude::*;
use pythagoras::prelude::*;

fn side() -> impl Strategy<Value = f64> {
    1e-2f64..1e3
}

fn non_positive() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0f64), Just(-0.0f64), -1e6f64..0.0]
}

proptest! {
    #[test]
    fn side_a_round_trips_through_hypotenuse(a in side(), b in side()) {
        let c = compute_hypotenuse(a, b).unwrap();
        let a2 = compute_side_a(c, b).unwrap();
        prop_assert!((a2 - a).abs() < 1e-5, "a={a} b={b} c={c} a2={a2}");
    }

    #[test]
    fn side_b_round_trips_through_hypotenuse(a in side(), b in side()) {
        let c = compute_hypotenuse(a, b).unwrap();
        let b2 = compute_side_b(c, a).unwrap();
        prop_assert!((b2 - b).abs() < 1e-5, "a={a} b={b} c={c} b2={b2}");
    }

    #[test]
    fn is_right_triangle_ignores_argument_order(a in side(), b in side(), c in side()) {
        let base = is_right_triangle(a, b, c).unwrap();
        for (x, y, z) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            prop_assert_eq!(is_right_triangle(x, y, z).unwrap(), base);
        }
    }

    #[test]
    fn is_right_triangle_accepts_built_triangles_in_any_order(a in side(), b in side()) {
        let c = compute_hypotenuse(a, b).unwrap();
        for (x, y, z) in [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            prop_assert!(is_right_triangle(x, y, z).unwrap());
        }
        prop_assert!(validate_triangle(a, b, c).unwrap());
    }

    #[test]
    fn non_positive_leg_is_invalid_input(good in side(), bad in non_positive()) {
        prop_assert!(compute_hypotenuse(bad, good).unwrap_err().is_invalid_input());
        prop_assert!(compute_hypotenuse(good, bad).unwrap_err().is_invalid_input());
        prop_assert!(compute_side_a(bad, good).unwrap_err().is_invalid_input());
        prop_assert!(compute_side_a(good, bad).unwrap_err().is_invalid_input());
        prop_assert!(compute_side_b(bad, good).unwrap_err().is_invalid_input());
        prop_assert!(compute_side_b(good, bad).unwrap_err().is_invalid_input());
        prop_assert!(is_right_triangle(good, good, bad).unwrap_err().is_invalid_input());
        prop_assert!(is_right_triangle(bad, good, good).unwrap_err().is_invalid_input());
        prop_assert!(validate_triangle(good, bad, good).unwrap_err().is_invalid_input());
        prop_assert!(validate_triangle(good, good, bad).unwrap_err().is_invalid_input());
    }

    #[test]
    fn hypotenuse_not_longer_is_invalid_geometry(h in side(), extra in 0.0f64..1e3) {
        let side = h + extra;
        prop_assert!(compute_side_a(h, side).unwrap_err().is_invalid_geometry());
        prop_assert!(compute_side_b(h, side).unwrap_err().is_invalid_geometry());
    }
}

#[test]
fn validate_triangle_depends_on_argument_order() {
    assert!(validate_triangle(3.0, 4.0, 5.0).unwrap());
    assert!(!validate_triangle(5.0, 4.0, 3.0).unwrap());
    assert!(!validate_triangle(3.0, 5.0, 4.0).unwrap());
    for (x, y, z) in [(3.0, 4.0, 5.0), (5.0, 4.0, 3.0), (3.0, 5.0, 4.0)] {
        assert!(is_right_triangle(x, y, z).unwrap());
    }
}

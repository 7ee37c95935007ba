//! Coordinate geometry helpers used by the transform engine.

/// Round to the nearest integer, ties away from zero.
///
/// `round_half_away(0.5)` is `1` and `round_half_away(-0.5)` is `-1`,
/// unlike banker's rounding which would map both to `0`.
#[inline]
pub fn round_half_away(v: f64) -> i32 {
    if v >= 0.0 {
        (v + 0.5).floor() as i32
    } else {
        -((-v + 0.5).floor() as i32)
    }
}

/// Convert Cartesian coordinates to polar.
///
/// Returns `(radius, angle)` with the angle in radians over the full
/// `[-PI, PI]` range (`atan2` semantics, correct quadrant).
#[inline]
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    ((x * x + y * y).sqrt(), y.atan2(x))
}

/// Convert polar coordinates to Cartesian.
#[inline]
pub fn to_cartesian(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

/// Euclidean distance from the origin; the radius component of [`to_polar`].
#[inline]
pub fn euclidean(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: to_cartesian inverts to_polar over bounded coordinates.
        #[test]
        fn prop_polar_roundtrip(x in -10_000.0..10_000.0f64, y in -10_000.0..10_000.0f64) {
            let (r, a) = to_polar(x, y);
            let (x2, y2) = to_cartesian(r, a);
            prop_assert!((x - x2).abs() < 1e-6, "x: {} vs {}", x, x2);
            prop_assert!((y - y2).abs() < 1e-6, "y: {} vs {}", y, y2);
        }

        /// Property: half-away rounding agrees with f64::round, which uses
        /// the same tie rule.
        #[test]
        fn prop_round_matches_std(v in -1_000_000.0..1_000_000.0f64) {
            prop_assert_eq!(round_half_away(v), v.round() as i32);
        }

        /// Property: the radius is never negative.
        #[test]
        fn prop_radius_non_negative(x in -10_000.0..10_000.0f64, y in -10_000.0..10_000.0f64) {
            let (r, _) = to_polar(x, y);
            prop_assert!(r >= 0.0);
        }
    }
}

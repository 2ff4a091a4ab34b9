use std::f64::consts::TAU;

use super::Point2;

/// Returns the angle, in radians, that the direction from `p0` to `p1`
/// makes with the positive x-axis.
///
/// The result lies in `(-π, π]`. Coincident points yield `0.0`.
#[must_use]
pub fn angle_to_x(p0: &Point2, p1: &Point2) -> f64 {
    (p1.y - p0.y).atan2(p1.x - p0.x)
}

/// Maps an angle in radians into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

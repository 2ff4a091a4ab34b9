use super::{Point2, Vector2, EPSILON};

/// A directed line segment. Also used to describe the infinite line
/// through its two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Point at relative location `t` (0 = start, 1 = end).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.delta() * t
    }
}

/// Result of a line or segment intersection query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection {
    /// Relative location of the intersection on the first and the second
    /// line, where `0.0` is the start point and `1.0` the end point.
    pub relative: (f64, f64),
    /// The intersection point.
    pub point: Point2,
}

/// Intersects the infinite lines through `line0` and `line1`.
///
/// Returns `None` when the lines are parallel within [`EPSILON`], whether
/// or not they coincide, and when either line has zero length.
///
/// The parameters are solved relative to the segment midpoints and then
/// shifted to start/end-relative form, which keeps rounding symmetric
/// around the middle of each segment.
#[must_use]
pub fn intersect_lines(line0: &Segment2, line1: &Segment2) -> Option<LineIntersection> {
    let d0 = line0.delta();
    let d1 = line1.delta();
    let inv_len0 = 1.0 / (d0.x * d0.x + d0.y * d0.y).sqrt();
    let inv_len1 = 1.0 / (d1.x * d1.x + d1.y * d1.y).sqrt();
    let dir0 = d0 * inv_len0;
    let dir1 = d1 * inv_len1;

    let dot = perp_dot(&dir0, &dir1);
    // NaN for zero-length input
    if dot.is_nan() || dot.abs() <= EPSILON {
        return None;
    }

    let c0 = line0.start + d0 * 0.5;
    let c1 = line1.start + d1 * 0.5;
    let cd = c1 - c0;
    let dot0 = perp_dot(&cd, &dir0);
    let dot1 = perp_dot(&cd, &dir1);
    let inv_dot = 1.0 / dot;
    let s0 = dot1 * inv_dot;
    let s1 = dot0 * inv_dot;

    Some(LineIntersection {
        relative: (s0 * inv_len0 + 0.5, s1 * inv_len1 + 0.5),
        point: c0 + dir0 * s0,
    })
}

/// Intersects two finite segments.
///
/// Same as [`intersect_lines`], but additionally requires both relative
/// locations to lie in the closed interval `[0, 1]`.
#[must_use]
pub fn intersect_segments(seg0: &Segment2, seg1: &Segment2) -> Option<LineIntersection> {
    intersect_lines(seg0, seg1).filter(|hit| {
        let (t0, t1) = hit.relative;
        (0.0..=1.0).contains(&t0) && (0.0..=1.0).contains(&t1)
    })
}

/// Perpendicular dot product `a.x * b.y - a.y * b.x`.
fn perp_dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment2 {
        Segment2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn unit_square_diagonals() {
        let hit = intersect_segments(&seg(0.0, 0.0, 1.0, 1.0), &seg(0.0, 1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(hit.point.x, 0.5);
        assert_relative_eq!(hit.point.y, 0.5);
        assert_relative_eq!(hit.relative.0, 0.5);
        assert_relative_eq!(hit.relative.1, 0.5);
    }

    #[test]
    fn perpendicular_relative_locations() {
        let hit = intersect_lines(&seg(0.0, 0.0, 2.0, 0.0), &seg(0.5, -1.0, 0.5, 1.0)).unwrap();
        assert_relative_eq!(hit.relative.0, 0.25);
        assert_relative_eq!(hit.relative.1, 0.5);
        assert_relative_eq!(hit.point.x, 0.5);
        assert_relative_eq!(hit.point.y, 0.0);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        assert!(intersect_lines(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)).is_none());
        assert!(intersect_segments(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn coincident_lines_do_not_intersect() {
        assert!(intersect_lines(&seg(0.0, 0.0, 2.0, 2.0), &seg(1.0, 1.0, 3.0, 3.0)).is_none());
    }

    #[test]
    fn nearly_parallel_within_epsilon_is_rejected() {
        // direction cross product ~ 1e-9
        assert!(intersect_lines(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0 + 1e-9)).is_none());
        assert!(intersect_lines(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0 + 1e-6)).is_some());
    }

    #[test]
    fn zero_length_line_does_not_intersect() {
        assert!(intersect_lines(&seg(1.0, 1.0, 1.0, 1.0), &seg(0.0, 0.0, 2.0, 2.0)).is_none());
    }

    #[test]
    fn lines_meet_outside_segments() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(2.0, -1.0, 2.0, 1.0);
        let hit = intersect_lines(&a, &b).unwrap();
        assert_relative_eq!(hit.relative.0, 2.0);
        assert_relative_eq!(hit.relative.1, 0.5);
        assert!(intersect_segments(&a, &b).is_none());
    }

    #[test]
    fn shared_endpoint_counts_as_intersection() {
        let hit = intersect_segments(&seg(0.0, 0.0, 1.0, 0.0), &seg(1.0, 0.0, 1.0, 1.0)).unwrap();
        assert_relative_eq!(hit.relative.0, 1.0);
        assert_relative_eq!(hit.relative.1, 0.0);
    }

    #[test]
    fn point_at_matches_relative_location() {
        let a = seg(1.0, 2.0, 5.0, -2.0);
        let b = seg(1.0, -2.0, 5.0, 2.0);
        let hit = intersect_segments(&a, &b).unwrap();
        let p = a.point_at(hit.relative.0);
        assert_relative_eq!(p.x, hit.point.x, epsilon = 1e-12);
        assert_relative_eq!(p.y, hit.point.y, epsilon = 1e-12);
        assert_relative_eq!(a.length(), 32.0_f64.sqrt());
    }
}

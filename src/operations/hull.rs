use tracing::trace;

use crate::math::angle::{angle_to_x, normalize_angle};
use crate::math::points::{cmp_yx, relative_ccw};
use crate::math::{Point2, EPSILON};

/// Computes the convex hull of a point set with a Graham scan.
///
/// The hull is returned counter-clockwise, starting at the point with the
/// smallest `y` (smallest `x` on ties), without a repeated closing point.
/// Inputs of three or fewer points are returned unchanged, even when they
/// are collinear or coincident.
pub struct ConvexHull<'a> {
    points: &'a [Point2],
}

impl<'a> ConvexHull<'a> {
    /// Creates a new `ConvexHull` operation.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the scan, returning the hull vertices.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let mut hull = Vec::with_capacity(self.points.len());
        self.execute_into(&mut hull);
        hull
    }

    /// Executes the scan, replacing the contents of `hull` with the result.
    pub fn execute_into(&self, hull: &mut Vec<Point2>) {
        hull.clear();
        if self.points.len() <= 3 {
            hull.extend_from_slice(self.points);
            return;
        }
        let Some(&reference) = self.points.iter().min_by(|a, b| cmp_yx(a, b)) else {
            return;
        };

        let mut keyed: Vec<(f64, Point2)> = self
            .points
            .iter()
            .map(|p| (normalize_angle(angle_to_x(&reference, p)), *p))
            .collect();
        keyed.sort_by(|(angle_a, a), (angle_b, b)| {
            angle_a.total_cmp(angle_b).then_with(|| cmp_yx(a, b))
        });

        let candidates = unique_angles(&reference, &keyed);
        for p in candidates {
            while hull.len() >= 2 {
                let top = hull[hull.len() - 1];
                let second = hull[hull.len() - 2];
                // a collinear `p` beyond `top` pops it too
                if relative_ccw(&top, &second, &p) >= 0 {
                    break;
                }
                hull.pop();
            }
            hull.push(p);
        }

        trace!(
            input = self.points.len(),
            hull = hull.len(),
            "convex hull computed"
        );
    }
}

/// Computes the convex hull of `points`. See [`ConvexHull`].
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    ConvexHull::new(points).execute()
}

/// Collapses runs of angle-sorted points whose angles around `reference`
/// agree within [`EPSILON`], keeping the point farthest from `reference`.
///
/// `sorted[0]` is the reference point itself and is always kept.
fn unique_angles(reference: &Point2, sorted: &[(f64, Point2)]) -> Vec<Point2> {
    let mut unique = Vec::with_capacity(sorted.len());
    let Some((_, first)) = sorted.first() else {
        return unique;
    };
    unique.push(*first);

    let mut previous_angle = std::f64::consts::TAU;
    let mut kept_distance = f64::MAX;
    for &(angle, p) in &sorted[1..] {
        let distance = (p - reference).norm_squared();
        if (angle - previous_angle).abs() > EPSILON {
            unique.push(p);
            kept_distance = distance;
        } else if distance > kept_distance {
            if let Some(last) = unique.last_mut() {
                *last = p;
            }
            kept_distance = distance;
        }
        previous_angle = angle;
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_with_interior_point() {
        let pts = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
    }

    #[test]
    fn starts_at_colexicographic_minimum() {
        let pts = [p(3.0, 5.0), p(0.0, 2.0), p(5.0, 2.0), p(2.0, -1.0), p(4.0, -1.0)];
        let hull = convex_hull(&pts);
        assert_eq!(hull[0], p(2.0, -1.0));
        assert_eq!(
            hull,
            vec![p(2.0, -1.0), p(4.0, -1.0), p(5.0, 2.0), p(3.0, 5.0), p(0.0, 2.0)]
        );
    }

    #[test]
    fn small_inputs_are_returned_verbatim() {
        let collinear = [p(2.0, 2.0), p(0.0, 0.0), p(1.0, 1.0)];
        assert_eq!(convex_hull(&collinear), collinear.to_vec());
        let coincident = [p(1.0, 1.0), p(1.0, 1.0)];
        assert_eq!(convex_hull(&coincident), coincident.to_vec());
        assert!(convex_hull(&[]).is_empty());
    }

    #[test]
    fn collinear_boundary_points_are_dropped() {
        let pts = [
            p(100.0, 100.0),
            p(200.0, 100.0),
            p(300.0, 100.0),
            p(300.0, 150.0),
            p(300.0, 160.0),
            p(300.0, 200.0),
            p(100.0, 200.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(
            hull,
            vec![p(100.0, 100.0), p(300.0, 100.0), p(300.0, 200.0), p(100.0, 200.0)]
        );
    }

    #[test]
    fn fully_collinear_input_keeps_extremes() {
        let pts = [p(1.0, 1.0), p(3.0, 3.0), p(0.0, 0.0), p(2.0, 2.0)];
        assert_eq!(convex_hull(&pts), vec![p(0.0, 0.0), p(3.0, 3.0)]);
    }

    #[test]
    fn duplicates_of_hull_vertices_collapse() {
        let pts = [
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 2.0),
            p(1.0, 2.0),
            p(0.0, 0.0),
        ];
        assert_eq!(convex_hull(&pts), vec![p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)]);
    }

    #[test]
    fn execute_into_replaces_previous_contents() {
        let pts = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
        let mut hull = vec![p(-1.0, -1.0); 10];
        ConvexHull::new(&pts).execute_into(&mut hull);
        assert_eq!(hull.len(), 4);
        assert_eq!(hull[0], p(0.0, 0.0));
    }
}

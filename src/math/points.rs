use std::cmp::Ordering;

use super::affine::AffineTransform;
use super::angle::{angle_to_x, normalize_angle};
use super::Point2;

/// Colexicographic order: by `y`, then by `x`.
#[must_use]
pub fn cmp_yx(a: &Point2, b: &Point2) -> Ordering {
    a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
}

/// Lexicographic order: by `x`, then by `y`.
#[must_use]
pub fn cmp_xy(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Orders points by the angle, normalized to `[0, 2π)`, that the direction
/// from `center` to the point makes with the positive x-axis.
pub fn cmp_by_angle(center: Point2) -> impl Fn(&Point2, &Point2) -> Ordering {
    move |a: &Point2, b: &Point2| {
        let angle_a = normalize_angle(angle_to_x(&center, a));
        let angle_b = normalize_angle(angle_to_x(&center, b));
        angle_a.total_cmp(&angle_b)
    }
}

/// Orders points by their squared distance to `reference`.
pub fn cmp_by_distance(reference: Point2) -> impl Fn(&Point2, &Point2) -> Ordering {
    move |a: &Point2, b: &Point2| {
        let da = (a - reference).norm_squared();
        let db = (b - reference).norm_squared();
        da.total_cmp(&db)
    }
}

/// Classifies `p` against the directed segment `a → b`.
///
/// Returns `-1` when `p` lies to the left of the line (counter-clockwise in a
/// y-up frame) and `1` when it lies to the right. For collinear points the
/// result is `-1` if `p` lies behind `a`, `1` if it lies beyond `b`, and `0`
/// if it lies on the segment.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn relative_ccw(a: &Point2, b: &Point2, p: &Point2) -> i32 {
    let (bx, by) = (b.x - a.x, b.y - a.y);
    let (mut px, mut py) = (p.x - a.x, p.y - a.y);
    let mut ccw = px * by - py * bx;
    if ccw == 0.0 {
        ccw = px * bx + py * by;
        if ccw > 0.0 {
            px -= bx;
            py -= by;
            ccw = px * bx + py * by;
            if ccw < 0.0 {
                ccw = 0.0;
            }
        }
    }
    if ccw < 0.0 {
        -1
    } else if ccw > 0.0 {
        1
    } else {
        0
    }
}

/// Returns the arithmetic mean of the points, or `None` if there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn center_of_gravity(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point2::new(sx / n, sy / n))
}

/// Applies `at` to every point.
#[must_use]
pub fn transform_all(at: &AffineTransform, points: &[Point2]) -> Vec<Point2> {
    points.iter().map(|p| at.transform(p)).collect()
}

/// Applies `at` to every point, replacing the contents of `out`.
pub fn transform_all_into(at: &AffineTransform, points: &[Point2], out: &mut Vec<Point2>) {
    out.clear();
    out.extend(points.iter().map(|p| at.transform(p)));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn yx_orders_by_y_first() {
        assert_eq!(cmp_yx(&p(5.0, 0.0), &p(0.0, 1.0)), Ordering::Less);
        assert_eq!(cmp_yx(&p(1.0, 1.0), &p(0.0, 1.0)), Ordering::Greater);
        assert_eq!(cmp_yx(&p(1.0, 1.0), &p(1.0, 1.0)), Ordering::Equal);
        assert_eq!(cmp_xy(&p(5.0, 0.0), &p(0.0, 1.0)), Ordering::Greater);
    }

    #[test]
    fn angle_order_around_center() {
        let cmp = cmp_by_angle(p(0.0, 0.0));
        let mut pts = vec![p(-1.0, 0.1), p(0.0, 1.0), p(1.0, 0.0), p(0.0, -1.0)];
        pts.sort_by(|a, b| cmp(a, b));
        assert_eq!(pts, vec![p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.1), p(0.0, -1.0)]);
    }

    #[test]
    fn distance_order() {
        let cmp = cmp_by_distance(p(1.0, 1.0));
        assert_eq!(cmp(&p(1.0, 2.0), &p(3.0, 1.0)), Ordering::Less);
    }

    #[test]
    fn relative_ccw_sides() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        assert_eq!(relative_ccw(&a, &b, &p(0.5, 1.0)), -1);
        assert_eq!(relative_ccw(&a, &b, &p(0.5, -1.0)), 1);
    }

    #[test]
    fn relative_ccw_collinear() {
        let a = p(0.0, 0.0);
        let b = p(2.0, 0.0);
        assert_eq!(relative_ccw(&a, &b, &p(-1.0, 0.0)), -1);
        assert_eq!(relative_ccw(&a, &b, &p(1.0, 0.0)), 0);
        assert_eq!(relative_ccw(&a, &b, &p(2.0, 0.0)), 0);
        assert_eq!(relative_ccw(&a, &b, &p(3.0, 0.0)), 1);
    }

    #[test]
    fn centroid() {
        assert!(center_of_gravity(&[]).is_none());
        let c = center_of_gravity(&[p(0.0, 0.0), p(2.0, 0.0), p(1.0, 3.0)]).unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn transform_into_reuses_buffer() {
        let at = AffineTransform::translation(1.0, -1.0);
        let mut out = vec![p(9.0, 9.0); 5];
        transform_all_into(&at, &[p(0.0, 0.0), p(1.0, 1.0)], &mut out);
        assert_eq!(out, vec![p(1.0, -1.0), p(2.0, 0.0)]);
        assert_eq!(transform_all(&at, &[p(0.0, 0.0), p(1.0, 1.0)]), out);
    }
}

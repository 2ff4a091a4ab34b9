use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Whether `p` lies inside or on the boundary of the counter-clockwise
/// convex polygon `polygon`, allowing `tolerance` of outward slack.
///
/// Degenerate polygons (fewer than three vertices) are treated as the
/// segment or point they describe.
#[must_use]
pub fn convex_contains(polygon: &[Point2], p: &Point2, tolerance: f64) -> bool {
    match polygon {
        [] => false,
        [a] => (p - a).norm() <= tolerance,
        [a, b] => segment_distance(a, b, p) <= tolerance,
        _ => {
            let n = polygon.len();
            (0..n).all(|i| {
                let a = &polygon[i];
                let b = &polygon[(i + 1) % n];
                let edge = b - a;
                let len = edge.norm();
                if len <= 0.0 {
                    return true;
                }
                // signed distance to the left of the edge
                let v = p - a;
                (edge.x * v.y - edge.y * v.x) / len >= -tolerance
            })
        }
    }
}

fn segment_distance(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

mod delta;

pub use delta::{delta_resample, DeltaResampler};

use crate::math::Point2;

/// One segment of a flattened path.
///
/// A flattened path holds straight segments only: curves have already been
/// approximated by the producer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Starts a new sub-path at the given point.
    MoveTo(Point2),
    /// Straight line from the current position to the given point.
    LineTo(Point2),
    /// Straight line back to the start of the current sub-path, closing it.
    Close,
}

/// Builds a flattened path through `points`: a `MoveTo` to the first point,
/// a `LineTo` to each following point, and a trailing `Close` if `close` is
/// set. An empty slice yields an empty path.
#[must_use]
pub fn from_points(points: &[Point2], close: bool) -> Vec<PathSegment> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut path = Vec::with_capacity(points.len() + 1);
    path.push(PathSegment::MoveTo(*first));
    path.extend(rest.iter().map(|p| PathSegment::LineTo(*p)));
    if close {
        path.push(PathSegment::Close);
    }
    path
}

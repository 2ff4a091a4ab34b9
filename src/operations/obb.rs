use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::affine::AffineTransform;
use crate::math::angle::angle_to_x;
use crate::math::bounds::Aabb2;
use crate::math::points::transform_all_into;
use crate::math::Point2;

use super::hull::ConvexHull;

/// Which points are re-transformed when scoring a candidate hull edge.
///
/// The extremes of any rotated point set are attained by hull vertices, so
/// both scopes select the same box up to floating-point ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateScope {
    /// Score each edge with the hull vertices only: O(h²).
    #[default]
    HullVertices,
    /// Score each edge with the full input set: O(h·n).
    AllPoints,
}

/// Computes the minimum-area oriented bounding box of a point set.
///
/// Every edge of the convex hull is tried as the direction of one box side.
/// The corners are returned in the original coordinate space, in the order
/// of the aligned box's `(min x, min y)`, `(max x, min y)`, `(max x, max y)`,
/// `(min x, max y)` corners.
pub struct MinOrientedBoundingBox<'a> {
    points: &'a [Point2],
    scope: CandidateScope,
}

impl<'a> MinOrientedBoundingBox<'a> {
    /// Creates a new `MinOrientedBoundingBox` operation.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            scope: CandidateScope::default(),
        }
    }

    /// Sets the point scope used to score candidate edges.
    #[must_use]
    pub fn candidate_scope(mut self, scope: CandidateScope) -> Self {
        self.scope = scope;
        self
    }

    /// Executes the query, returning the four box corners.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty.
    pub fn execute(&self) -> Result<[Point2; 4]> {
        let mut corners = [Point2::origin(); 4];
        self.execute_into(&mut corners)?;
        Ok(corners)
    }

    /// Executes the query, writing the four box corners into `corners`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point set is empty.
    pub fn execute_into(&self, corners: &mut [Point2; 4]) -> Result<()> {
        if self.points.is_empty() {
            return Err(OperationError::InvalidInput(
                "oriented bounding box of an empty point set".into(),
            )
            .into());
        }

        let hull = ConvexHull::new(self.points).execute();
        let candidates: &[Point2] = match self.scope {
            CandidateScope::HullVertices => &hull,
            CandidateScope::AllPoints => self.points,
        };

        let n = hull.len();
        let mut scratch = Vec::with_capacity(self.points.len());
        let mut best = 0;
        let mut min_area = f64::MAX;
        for i in 0..n {
            let at = alignment_transform(&hull[i], &hull[(i + 1) % n]);
            transform_all_into(&at, candidates, &mut scratch);
            if let Some(bounds) = Aabb2::from_points(&scratch) {
                let area = bounds.area();
                if area < min_area {
                    min_area = area;
                    best = i;
                }
            }
        }

        let p0 = hull[best];
        let p1 = hull[(best + 1) % n];
        transform_all_into(&alignment_transform(&p0, &p1), self.points, &mut scratch);
        let Some(bounds) = Aabb2::from_points(&scratch) else {
            return Err(OperationError::InvalidInput("no points to bound".into()).into());
        };

        let inverse = inverse_alignment_transform(&p0, &p1);
        for (dst, src) in corners.iter_mut().zip(bounds.corners()) {
            inverse.transform_into(&src, dst);
        }

        debug!(
            hull = n,
            edge = best,
            area = bounds.area(),
            scope = ?self.scope,
            "minimum oriented bounding box"
        );
        Ok(())
    }
}

/// Computes the minimum oriented bounding box of `points`.
/// See [`MinOrientedBoundingBox`].
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `points` is empty.
pub fn min_oriented_bounding_box(points: &[Point2]) -> Result<[Point2; 4]> {
    MinOrientedBoundingBox::new(points).execute()
}

/// Moves `p0` to the origin and rotates the direction `p0 → p1` onto the
/// positive x-axis.
fn alignment_transform(p0: &Point2, p1: &Point2) -> AffineTransform {
    let angle = angle_to_x(p0, p1);
    AffineTransform::rotation(-angle).concatenate(&AffineTransform::translation(-p0.x, -p0.y))
}

/// Exact inverse of [`alignment_transform`], built from its factors.
fn inverse_alignment_transform(p0: &Point2, p1: &Point2) -> AffineTransform {
    let angle = angle_to_x(p0, p1);
    AffineTransform::translation(p0.x, p0.y).concatenate(&AffineTransform::rotation(angle))
}

mod hull;
mod obb;

pub use hull::{convex_hull, ConvexHull};
pub use obb::{min_oriented_bounding_box, CandidateScope, MinOrientedBoundingBox};

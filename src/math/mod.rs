pub mod affine;
pub mod angle;
pub mod bounds;
pub mod intersect_2d;
pub mod points;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous matrix, used for composing affine transforms.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global tolerance shared by every predicate in the kernel.
///
/// Parallel-line rejection, co-angular collapsing in the hull scan,
/// zero-length segment detection and resampler step termination all use
/// this one value so that they agree on what counts as degenerate.
pub const EPSILON: f64 = 1e-8;

use crate::error::{GeometryError, Result};

use super::{Matrix3, Point2};

/// A 2D affine transform.
///
/// Maps `(x, y)` to
/// `(scale_x * x + shear_x * y + translate_x, shear_y * x + scale_y * y + translate_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub scale_x: f64,
    pub shear_y: f64,
    pub shear_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// Creates a transform from its six coefficients.
    #[must_use]
    pub fn new(
        scale_x: f64,
        shear_y: f64,
        shear_x: f64,
        scale_y: f64,
        translate_x: f64,
        translate_y: f64,
    ) -> Self {
        Self {
            scale_x,
            shear_y,
            shear_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// A pure translation by `(tx, ty)`.
    #[must_use]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// A counter-clockwise rotation about the origin by `angle` radians.
    ///
    /// Quadrant angles produce exact `0`/`±1` coefficients, so aligning an
    /// axis-parallel edge introduces no rounding.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn rotation(angle: f64) -> Self {
        let mut sin = angle.sin();
        let mut cos = angle.cos();
        if sin == 1.0 || sin == -1.0 {
            cos = 0.0;
        } else if cos == 1.0 || cos == -1.0 {
            sin = 0.0;
        }
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A scaling about the origin.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Returns the homogeneous 3x3 matrix of this transform.
    #[must_use]
    #[rustfmt::skip]
    pub fn to_matrix(&self) -> Matrix3 {
        Matrix3::new(
            self.scale_x, self.shear_x, self.translate_x,
            self.shear_y, self.scale_y, self.translate_y,
            0.0,          0.0,          1.0,
        )
    }

    /// Builds a transform from the upper two rows of a homogeneous matrix.
    #[must_use]
    pub fn from_matrix(m: &Matrix3) -> Self {
        Self::new(m[(0, 0)], m[(1, 0)], m[(0, 1)], m[(1, 1)], m[(0, 2)], m[(1, 2)])
    }

    /// Returns `self * other`: the result applies `other` first, then `self`.
    #[must_use]
    pub fn concatenate(&self, other: &Self) -> Self {
        Self::from_matrix(&(self.to_matrix() * other.to_matrix()))
    }

    /// Returns `other * self`: the result applies `self` first, then `other`.
    #[must_use]
    pub fn pre_concatenate(&self, other: &Self) -> Self {
        other.concatenate(self)
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.scale_x * self.scale_y - self.shear_x * self.shear_y
    }

    /// Returns the inverse transform.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonInvertible` if the determinant is zero,
    /// subnormal or not finite.
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if !det.is_normal() {
            return Err(GeometryError::NonInvertible { determinant: det }.into());
        }
        Ok(Self::new(
            self.scale_y / det,
            -self.shear_y / det,
            -self.shear_x / det,
            self.scale_x / det,
            (self.shear_x * self.translate_y - self.scale_y * self.translate_x) / det,
            (self.shear_y * self.translate_x - self.scale_x * self.translate_y) / det,
        ))
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn transform(&self, p: &Point2) -> Point2 {
        Point2::new(
            self.scale_x * p.x + self.shear_x * p.y + self.translate_x,
            self.shear_y * p.x + self.scale_y * p.y + self.translate_y,
        )
    }

    /// Applies the transform to `src`, writing the result into `dst`.
    pub fn transform_into(&self, src: &Point2, dst: &mut Point2) {
        *dst = self.transform(src);
    }

    /// Applies the inverse of this transform to a point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonInvertible` if the transform is singular.
    pub fn inverse_transform(&self, p: &Point2) -> Result<Point2> {
        Ok(self.invert()?.transform(p))
    }

    /// Length that a distance `d` along the x-axis has after transformation.
    #[must_use]
    pub fn distance_x(&self, d: f64) -> f64 {
        (self.scale_x * d).hypot(self.shear_y * d)
    }

    /// Length that a distance `d` along the y-axis has after transformation.
    #[must_use]
    pub fn distance_y(&self, d: f64) -> f64 {
        (self.shear_x * d).hypot(self.scale_y * d)
    }
}

use std::fmt;

use crate::context::DrawContext;
use crate::error::{MathError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector2;

/// A rigid 2D transform: a rotation about the origin followed by a
/// translation, stored as a 3x3 homogeneous matrix.
///
/// The angle is negated when the matrix is built so that positive angles
/// read naturally on a y-down canvas. [`Transform::rotation`] undoes the
/// flip, so `Transform::new(p, a).rotation()` gives back `a` (mod 2π).
///
/// The bottom row is always `[0, 0, 1]`. Every method returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix,
}

impl Transform {
    pub fn new(position: Vector2, angle: f64) -> Self {
        let (sin, cos) = (-angle).sin_cos();
        Self {
            matrix: Matrix::from_rows3([
                [cos, sin, position.x],
                [-sin, cos, position.y],
                [0.0, 0.0, 1.0],
            ]),
        }
    }

    pub fn identity() -> Self {
        Self::new(Vector2::ZERO, 0.0)
    }

    /// Wraps an existing matrix. It must be 3x3 with a `[0, 0, 1]` bottom row.
    pub fn from_matrix(matrix: Matrix) -> Result<Self> {
        if matrix.shape() != (3, 3) || matrix.row(2) != Some(&[0.0, 0.0, 1.0][..]) {
            return Err(MathError::NotAffine);
        }
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// `self ∘ rotation(angle)`: the rotation happens in this transform's
    /// local frame.
    pub fn rotate(&self, angle: f64) -> Self {
        self.transform(&Self::new(Vector2::ZERO, angle))
    }

    /// `self ∘ translation(offset)`, in this transform's local frame.
    pub fn translate(&self, offset: Vector2) -> Self {
        self.transform(&Self::new(offset, 0.0))
    }

    /// Composition `self ∘ other`, i.e. `self.matrix × other.matrix`.
    ///
    /// Associative, not commutative.
    pub fn transform(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix.product(&other.matrix),
        }
    }

    pub fn translation(&self) -> Vector2 {
        Vector2::new(self.matrix[(0, 2)], self.matrix[(1, 2)])
    }

    pub fn rotation(&self) -> f64 {
        -self.matrix[(0, 1)].atan2(self.matrix[(0, 0)])
    }

    /// Maps a point expressed in this transform's local frame into the
    /// frame the transform is relative to.
    pub fn apply_to_point(&self, point: Vector2) -> Vector2 {
        let m = &self.matrix;
        Vector2::new(
            m[(0, 0)] * point.x + m[(0, 1)] * point.y + m[(0, 2)],
            m[(1, 0)] * point.x + m[(1, 1)] * point.y + m[(1, 2)],
        )
    }

    /// Pushes the six affine coefficients (the top 2x3 block, row-major) to
    /// the drawing context.
    pub fn apply(&self, ctx: &mut dyn DrawContext) {
        let m = &self.matrix;
        ctx.set_transform(
            m[(0, 0)],
            m[(0, 1)],
            m[(1, 0)],
            m[(1, 1)],
            m[(0, 2)],
            m[(1, 2)],
        );
    }

    pub fn approx_eq(&self, other: &Transform, epsilon: f64) -> bool {
        (0..3).all(|i| (0..3).all(|j| (self.matrix[(i, j)] - other.matrix[(i, j)]).abs() <= epsilon))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translation: {} angle: {}", self.translation(), self.rotation())
    }
}

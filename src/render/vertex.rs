//! Per-vertex stage: positions to screen space, normals to view space.

use crate::error::Result;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// A vertex after the full model-view-projection-viewport transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformedVertex {
    /// Screen-space x and y in pixels; z is the depth used by the z-buffer.
    pub screen: Vec3,
    /// Homogeneous w before the perspective divide, kept for
    /// perspective-correct interpolation.
    pub w: f32,
}

impl TransformedVertex {
    /// Transforms `[p, 1]` by `matrix` and divides x, y, z by w.
    #[inline]
    pub fn new(position: Vec3, matrix: &Mat4) -> Self {
        let clip = matrix.transform_point(position);
        Self {
            screen: clip.perspective_divide(),
            w: clip.w,
        }
    }
}

/// Runs every position through the composed pipeline matrix.
pub fn transform_vertices(positions: &[Vec3], matrix: &Mat4) -> Vec<TransformedVertex> {
    positions
        .iter()
        .map(|&p| TransformedVertex::new(p, matrix))
        .collect()
}

/// Transforms normals by the inverse-transpose of `model_view`.
///
/// Normals are transformed as directions (`w = 0`) and left unnormalized;
/// the shader normalizes after interpolation.
///
/// # Errors
///
/// [`RenderError::SingularMatrix`](crate::RenderError::SingularMatrix) when
/// `model_view` cannot be inverted.
pub fn transform_normals(normals: &[Vec3], model_view: &Mat4) -> Result<Vec<Vec3>> {
    let normal_matrix = model_view.inverse()?.transpose();
    Ok(normals
        .iter()
        .map(|&n| normal_matrix.transform_direction(n).to_vec3())
        .collect())
}

//! Matrix builders for the model → view → projection → viewport chain.
//!
//! All matrices use the row-vector convention of [`Mat4`], so the full
//! pipeline composes left to right:
//!
//! ```ignore
//! let model_view = model_matrix() * view_matrix(eye, center, up)?;
//! let mvpv = model_view * projection_matrix(-0.2) * viewport_matrix(0.0, 0.0, 800.0, 800.0);
//! ```
//!
//! Also provides [`Transform`], a position/rotation/scale component whose
//! default value yields the identity model matrix.

use crate::error::Result;
use crate::math::{mat4::Mat4, vec3::Vec3};

/// Model matrix used when a mesh carries no transform of its own.
pub fn model_matrix() -> Mat4 {
    Mat4::identity()
}

/// Right-handed look-at view matrix.
///
/// The camera basis is `z = normalize(eye - center)`, `x = normalize(up × z)`,
/// `y = normalize(z × x)`, so the camera looks down its local -Z axis. The
/// rotation is preceded by a translation by `-center`.
///
/// # Errors
///
/// [`RenderError::DegenerateVector`](crate::RenderError::DegenerateVector) if
/// `eye == center` or `up` is parallel to the viewing direction.
pub fn view_matrix(eye: Vec3, center: Vec3, up: Vec3) -> Result<Mat4> {
    let z = (eye - center).try_normalize("view direction (eye == center)")?;
    let x = up
        .cross(z)
        .try_normalize("camera right axis (up parallel to view direction)")?;
    let y = z.cross(x).try_normalize("camera up axis")?;

    // Basis vectors as columns: v * rotation = (v·x, v·y, v·z)
    let rotation = Mat4::new([
        [x.x, y.x, z.x, 0.0],
        [x.y, y.y, z.y, 0.0],
        [x.z, y.z, z.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let translation = Mat4::translation(-center.x, -center.y, -center.z);

    Ok(translation * rotation)
}

/// Perspective matrix with a single reciprocal-depth coefficient.
///
/// Identity except element (2, 3), so after the transform `w = 1 + r * z`.
/// `r` is negative for a camera looking down -Z; `-1 / distance` places the
/// projection centre at the eye.
pub fn projection_matrix(r: f32) -> Mat4 {
    let mut m = Mat4::identity();
    m.set(2, 3, r);
    m
}

/// Maps normalized device coordinates in [-1, 1] to the pixel rectangle
/// starting at `(x, y)` with the given size.
pub fn viewport_matrix(x: f32, y: f32, width: f32, height: f32) -> Mat4 {
    let half_width = width / 2.0;
    let half_height = height / 2.0;
    Mat4::new([
        [half_width, 0.0, 0.0, 0.0],
        [0.0, half_height, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x + half_width, y + half_height, 0.0, 1.0],
    ])
}

/// A 3D transform with position, rotation (Euler angles), and scale.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(0.0, 0.5, 0.0)
///     .set_rotation(Vec3::new(0.0, 0.1, 0.0))
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // Euler angles in radians: x=pitch, y=yaw, z=roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, rotation=0, scale=1).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Set all three Euler angles, in radians.
    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Generate the model matrix.
    ///
    /// Order: Scale * RotationZ * RotationY * RotationX * Translation
    /// (scale applied first, then roll, yaw, pitch, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
            * Mat4::rotation_z(self.rotation.z)
            * Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_x(self.rotation.x)
            * Mat4::translation(self.position.x, self.position.y, self.position.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;

    #[test]
    fn model_matrix_is_identity() {
        assert_eq!(model_matrix(), Mat4::identity());
        assert_eq!(Transform::default().to_matrix(), Mat4::identity());
    }

    #[test]
    fn view_matrix_moves_center_to_origin() {
        let view = view_matrix(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 1.0), Vec3::UP)
            .unwrap();
        let p = view.transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);

        // Eye lands on +Z at its distance from the center
        let eye = view.transform_point(Vec3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(eye.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_basis_is_orthonormal() {
        let view = view_matrix(Vec3::new(3.0, 2.0, 4.0), Vec3::ZERO, Vec3::UP).unwrap();
        let x = view.transform_direction(Vec3::RIGHT).to_vec3();
        let y = view.transform_direction(Vec3::UP).to_vec3();
        assert_relative_eq!(x.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(y.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(x.dot(y), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn view_matrix_rejects_parallel_up() {
        let result = view_matrix(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, Vec3::UP);
        assert!(matches!(result, Err(RenderError::DegenerateVector(_))));

        let result = view_matrix(Vec3::ONE, Vec3::ONE, Vec3::UP);
        assert!(matches!(result, Err(RenderError::DegenerateVector(_))));
    }

    #[test]
    fn projection_sets_reciprocal_depth_term() {
        let p = projection_matrix(-0.2);
        assert_eq!(p.get(2, 3), -0.2);
        let v = p.transform_point(Vec3::new(1.0, 1.0, -1.0));
        assert_relative_eq!(v.w, 1.2);
    }

    #[test]
    fn viewport_maps_ndc_corners_to_pixels() {
        let vp = viewport_matrix(0.0, 0.0, 800.0, 600.0);
        let lo = Vec4::point(Vec3::new(-1.0, -1.0, 0.5)) * vp;
        let hi = Vec4::point(Vec3::new(1.0, 1.0, 0.5)) * vp;
        assert_eq!((lo.x, lo.y, lo.z), (0.0, 0.0, 0.5));
        assert_eq!((hi.x, hi.y), (800.0, 600.0));
    }

    #[test]
    fn transform_applies_scale_before_translation() {
        let mut t = Transform::new();
        t.set_position_xyz(1.0, 0.0, 0.0).set_scale_uniform(2.0);
        let p = t.to_matrix().transform_point(Vec3::RIGHT);
        assert_relative_eq!(p.x, 3.0);
    }

    #[test]
    fn transform_rotates_z_before_x() {
        use std::f32::consts::FRAC_PI_2;

        let mut t = Transform::new();
        t.set_rotation(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        // Roll takes +X to +Y, then pitch takes +Y to +Z
        let p = t.to_matrix().transform_point(Vec3::RIGHT);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn transform_composes_scale_rotation_translation() {
        let mut t = Transform::new();
        t.set_position_xyz(1.0, -2.0, 0.5)
            .set_rotation(Vec3::new(0.3, -0.7, 1.1))
            .set_scale(Vec3::new(2.0, 0.5, 3.0));
        let expected = Mat4::scaling(2.0, 0.5, 3.0)
            * Mat4::rotation_z(1.1)
            * Mat4::rotation_y(-0.7)
            * Mat4::rotation_x(0.3)
            * Mat4::translation(1.0, -2.0, 0.5);
        let m = t.to_matrix();
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(m.get(row, col), expected.get(row, col), epsilon = 1e-6);
            }
        }

        // Quarter roll after doubling: (1, 0, 0) -> (2, 0, 0) -> (0, 2, 0), then translate
        let mut t = Transform::new();
        t.set_position_xyz(1.0, 0.0, 0.0)
            .set_rotation(Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2))
            .set_scale_uniform(2.0);
        let p = t.to_matrix().transform_point(Vec3::RIGHT);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
    }
}

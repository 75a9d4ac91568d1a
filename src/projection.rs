//! Perspective projection parameters.
//!
//! The [`Projection`] struct holds the single reciprocal-depth coefficient of
//! the projection matrix (see [`transform::projection_matrix`]).

use crate::camera::Camera;
use crate::math::mat4::Mat4;
use crate::transform;

/// Default coefficient; a mild perspective for models spanning [-1, 1].
pub const DEFAULT_COEFFICIENT: f32 = -0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Added to `w` per unit of view-space z (`w = 1 + coefficient * z`).
    coefficient: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(DEFAULT_COEFFICIENT)
    }
}

impl Projection {
    pub fn new(coefficient: f32) -> Self {
        Self { coefficient }
    }

    /// Projection whose centre coincides with the camera eye: `-1 / distance`.
    pub fn for_camera(camera: &Camera) -> Self {
        Self::new(-1.0 / camera.distance())
    }

    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    pub fn matrix(&self) -> Mat4 {
        transform::projection_matrix(self.coefficient)
    }
}

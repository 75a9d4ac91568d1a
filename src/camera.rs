//! Look-at camera.
//!
//! # Coordinate System
//!
//! Uses a **right-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera looks down -Z)

use crate::error::Result;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::transform;

/// Camera defined by an eye position, a target point and an up hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 1.0), Vec3::UP)
    }
}

impl Camera {
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self { eye, center, up }
    }

    /// Distance from the eye to the point it looks at.
    pub fn distance(&self) -> f32 {
        (self.eye - self.center).magnitude()
    }

    /// Builds the look-at view matrix for this camera.
    pub fn view_matrix(&self) -> Result<Mat4> {
        transform::view_matrix(self.eye, self.center, self.up)
    }

    /// Position of the eye after the view transform.
    pub fn eye_in_view_space(&self) -> Result<Vec3> {
        Ok(self.view_matrix()?.transform_point(self.eye).to_vec3())
    }
}

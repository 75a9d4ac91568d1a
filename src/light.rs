//! Lighting types for the renderer.

use crate::error::Result;
use crate::math::vec3::Vec3;
use crate::texture::Rgba;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Normalized direction; a surface whose normal equals it is fully lit.
    direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized, and a
    /// zero vector is rejected.
    pub fn new(direction: Vec3) -> Result<Self> {
        Ok(DirectionalLight {
            direction: direction.try_normalize("light direction")?,
        })
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Half-Lambert intensity: `(dot(normal, direction) + 1) / 2`.
    ///
    /// Remaps the cosine from [-1, 1] to [0, 1], so surfaces facing away from
    /// the light stay visible. `normal` must already be unit length.
    #[inline]
    pub fn intensity(&self, normal: Vec3) -> f32 {
        (normal.dot(self.direction) + 1.0) / 2.0
    }
}

/// Scales the RGB channels by `intensity` with rounding; alpha is untouched.
#[inline]
pub fn modulate(color: Rgba, intensity: f32) -> Rgba {
    let [r, g, b, a] = color;
    let scale = |c: u8| (c as f32 * intensity).round().clamp(0.0, 255.0) as u8;
    [scale(r), scale(g), scale(b), a]
}

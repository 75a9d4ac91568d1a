//! Pixel shaders for triangle rasterization.
//!
//! The rasterizer owns coverage, perspective correction and the depth test;
//! a shader only turns perspective-correct barycentric weights into a color.

use crate::light::{modulate, DirectionalLight};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::texture::{Rgba, TextureSource};

/// Trait for per-pixel shading computations.
///
/// The `lambda` parameter holds three weights `[λ₀, λ₁, λ₂]` that sum to 1
/// and can interpolate any per-vertex attribute:
/// `attr = λ₀*attr₀ + λ₁*attr₁ + λ₂*attr₂`.
pub trait PixelShader {
    /// Compute the color for a pixel given its barycentric coordinates.
    fn shade(&self, lambda: [f32; 3]) -> Rgba;
}

/// Samples a texture at the interpolated UV and scales it by half-Lambert
/// lighting of the interpolated normal.
pub struct TexturedLambertShader<'a, T: TextureSource + ?Sized> {
    texture: &'a T,
    light: &'a DirectionalLight,
    uvs: [Vec2; 3],
    normals: [Vec3; 3],
}

impl<'a, T: TextureSource + ?Sized> TexturedLambertShader<'a, T> {
    /// `normals` are view-space vertex normals and need not be unit length.
    pub fn new(
        texture: &'a T,
        light: &'a DirectionalLight,
        uvs: [Vec2; 3],
        normals: [Vec3; 3],
    ) -> Self {
        Self {
            texture,
            light,
            uvs,
            normals,
        }
    }

    #[inline]
    fn interpolate_uv(&self, lambda: [f32; 3]) -> Vec2 {
        self.uvs[0] * lambda[0] + self.uvs[1] * lambda[1] + self.uvs[2] * lambda[2]
    }

    #[inline]
    fn interpolate_normal(&self, lambda: [f32; 3]) -> Vec3 {
        self.normals[0] * lambda[0] + self.normals[1] * lambda[1] + self.normals[2] * lambda[2]
    }

    /// Light intensity for the interpolated normal. A normal that interpolates
    /// to zero length counts as perpendicular to the light.
    #[inline]
    fn intensity(&self, lambda: [f32; 3]) -> f32 {
        let normal = self.interpolate_normal(lambda);
        let length = normal.magnitude();
        if length > 0.0 && length.is_finite() {
            self.light.intensity(normal / length)
        } else {
            0.5
        }
    }
}

impl<T: TextureSource + ?Sized> PixelShader for TexturedLambertShader<'_, T> {
    #[inline]
    fn shade(&self, lambda: [f32; 3]) -> Rgba {
        let uv = self.interpolate_uv(lambda);
        let color = self.texture.sample(uv.x, uv.y);
        modulate(color, self.intensity(lambda))
    }
}

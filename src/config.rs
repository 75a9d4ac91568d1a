//! Render configuration.
//!
//! [`RenderConfig::default`] reproduces the stock scene: an 800×800 viewport,
//! a camera at (0, 0, 2) looking at (0, 0, 1), projection coefficient -0.2 and
//! a light along +X.

use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::texture::Rgba;
use crate::transform::{self, Transform};

/// Environment variable overriding the light direction, as `x,y,z`.
pub const LIGHT_ENV_VAR: &str = "SOFTRENDER_LIGHT";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub camera: Camera,
    pub projection: Projection,
    /// Model transform applied before the view matrix.
    pub model: Transform,
    /// Faces are fully lit when their normal points along this direction.
    pub light_direction: Vec3,
    pub backface_culling: bool,
    pub background: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            camera: Camera::default(),
            projection: Projection::default(),
            model: Transform::default(),
            light_direction: Vec3::RIGHT,
            backface_culling: false,
            background: [0, 0, 0, 255],
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_model(mut self, model: Transform) -> Self {
        self.model = model;
        self
    }

    pub fn with_light_direction(mut self, direction: Vec3) -> Self {
        self.light_direction = direction;
        self
    }

    pub fn with_backface_culling(mut self, enabled: bool) -> Self {
        self.backface_culling = enabled;
        self
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Applies overrides from the process environment ([`LIGHT_ENV_VAR`]).
    pub fn with_env_overrides(self) -> Result<Self> {
        match std::env::var(LIGHT_ENV_VAR) {
            Ok(value) => Ok(self.with_light_direction(parse_vec3(&value)?)),
            Err(_) => Ok(self),
        }
    }

    /// Rejects configurations that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.projection.coefficient().is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "projection coefficient {} is not finite",
                self.projection.coefficient()
            )));
        }
        Ok(())
    }

    /// Viewport matrix for a `width`×`height` target: the square of side
    /// `min(width, height)` anchored at the origin.
    pub fn viewport_matrix(width: u32, height: u32) -> Mat4 {
        let side = width.min(height) as f32;
        transform::viewport_matrix(0.0, 0.0, side, side)
    }
}

/// Parses `x,y,z` (whitespace around components allowed).
pub fn parse_vec3(value: &str) -> Result<Vec3> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| RenderError::InvalidConfig(format!("`{value}`: {e}")))?;
    match parts.as_slice() {
        &[x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => Err(RenderError::InvalidConfig(format!(
            "`{value}`: expected three comma-separated numbers"
        ))),
    }
}

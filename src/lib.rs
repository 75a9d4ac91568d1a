//! A CPU-based software rasterizer for textured, lit triangle meshes.
//!
//! Meshes are transformed through a model → view → projection → viewport
//! chain of 4×4 matrices, rasterized with perspective-correct barycentric
//! interpolation and a depth buffer, textured, lit with a half-Lambert
//! directional light and written through a [`PixelSink`].
//!
//! # Quick Start
//!
//! ```ignore
//! use softrender::prelude::*;
//!
//! let mesh = Mesh::from_obj_file("head.obj")?;
//! let texture = Texture::from_file("head_diffuse.png")?;
//! let renderer = Renderer::new(RenderConfig::default())?;
//! let mut framebuffer = renderer.framebuffer()?;
//! renderer.render(&mesh, &texture, &mut framebuffer)?;
//! framebuffer.save("render.png")?;
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod framebuffer;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod renderer;
pub mod texture;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use framebuffer::{FnSink, Framebuffer, PixelSink};
pub use mesh::Mesh;
pub use renderer::{render_model, RenderStats, Renderer};
pub use texture::{Rgba, Texture, TextureSource};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrender::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::config::RenderConfig;
    pub use crate::light::DirectionalLight;
    pub use crate::projection::Projection;
    pub use crate::transform::Transform;

    // Assets
    pub use crate::mesh::Mesh;
    pub use crate::texture::{Texture, TextureSource};

    // Output
    pub use crate::framebuffer::{FnSink, Framebuffer, PixelSink};
    pub use crate::renderer::{render_model, RenderStats, Renderer};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
}

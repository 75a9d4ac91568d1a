//! Render entry point: mesh + texture + light in, pixels out.

use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::framebuffer::{Framebuffer, PixelSink};
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::mesh::{Face, Mesh};
use crate::render::{
    transform_normals, transform_vertices, DepthBuffer, EdgeFunctionRasterizer, FillStats,
    TexturedLambertShader, Triangle,
};
use crate::texture::TextureSource;

/// Counters for one render call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Faces in the mesh.
    pub faces: usize,
    /// Faces discarded by back-face culling.
    pub faces_culled: usize,
    /// Pixels written to the sink.
    pub pixels_written: usize,
    /// Covered pixels that lost the depth test.
    pub depth_rejections: usize,
}

/// Draws meshes with a fixed [`RenderConfig`].
///
/// Every call builds its own depth buffer, so rendering the same inputs into
/// identically prepared sinks yields identical pixels.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    rasterizer: EdgeFunctionRasterizer,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rasterizer: EdgeFunctionRasterizer::new(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// A framebuffer of the configured size, cleared to the background color.
    pub fn framebuffer(&self) -> Result<Framebuffer> {
        let mut framebuffer = Framebuffer::new(self.config.width, self.config.height)?;
        framebuffer.clear(self.config.background);
        Ok(framebuffer)
    }

    /// Renders `mesh` into `sink`.
    ///
    /// The viewport is the square of side `min(width, height)` of the sink,
    /// anchored at its bottom-left corner.
    ///
    /// # Errors
    ///
    /// Fails before any pixel is written if the mesh is inconsistent, the
    /// light direction is zero, the camera basis is degenerate or the
    /// model-view matrix is singular.
    pub fn render<T, P>(&self, mesh: &Mesh, texture: &T, sink: &mut P) -> Result<RenderStats>
    where
        T: TextureSource + ?Sized,
        P: PixelSink + ?Sized,
    {
        mesh.validate()?;
        let config = &self.config;
        let light = DirectionalLight::new(config.light_direction)?;
        let (width, height) = (sink.width(), sink.height());

        info!(
            vertices = mesh.positions().len(),
            faces = mesh.faces().len(),
            width,
            height,
            "Rendering mesh"
        );

        // ─────────────────────────────────────────────────────────────────────
        // Vertex stage
        // ─────────────────────────────────────────────────────────────────────
        let model_view = config.model.to_matrix() * config.camera.view_matrix()?;
        let mvpv = model_view
            * config.projection.matrix()
            * RenderConfig::viewport_matrix(width, height);
        let vertices = transform_vertices(mesh.positions(), &mvpv);
        let normals = transform_normals(mesh.normals(), &model_view)?;

        let culling = if config.backface_culling {
            let eye = config.camera.eye_in_view_space()?;
            let view_positions: Vec<Vec3> = mesh
                .positions()
                .iter()
                .map(|&p| model_view.transform_point(p).to_vec3())
                .collect();
            Some((eye, view_positions))
        } else {
            None
        };

        // ─────────────────────────────────────────────────────────────────────
        // Raster stage
        // ─────────────────────────────────────────────────────────────────────
        let mut depth = DepthBuffer::new(width, height);
        let mut stats = RenderStats {
            faces: mesh.faces().len(),
            ..Default::default()
        };
        let mut fill = FillStats::default();

        for face in mesh.faces() {
            if let Some((eye, positions)) = &culling {
                if is_back_facing(face, positions, *eye) {
                    stats.faces_culled += 1;
                    continue;
                }
            }

            let [c0, c1, c2] = face.vertices;
            let triangle = Triangle::new([
                vertices[c0.vertex.0],
                vertices[c1.vertex.0],
                vertices[c2.vertex.0],
            ]);
            let shader = TexturedLambertShader::new(
                texture,
                &light,
                [c0, c1, c2].map(|c| mesh.texture_coords()[c.texture.0]),
                [c0, c1, c2].map(|c| normals[c.normal()]),
            );
            fill += self
                .rasterizer
                .fill_triangle(&triangle, &shader, &mut depth, sink);
        }

        stats.pixels_written = fill.written;
        stats.depth_rejections = fill.occluded;
        debug!(
            faces_culled = stats.faces_culled,
            pixels_written = stats.pixels_written,
            depth_rejections = stats.depth_rejections,
            "Render finished"
        );
        Ok(stats)
    }
}

/// True if the face turns away from the eye; all inputs are in view space.
fn is_back_facing(face: &Face, positions: &[Vec3], eye: Vec3) -> bool {
    let [a, b, c] = face.vertices.map(|corner| positions[corner.vertex.0]);
    let normal = (b - a).cross(c - a);
    normal.dot(eye - a) <= 0.0
}

/// Renders with the default configuration and the given light direction.
///
/// The viewport follows the sink size.
pub fn render_model<T, P>(
    mesh: &Mesh,
    texture: &T,
    light_direction: Vec3,
    sink: &mut P,
) -> Result<RenderStats>
where
    T: TextureSource + ?Sized,
    P: PixelSink + ?Sized,
{
    let config = RenderConfig::default()
        .with_size(sink.width(), sink.height())
        .with_light_direction(light_direction);
    Renderer::new(config)?.render(mesh, texture, sink)
}

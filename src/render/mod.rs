//! Rendering pipeline stages below the [`Renderer`](crate::Renderer).

pub mod depth;
pub mod rasterizer;
pub mod vertex;

pub use depth::DepthBuffer;
pub use rasterizer::{
    barycentric, EdgeFunctionRasterizer, FillStats, PixelShader, TexturedLambertShader, Triangle,
};
pub use vertex::{transform_normals, transform_vertices, TransformedVertex};

//! Triangle rasterization.
//!
//! [`EdgeFunctionRasterizer`] walks the screen-space bounding box of each
//! triangle, weights every pixel with barycentric coordinates, corrects them
//! for perspective, runs the depth test and hands surviving pixels to a
//! [`PixelShader`].

mod edgefunction;
mod shader;

pub use edgefunction::{barycentric, EdgeFunctionRasterizer};
pub use shader::{PixelShader, TexturedLambertShader};

use std::ops::AddAssign;

use super::vertex::TransformedVertex;

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [TransformedVertex; 3],
}

impl Triangle {
    pub fn new(points: [TransformedVertex; 3]) -> Self {
        Self { points }
    }
}

/// Pixel counts produced by filling one or more triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Pixels that passed the depth test and were written.
    pub written: usize,
    /// Covered pixels rejected by the depth test.
    pub occluded: usize,
}

impl AddAssign for FillStats {
    fn add_assign(&mut self, rhs: Self) {
        self.written += rhs.written;
        self.occluded += rhs.occluded;
    }
}

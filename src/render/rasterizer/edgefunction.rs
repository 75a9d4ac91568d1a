//! Edge function-based triangle rasterization.
//!
//! For an edge from A to B, the edge function at point P is the 2D cross
//! product (B - A) × (P - A):
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! Dividing the edge function of the edge opposite each vertex by the signed
//! area of the whole triangle yields barycentric weights that are all
//! non-negative inside the triangle, whatever its winding.
//!
//! Pixels are sampled at their integer coordinates, and pixels on an edge
//! (a zero weight) count as covered.

use super::shader::PixelShader;
use super::{FillStats, Triangle};
use crate::framebuffer::PixelSink;
use crate::math::vec2::Vec2;
use crate::render::depth::DepthBuffer;

/// Edge function rasterizer with perspective-correct interpolation and a
/// greater-wins depth test.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeFunctionRasterizer;

/// Barycentric weights of `p` with respect to triangle `(a, b, c)`.
///
/// Returns `None` for a degenerate (zero-area) triangle. A negative weight
/// means `p` lies outside the triangle.
#[inline]
pub fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<[f32; 3]> {
    let area = edge_function(a, b, c);
    if area.abs() < f32::EPSILON {
        return None;
    }
    let inv_area = 1.0 / area;
    Some([
        edge_function(b, c, p) * inv_area,
        edge_function(c, a, p) * inv_area,
        edge_function(a, b, p) * inv_area,
    ])
}

#[inline]
fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Inclusive pixel range covered by `[min, max]` after rounding, clipped to
/// `[0, limit)`. None when nothing is left.
#[inline]
fn pixel_span(min: f32, max: f32, limit: u32) -> Option<(u32, u32)> {
    let lo = min.round().max(0.0);
    let hi = max.round().min(limit as f32 - 1.0);
    // NaN bounds fail this comparison as well
    if lo <= hi {
        Some((lo as u32, hi as u32))
    } else {
        None
    }
}

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    /// Rasterize `triangle` into `sink`, shading every pixel that wins the
    /// depth test.
    ///
    /// Writes are clipped to the smaller of the sink and the depth buffer.
    pub fn fill_triangle<S, P>(
        &self,
        triangle: &Triangle,
        shader: &S,
        depth: &mut DepthBuffer,
        sink: &mut P,
    ) -> FillStats
    where
        S: PixelShader + ?Sized,
        P: PixelSink + ?Sized,
    {
        let mut stats = FillStats::default();
        let [v0, v1, v2] = triangle.points;
        let [a, b, c] = [v0, v1, v2].map(|v| Vec2::new(v.screen.x, v.screen.y));

        // ─────────────────────────────────────────────────────────────────────
        // Step 1: Reject degenerate triangles
        // ─────────────────────────────────────────────────────────────────────
        if barycentric(a, a, b, c).is_none() {
            return stats;
        }

        // ─────────────────────────────────────────────────────────────────────
        // Step 2: Compute bounding box, clipped to the target
        // ─────────────────────────────────────────────────────────────────────
        let width = sink.width().min(depth.width());
        let height = sink.height().min(depth.height());
        let Some((min_x, max_x)) = pixel_span(a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x), width)
        else {
            return stats;
        };
        let Some((min_y, max_y)) = pixel_span(a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y), height)
        else {
            return stats;
        };

        // Depth and inverse w are interpolated with the same weights
        let depths = [v0.screen.z, v1.screen.z, v2.screen.z];
        let inv_w = [1.0 / v0.w, 1.0 / v1.w, 1.0 / v2.w];

        // ─────────────────────────────────────────────────────────────────────
        // Step 3: Iterate over all pixels in bounding box
        // ─────────────────────────────────────────────────────────────────────
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32, y as f32);
                let Some(screen) = barycentric(p, a, b, c) else {
                    continue;
                };
                if screen.iter().any(|&l| l < 0.0) {
                    continue;
                }

                // Perspective correction: weight by 1/w, then renormalize
                let corrected = [screen[0] * inv_w[0], screen[1] * inv_w[1], screen[2] * inv_w[2]];
                let sum = corrected[0] + corrected[1] + corrected[2];
                if sum == 0.0 || !sum.is_finite() {
                    continue;
                }
                let lambda = corrected.map(|l| l / sum);

                let z = lambda[0] * depths[0] + lambda[1] * depths[1] + lambda[2] * depths[2];
                if !depth.test_and_set(x, y, z) {
                    stats.occluded += 1;
                    continue;
                }

                sink.put_pixel(x, y, shader.shade(lambda));
                stats.written += 1;
            }
        }

        stats
    }
}

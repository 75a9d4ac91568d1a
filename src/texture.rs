//! Texture sources for texture mapping.
//!
//! A texture is addressed by `(col, row)` texel coordinates over a flat RGBA
//! byte array at offset `(row * width + col) * 4`. Row 0 is the **bottom**
//! row, matching OBJ texture coordinates where `v = 0` is the bottom edge.
//!
//! This departs from indexing a decoded image directly at `round(height * v)`,
//! which reads top row first and so samples textures upside down relative to
//! OBJ coordinates. [`Texture::from_file`] flips images once on load instead.

use std::path::Path;

use tracing::info;

use crate::error::{RenderError, Result};

/// An RGBA color, one byte per channel.
pub type Rgba = [u8; 4];

/// Read-only pixel source sampled by the rasterizer.
pub trait TextureSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Color of the texel at `(col, row)`. Callers keep coordinates in range.
    fn texel(&self, col: u32, row: u32) -> Rgba;

    /// Nearest-texel lookup for texture coordinates `(u, v)`.
    ///
    /// Indices are `round(width * u)` and `round(height * v)`, clamped to the
    /// texture so `u = 1` or `v = 1` reads the last column or row.
    #[inline]
    fn sample(&self, u: f32, v: f32) -> Rgba {
        let col = (self.width() as f32 * u).round();
        let row = (self.height() as f32 * v).round();
        // `as u32` saturates negatives and NaN to 0
        let col = (col as u32).min(self.width().saturating_sub(1));
        let row = (row as u32).min(self.height().saturating_sub(1));
        self.texel(col, row)
    }
}

/// Owned RGBA8 texture.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Wraps raw RGBA bytes, bottom row first.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidTexture(format!(
                "empty texture {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RenderError::InvalidTexture(format!(
                "{width}x{height} RGBA needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A texture filled with a single color.
    pub fn solid(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::from_rgba(width, height, data)
    }

    /// Load a texture from an image file (PNG, JPG, etc.)
    ///
    /// Image files store the top row first, so the image is flipped to put
    /// row 0 at the bottom.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut img = image::open(path)?.to_rgba8();
        image::imageops::flip_vertical_in_place(&mut img);
        let (width, height) = img.dimensions();
        info!(path = %path.display(), width, height, "Loaded texture");
        Self::from_rgba(width, height, img.into_raw())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl TextureSource for Texture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn texel(&self, col: u32, row: u32) -> Rgba {
        let offset = (row as usize * self.width as usize + col as usize) * 4;
        let mut color = [0u8; 4];
        color.copy_from_slice(&self.data[offset..offset + 4]);
        color
    }
}

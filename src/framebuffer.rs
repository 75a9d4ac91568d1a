//! Output surface for rendered pixels.
//!
//! Rendering coordinates put the origin at the **bottom-left** with y growing
//! upward, while the backing store is row-major with the **top** row first,
//! as image files and display textures expect. Pixel `(x, y)` lives at byte
//! offset `((height - 1 - y) * width + x) * 4`.

use std::path::Path;

use tracing::info;

use crate::error::{RenderError, Result};
use crate::texture::Rgba;

/// Destination for pixel writes emitted by the rasterizer.
pub trait PixelSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Writes one pixel; `(0, 0)` is the bottom-left corner.
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba);
}

/// Owned RGBA8 color buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Creates a buffer cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport { width, height });
        }
        Ok(Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        })
    }

    pub fn clear(&mut self, color: Rgba) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            let row = (self.height - 1 - y) as usize;
            Some((row * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.offset(x, y).map(|i| {
            let mut color = [0u8; 4];
            color.copy_from_slice(&self.pixels[i..i + 4]);
            color
        })
    }

    /// Raw RGBA bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes the buffer as an image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        info!(path = %path.display(), width = self.width, height = self.height, "Saved frame");
        Ok(())
    }
}

impl PixelSink for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&color);
        }
    }
}

/// Adapts a `put_pixel` closure into a [`PixelSink`] of the given size.
///
/// ```ignore
/// let mut sink = FnSink::new(800, 800, |x, y, rgba| canvas.set(x, y, rgba));
/// renderer.render(&mesh, &texture, &mut sink)?;
/// ```
pub struct FnSink<F> {
    width: u32,
    height: u32,
    put: F,
}

impl<F: FnMut(u32, u32, Rgba)> FnSink<F> {
    pub fn new(width: u32, height: u32, put: F) -> Self {
        Self { width, height, put }
    }
}

impl<F: FnMut(u32, u32, Rgba)> PixelSink for FnSink<F> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        (self.put)(x, y, color)
    }
}

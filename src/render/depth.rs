//! Per-pixel depth buffer.
//!
//! Depths start at negative infinity and the **greater** value wins: with the
//! projection's sign convention, larger depth is closer to the camera.

#[derive(Clone, Debug)]
pub struct DepthBuffer {
    depths: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            depths: vec![f32::NEG_INFINITY; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every cell to negative infinity.
    pub fn clear(&mut self) {
        self.depths.fill(f32::NEG_INFINITY);
    }

    /// Stored depth at (x, y), or None if out of bounds.
    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        (x < self.width && y < self.height)
            .then(|| self.depths[y as usize * self.width as usize + x as usize])
    }

    /// Stores `depth` and returns true if it is greater than the stored value.
    ///
    /// Out-of-bounds coordinates and NaN depths never pass.
    #[inline]
    pub fn test_and_set(&mut self, x: u32, y: u32, depth: f32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let cell = &mut self.depths[y as usize * self.width as usize + x as usize];
        if *cell < depth {
            *cell = depth;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_negative_infinity() {
        let buffer = DepthBuffer::new(2, 2);
        assert_eq!(buffer.depth(1, 1), Some(f32::NEG_INFINITY));
        assert_eq!(buffer.depth(2, 0), None);
    }

    #[test]
    fn greater_depth_wins() {
        let mut buffer = DepthBuffer::new(2, 2);
        assert!(buffer.test_and_set(0, 0, -5.0));
        assert!(buffer.test_and_set(0, 0, 1.0));
        assert!(!buffer.test_and_set(0, 0, 0.5));
        assert!(!buffer.test_and_set(0, 0, 1.0));
        assert_eq!(buffer.depth(0, 0), Some(1.0));
    }

    #[test]
    fn nan_never_passes() {
        let mut buffer = DepthBuffer::new(1, 1);
        assert!(!buffer.test_and_set(0, 0, f32::NAN));
    }

    #[test]
    fn clear_resets_cells() {
        let mut buffer = DepthBuffer::new(1, 1);
        buffer.test_and_set(0, 0, 3.0);
        buffer.clear();
        assert_eq!(buffer.depth(0, 0), Some(f32::NEG_INFINITY));
    }
}

//! CPU framebuffer backing the root view.
//!
//! Gray4 pixels, initialized to white (the default screen background).
//! Out-of-bounds writes are clipped, never a panic.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::GrayColor;

/// CPU-based framebuffer holding the screen contents.
pub struct Framebuffer {
    /// Pixel storage, row-major.
    pub pixels: Vec<Gray4>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Framebuffer {
    /// Create a new framebuffer filled with white.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Gray4::WHITE; (width * height) as usize],
            width,
            height,
        }
    }

    /// Set the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Gray4) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Get the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Gray4> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Fill the entire framebuffer with one color.
    pub fn fill(&mut self, color: Gray4) {
        self.pixels.fill(color);
    }

    /// Clear the framebuffer back to white.
    pub fn clear(&mut self) {
        self.fill(Gray4::WHITE);
    }

    /// Convert to 0xAARRGGBB pixels for window presentation.
    pub fn to_rgba(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|p| {
                // Gray4 luma 0-15 maps to byte 0-255.
                let v = u32::from(p.luma()) * 17;
                0xFF00_0000 | (v << 16) | (v << 8) | v
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer_is_white() {
        let fb = Framebuffer::new(8, 4);
        assert_eq!(fb.pixels.len(), 32);
        assert!(fb.pixels.iter().all(|&p| p == Gray4::WHITE));
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut fb = Framebuffer::new(8, 4);
        fb.set_pixel(3, 2, Gray4::BLACK);
        assert_eq!(fb.get_pixel(3, 2), Some(Gray4::BLACK));
        assert_eq!(fb.get_pixel(4, 2), Some(Gray4::WHITE));
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut fb = Framebuffer::new(8, 4);
        fb.set_pixel(8, 0, Gray4::BLACK);
        fb.set_pixel(0, 4, Gray4::BLACK);
        assert!(fb.pixels.iter().all(|&p| p == Gray4::WHITE));
    }

    #[test]
    fn test_out_of_bounds_read_is_none() {
        let fb = Framebuffer::new(8, 4);
        assert_eq!(fb.get_pixel(8, 0), None);
        assert_eq!(fb.get_pixel(0, 4), None);
    }

    #[test]
    fn test_clear_resets_to_white() {
        let mut fb = Framebuffer::new(8, 4);
        fb.fill(Gray4::BLACK);
        fb.clear();
        assert!(fb.pixels.iter().all(|&p| p == Gray4::WHITE));
    }

    #[test]
    fn test_to_rgba_black_and_white() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set_pixel(0, 0, Gray4::BLACK);
        let rgba = fb.to_rgba();
        assert_eq!(rgba[0], 0xFF00_0000);
        assert_eq!(rgba[1], 0xFFFF_FFFF);
    }
}

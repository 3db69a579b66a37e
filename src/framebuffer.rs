//! Core framebuffer for pixel rendering.
//!
//! Provides a row-major RGBA pixel buffer that the rasterizers and shape
//! builders draw into. Rows are padded to a fixed alignment; encoders use
//! [`Framebuffer::to_compact_pixels`] to strip the padding.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Row alignment in bytes (one cache line).
const ROW_ALIGNMENT: usize = 64;

/// RGBA framebuffer with aligned rows.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use aldea::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);
        let pixels = vec![0u8; stride * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get a row of pixels as a slice, without padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            let row = &mut self.pixels[start..start + (self.width as usize) * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        for row_y in y1..y2 {
            let start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[start..start + ((x2 - x1) as usize) * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0) as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0) as u8;
        }
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// Encoders like PNG expect tightly-packed pixel data.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert!(fb.stride() >= 400);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::rgb(135, 207, 250));

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::rgb(135, 207, 250)));
            }
        }
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(10, 10, 20, 20, Rgba::rgb(200, 0, 0));

        // Inside rect
        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::rgb(200, 0, 0)));
        // Outside rect
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        // One past the far edge
        assert_eq!(fb.get_pixel(30, 30), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_clamps_to_bounds() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(15, 15, 100, 100, Rgba::BLACK);
        assert_eq!(fb.get_pixel(19, 19), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(14, 14), Some(Rgba::WHITE));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::rgb(18, 135, 191));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::rgb(18, 135, 191)));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_blend_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        // Hull brown at the reflection's 40% opacity
        let ghost = Rgba::new(140, 69, 18, 102);
        fb.blend_pixel(5, 5, ghost);

        let result = fb.get_pixel(5, 5).unwrap();
        // Darker than white, lighter than the hull color
        assert!(result.r > 140 && result.r < 255);
        assert!(result.g > 69 && result.g < 255);
        assert!(result.b > 18 && result.b < 255);
    }

    #[test]
    fn test_blend_pixel_opaque_overwrites() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        fb.blend_pixel(1, 1, Rgba::BLACK);
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::BLACK));
    }

    #[test]
    fn test_to_compact_pixels() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::rgb(1, 2, 3));

        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert_eq!(&compact[0..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_row_access() {
        let mut fb = Framebuffer::new(10, 5).unwrap();
        fb.clear(Rgba::BLACK);
        fb.set_pixel(5, 2, Rgba::WHITE);

        let row = fb.row(2).unwrap();
        assert_eq!(row.len(), 40);
        assert_eq!(row[5 * 4], 255);
        assert!(fb.row(5).is_none());
    }
}

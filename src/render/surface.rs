//! In-memory raster surface.

use serde::{Deserialize, Serialize};

/// 24-bit color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
}

/// Row-major pixel buffer.
///
/// Drawing is clipped to the surface; nothing outside `[0, width) x
/// [0, height)` is ever written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Surface {
    /// Create a surface filled with black.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole surface.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Color at a pixel, `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Fill an axis-aligned rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgb) {
        let x0 = x.clamp(0, self.width as i64) as usize;
        let y0 = y.clamp(0, self.height as i64) as usize;
        let x1 = (x + w as i64).clamp(0, self.width as i64) as usize;
        let y1 = (y + h as i64).clamp(0, self.height as i64) as usize;

        let stride = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(color);
        }
    }

    /// Count pixels of a given color.
    #[must_use]
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.count(Rgb::BLACK), 12);
        assert_eq!(surface.pixel(3, 2), Some(Rgb::BLACK));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect() {
        let mut surface = Surface::new(10, 10);
        surface.fill_rect(2, 3, 4, 2, Rgb::RED);

        assert_eq!(surface.count(Rgb::RED), 8);
        assert_eq!(surface.pixel(2, 3), Some(Rgb::RED));
        assert_eq!(surface.pixel(5, 4), Some(Rgb::RED));
        assert_eq!(surface.pixel(6, 4), Some(Rgb::BLACK));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut surface = Surface::new(10, 10);
        surface.fill_rect(-5, 8, 8, 20, Rgb::GREEN);

        // x in [0, 3), y in [8, 10)
        assert_eq!(surface.count(Rgb::GREEN), 6);

        surface.fill_rect(50, 50, 5, 5, Rgb::RED);
        assert_eq!(surface.count(Rgb::RED), 0);
    }

    #[test]
    fn test_clear() {
        let mut surface = Surface::new(2, 2);
        surface.fill_rect(0, 0, 1, 1, Rgb::RED);
        surface.clear(Rgb::GREEN);
        assert_eq!(surface.count(Rgb::GREEN), 4);
    }
}

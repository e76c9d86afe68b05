//! Software frame buffer for the virtual frame
//!
//! Everything is drawn into a small fixed-size RGBA buffer which is then
//! scaled up to the window with nearest-neighbor sampling.

use std::path::Path;

use anyhow::Context;
use bytemuck::{Pod, Zeroable};

use crate::consts::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};

/// One RGBA8 pixel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Source-over blend of `self` onto `dst`
    fn over(self, dst: Rgba) -> Rgba {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let a = a as u16;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * inv) / 255) as u8;
                Rgba::new(
                    mix(self.r, dst.r),
                    mix(self.g, dst.g),
                    mix(self.b, dst.b),
                    dst.a.max(self.a),
                )
            }
        }
    }
}

/// Colors for frame elements
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::opaque(100, 100, 100);
    pub const LEFT_SCORE: Rgba = Rgba::opaque(0, 0, 150);
    pub const RIGHT_SCORE: Rgba = Rgba::opaque(150, 0, 0);
    pub const TIME_TEXT: Rgba = Rgba::opaque(0, 0, 0);
}

/// An immutable decoded image
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Build a sprite from pixels in row-major order
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        (pixels.len() == (width * height) as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a sprite from raw RGBA8 bytes
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        let pixels: &[Rgba] = bytemuck::try_cast_slice(bytes).ok()?;
        Self::new(width, height, pixels.to_vec())
    }

    /// A single-color rectangle
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }
}

/// RGBA drawing surface
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); (width * height) as usize],
        }
    }

    /// The fixed-size surface the game draws into
    pub fn virtual_frame() -> Self {
        Self::new(VIRTUAL_WIDTH, VIRTUAL_HEIGHT)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Blend a pixel; coordinates outside the frame are clipped
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(self.pixels[i]);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draw a sprite with its top-left corner at (x, y)
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        for sy in 0..sprite.height {
            let row = (sy * sprite.width) as usize;
            for sx in 0..sprite.width {
                let color = sprite.pixels[row + sx as usize];
                self.put_pixel(x + sx as i32, y + sy as i32, color);
            }
        }
    }

    /// Nearest-neighbor upscale (or downscale) to the given size
    pub fn scaled(&self, width: u32, height: u32) -> FrameBuffer {
        let mut out = FrameBuffer::new(width, height);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height {
            let src_y = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let src_x = (x as u64 * self.width as u64 / width as u64) as u32;
                out.pixels[(y * width + x) as usize] =
                    self.pixels[(src_y * self.width + src_x) as usize];
            }
        }
        out
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the frame to disk as a PNG
    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        let image = image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
            .context("frame buffer size does not match its dimensions")?;
        image
            .save(path)
            .with_context(|| format!("failed to write frame snapshot {}", path.display()))?;
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blit_clips_and_skips_transparent() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.fill(colors::BACKGROUND);

        let mut pixels = vec![Rgba::opaque(255, 0, 0); 4];
        pixels[3] = Rgba::new(0, 0, 0, 0);
        let sprite = Sprite::new(2, 2, pixels).unwrap();

        frame.blit(&sprite, 3, 3);
        assert_eq!(frame.pixel(3, 3), Some(Rgba::opaque(255, 0, 0)));

        frame.blit(&sprite, 0, 0);
        assert_eq!(frame.pixel(1, 1), Some(colors::BACKGROUND));
        assert_eq!(frame.pixel(0, 0), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn test_scaled_nearest_neighbor() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.put_pixel(1, 0, Rgba::opaque(9, 9, 9));

        let big = frame.scaled(8, 4);
        assert_eq!(big.pixel(3, 3), Some(Rgba::default()));
        assert_eq!(big.pixel(4, 0), Some(Rgba::opaque(9, 9, 9)));
        assert_eq!(big.as_bytes().len(), 8 * 4 * 4);
    }

    #[test]
    fn test_sprite_from_bytes_rejects_bad_length() {
        assert!(Sprite::from_rgba_bytes(2, 2, &[0u8; 15]).is_none());
        assert!(Sprite::from_rgba_bytes(2, 2, &[0u8; 12]).is_none());
        assert!(Sprite::from_rgba_bytes(2, 2, &[0u8; 16]).is_some());
    }

    #[test]
    fn test_half_alpha_blends() {
        let mut frame = FrameBuffer::new(1, 1);
        frame.fill(Rgba::opaque(0, 0, 0));
        frame.put_pixel(0, 0, Rgba::new(255, 255, 255, 128));
        let p = frame.pixel(0, 0).unwrap();
        assert!(p.r > 100 && p.r < 150);
        assert_eq!(p.a, 255);
    }
}

// Bounds-checked access to the decoded image's pixel grid.
// The scan owns one of these exclusively and repaints it in place.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::types::{Coordinate, FrameBuffer, Size};
use image::{DynamicImage, RgbImage, RgbaImage};

/// 3 for RGB sources, 4 for anything carrying alpha. Fixed per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb = 3,
    Rgba = 4,
}

pub struct PixelBuffer {
    size: Size,
    channels: Channels,
    data: Vec<u8>, // row-major, `channels` bytes per pixel
}

impl PixelBuffer {
    /// Wrap a decoded image. Grayscale widens to RGB(A), deep colour narrows to 8 bits.
    pub fn from_image(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            Self::from_rgba(img.into_rgba8())
        } else {
            Self::from_rgb(img.into_rgb8())
        }
    }

    pub fn from_rgb(img: RgbImage) -> Self {
        let size = Size::new(img.width(), img.height());
        Self { size, channels: Channels::Rgb, data: img.into_raw() }
    }

    pub fn from_rgba(img: RgbaImage) -> Self {
        let size = Size::new(img.width(), img.height());
        Self { size, channels: Channels::Rgba, data: img.into_raw() }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    fn offset(&self, c: Coordinate) -> Result<usize> {
        self.size
            .index_of(c)
            .map(|i| i * self.channels as usize)
            .ok_or(Error::OutOfRange {
                x: c.x,
                y: c.y,
                width: self.size.width,
                height: self.size.height,
            })
    }

    pub fn get(&self, c: Coordinate) -> Result<Color> {
        let o = self.offset(c)?;
        let d = &self.data;
        Ok(match self.channels {
            Channels::Rgb => Color::Rgb([d[o], d[o + 1], d[o + 2]]),
            Channels::Rgba => Color::Rgba([d[o], d[o + 1], d[o + 2], d[o + 3]]),
        })
    }

    /// Write a pixel. An RGB colour written into an RGBA buffer becomes opaque;
    /// an RGBA colour written into an RGB buffer loses its alpha.
    pub fn set(&mut self, c: Coordinate, color: Color) -> Result<()> {
        let o = self.offset(c)?;
        let [r, g, b] = color.rgb();
        self.data[o..o + 3].copy_from_slice(&[r, g, b]);
        if self.channels == Channels::Rgba {
            self.data[o + 3] = color.alpha().unwrap_or(u8::MAX);
        }
        Ok(())
    }

    pub fn is_transparent(&self, c: Coordinate) -> Result<bool> {
        Ok(self.get(c)?.is_transparent())
    }

    /// Flatten into 0x00RRGGBB words for the window. Alpha is dropped.
    pub fn to_frame(&self) -> FrameBuffer {
        let step = self.channels as usize;
        let pixels = self
            .data
            .chunks_exact(step)
            .map(|px| Color::Rgb([px[0], px[1], px[2]]).to_u32())
            .collect();
        FrameBuffer {
            width: self.size.width as usize,
            height: self.size.height as usize,
            pixels,
        }
    }
}

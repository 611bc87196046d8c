// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the repainted scan result.
// 2) The same window hosting the line animation, frame by frame.

use crate::animate::Surface;
use crate::error::{Error, Result};
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};
use std::time::Duration;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the image.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<()> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Keep showing `framebuffer` until the window is closed or ESC is pressed.
    pub fn hold(&mut self, framebuffer: &FrameBuffer) -> Result<()> {
        while self.is_open() && !self.esc_pressed() {
            self.present(framebuffer)?;
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }
}

impl Surface for Drawer {
    fn is_open(&self) -> bool {
        Drawer::is_open(self) && !self.esc_pressed()
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        Drawer::present(self, frame)
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i64, y: i64, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

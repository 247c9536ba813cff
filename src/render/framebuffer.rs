//! Owned ARGB8888 pixel buffer.
//!
//! [`FrameBuffer`] is the concrete [`Canvas`] used by the demo: the SDL2
//! window streams its bytes into a texture each frame, and headless export
//! converts it into an `image::RgbaImage`.

use crate::canvas::Canvas;
use crate::colors::{self, Color};

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    color: u32,
}

impl FrameBuffer {
    /// Create a buffer cleared to the background color.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND.to_argb(); size],
            width,
            height,
            color: Color::rgb(255, 255, 255).to_argb(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.color_buffer = vec![colors::BACKGROUND.to_argb(); size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y)
            .map(|idx| Color::from_argb(self.color_buffer[idx]))
    }

    /// Count pixels currently holding `color`. Used to inspect rendered frames.
    pub fn count(&self, color: Color) -> usize {
        let argb = color.to_argb();
        self.color_buffer.iter().filter(|&&c| c == argb).count()
    }

    /// Raw bytes for streaming into an ARGB8888 texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and stricter alignment than u8; the slice
        // covers exactly the initialized buffer and borrows it immutably.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Convert to an RGBA image for PNG export.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::from_argb(self.color_buffer[y as usize * self.width as usize + x as usize]);
            image::Rgba([c.r, c.g, c.b, c.a])
        })
    }
}

impl Canvas for FrameBuffer {
    fn set_color(&mut self, color: Color) {
        self.color = color.to_argb();
    }

    /// Out-of-bounds pixels are silently dropped.
    #[inline]
    fn plot_pixel(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = self.color;
        }
    }

    fn draw_span(&mut self, x0: i32, x1: i32, y: i32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (start, end) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let start = start.max(0);
        let end = end.min(self.width as i32 - 1);
        if start > end {
            return;
        }
        let row = y as usize * self.width as usize;
        self.color_buffer[row + start as usize..=row + end as usize].fill(self.color);
    }
}

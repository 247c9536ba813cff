//! Colors and the demo palette.
//!
//! Colors are stored in the frame buffer packed as ARGB8888, which is the
//! texture format the SDL2 window streams from.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Pack into a `0xAARRGGBB` word.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
pub const TRIANGLE: Color = Color::rgb(0, 255, 0);
pub const PENTAGON: Color = Color::rgb(255, 0, 0);
pub const CLIP_REGION: Color = Color::rgb(100, 100, 100);
pub const CLIPPED_LINE: Color = Color::rgb(0, 0, 255);
pub const REJECTED_LINE: Color = Color::rgb(255, 255, 0);

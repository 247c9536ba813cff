//! A small rasterization and clipping demonstrator.
//!
//! The core draws straight lines with an integer midpoint algorithm, clips
//! segments to a rectangle with Cohen-Sutherland, outlines polygons and fills
//! them with an even-odd scanline pass. Everything draws through the
//! [`Canvas`] trait; SDL2 is used only to show the resulting pixels.
//!
//! # Quick Start
//!
//! ```
//! use rastro::prelude::*;
//!
//! let mut frame = FrameBuffer::new(640, 480);
//! frame.set_color(Color::rgb(0, 255, 0));
//! rastro::raster::fill(&mut frame, &[
//!     Point::new(320, 50),
//!     Point::new(120, 250),
//!     Point::new(520, 250),
//! ])?;
//! assert_eq!(frame.get_pixel(320, 200), Some(Color::rgb(0, 255, 0)));
//! # Ok::<(), rastro::Error>(())
//! ```

// Rasterization core
pub mod canvas;
pub mod clipper;
pub mod colors;
pub mod math;
pub mod raster;

// Demonstrator
pub mod config;
pub mod error;
pub mod render;
pub mod scene;
pub mod sketch;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use canvas::Canvas;
pub use clipper::{ClipRegion, OutCode, Segment};
pub use error::{Error, Result};
pub use math::vec2::{Point, Vec2};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rastro::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use crate::canvas::Canvas;
    pub use crate::clipper::{clip_and_rasterize, ClipRegion, OutCode, Segment};
    pub use crate::colors::Color;
    pub use crate::math::vec2::{Point, Vec2};
    pub use crate::raster::{fill, outline, polyline, rasterize_line, LinePixels};

    // Demo
    pub use crate::config::DemoConfig;
    pub use crate::error::{Error, Result};
    pub use crate::render::FrameBuffer;
    pub use crate::scene::{DemoMode, Scene};
    pub use crate::sketch::{Shape, ShapeKind, Sketch};

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

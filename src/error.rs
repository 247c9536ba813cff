//! Error types for the rasterization demo.
//!
//! The rasterization core itself is almost entirely infallible: degenerate
//! geometry is a defined no-op, not an error. The variants here cover the
//! few places where something can actually go wrong: configuration,
//! scratch allocation while filling, and the SDL2/image collaborators.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Clip bounds were not finite or not strictly ordered.
    #[error("invalid clip region: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidClipRegion {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    /// Could not reserve the per-fill intersection list.
    #[error("failed to allocate scanline scratch space for {requested} intersections")]
    ScratchAllocation { requested: usize },

    /// Bad command line or configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// SDL2 reports its failures as plain strings.
    #[error("window error: {0}")]
    Window(String),

    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sdl2::video::WindowBuildError> for Error {
    fn from(err: sdl2::video::WindowBuildError) -> Self {
        Error::Window(err.to_string())
    }
}

impl From<sdl2::IntegerOrSdlError> for Error {
    fn from(err: sdl2::IntegerOrSdlError) -> Self {
        Error::Window(err.to_string())
    }
}

impl From<sdl2::render::TextureValueError> for Error {
    fn from(err: sdl2::render::TextureValueError) -> Self {
        Error::Window(err.to_string())
    }
}

impl From<sdl2::render::UpdateTextureError> for Error {
    fn from(err: sdl2::render::UpdateTextureError) -> Self {
        Error::Window(err.to_string())
    }
}

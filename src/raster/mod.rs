//! Integer rasterization of lines and polygons.
//!
//! - [`line`]: midpoint (Bresenham) line stepping
//! - [`polygon`]: closed outlines and open polylines built from lines
//! - [`shape`]: corner-normalized rectangles and midpoint circles
//! - [`scanline`]: even-odd polygon filling

pub mod line;
pub mod polygon;
pub mod scanline;
pub mod shape;

pub use line::{rasterize_line, LinePixels};
pub use polygon::{outline, polyline};
pub use scanline::{fill, Span};

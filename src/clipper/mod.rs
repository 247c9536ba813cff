//! Line clipping against a rectangular window.
//!
//! Clipping works in floating point; [`clip_and_rasterize`] is the one place
//! where clipped endpoints are rounded and handed to the integer rasterizer.

pub mod region;

pub use region::{clip_and_rasterize, ClipRegion, OutCode, Segment, MAX_CLIP_ITERATIONS};

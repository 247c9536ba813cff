//! Demo configuration.
//!
//! Screen size, frame rate and the clip window are plain values passed to
//! the scene and window rather than process-wide constants, so differently
//! clipped scenes can coexist in tests.

use std::path::PathBuf;

use clap::Parser;

use crate::clipper::ClipRegion;
use crate::error::{Error, Result};

pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;
pub const FPS: u64 = 60;

/// Default clip window as (x_min, y_min, x_max, y_max).
pub const CLIP_BOUNDS: (f64, f64, f64, f64) = (100.0, 100.0, 500.0, 400.0);

/// Line clipping and polygon filling demo
#[derive(Parser, Debug)]
#[command(name = "rastro", version, about)]
pub struct Cli {
    /// Window size as WxH (e.g., 640x480)
    #[arg(long, value_parser = parse_size, default_value = "640x480")]
    pub size: (u32, u32),

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u64,

    /// Clip window as XMIN,YMIN,XMAX,YMAX
    #[arg(long, value_parser = parse_clip, default_value = "100,100,500,400")]
    pub clip: (f64, f64, f64, f64),

    /// Render every mode to PNG files in this directory instead of opening a window
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u64,
    pub clip: ClipRegion,
    pub export_dir: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let (x_min, y_min, x_max, y_max) = CLIP_BOUNDS;
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
            clip: ClipRegion::from_ordered_bounds(x_min, x_max, y_min, y_max),
            export_dir: None,
        }
    }
}

impl DemoConfig {
    /// Parse a full argument list (including the program name).
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_cli(cli)
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.fps == 0 {
            return Err(Error::Config("fps must be > 0".to_string()));
        }
        let (x_min, y_min, x_max, y_max) = cli.clip;
        Ok(Self {
            width: cli.size.0,
            height: cli.size.1,
            fps: cli.fps,
            clip: ClipRegion::new(x_min, x_max, y_min, y_max)?,
            export_dir: cli.export,
        })
    }

    /// Milliseconds per frame at the target rate.
    pub fn frame_target_ms(&self) -> u64 {
        1000 / self.fps
    }
}

pub fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err("size must be WxH (e.g., 640x480)".to_string());
    }
    let w = parts[0].parse::<u32>().map_err(|_| "invalid width")?;
    let h = parts[1].parse::<u32>().map_err(|_| "invalid height")?;
    if w == 0 || h == 0 {
        return Err("width and height must be > 0".to_string());
    }
    // The ARGB buffer is w * h words and the texture pitch is w * 4 bytes.
    let fits = w
        .checked_mul(h)
        .and_then(|pixels| pixels.checked_mul(4))
        .is_some();
    if !fits {
        return Err(format!("size {w}x{h} is too large"));
    }
    Ok((w, h))
}

pub fn parse_clip(s: &str) -> std::result::Result<(f64, f64, f64, f64), String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| "clip bounds must be numbers")?;
    match values.as_slice() {
        &[x_min, y_min, x_max, y_max] => Ok((x_min, y_min, x_max, y_max)),
        _ => Err("clip must be XMIN,YMIN,XMAX,YMAX".to_string()),
    }
}

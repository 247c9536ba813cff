//! The demonstrator's shapes and drawing modes.
//!
//! Each mode is one self-contained drawing pass: nothing is carried from one
//! frame to the next, so a mode renders the same pixels every time.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::clipper::{clip_and_rasterize, ClipRegion, Segment};
use crate::colors;
use crate::error::Result;
use crate::math::vec2::Point;
use crate::raster::{fill, outline};
use crate::render::FrameBuffer;

pub const TRIANGLE: [Point; 3] = [
    Point::new(320, 50),
    Point::new(120, 250),
    Point::new(520, 250),
];

pub const PENTAGON: [Point; 5] = [
    Point::new(100, 300),
    Point::new(200, 300),
    Point::new(250, 400),
    Point::new(150, 450),
    Point::new(50, 400),
];

/// Crosses the default clip window corner to corner.
pub const CLIPPED_LINE: Segment = Segment::from_coords(50.0, 50.0, 600.0, 450.0);

/// Lies entirely left of the default clip window.
pub const REJECTED_LINE: Segment = Segment::from_coords(10.0, 10.0, 50.0, 400.0);

/// What the demo draws this frame. Enter cycles through the modes in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoMode {
    #[default]
    TriangleOutline,
    TriangleFill,
    PentagonOutline,
    ClipRegion,
    ClippedLine,
    RejectedLine,
}

impl DemoMode {
    pub const ALL: [DemoMode; 6] = [
        DemoMode::TriangleOutline,
        DemoMode::TriangleFill,
        DemoMode::PentagonOutline,
        DemoMode::ClipRegion,
        DemoMode::ClippedLine,
        DemoMode::RejectedLine,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The following mode, wrapping back to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Window title for this mode.
    pub fn title(self) -> String {
        format!("Mode {}: {}", self.index(), self)
    }
}

impl fmt::Display for DemoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoMode::TriangleOutline => write!(f, "Triangle outline"),
            DemoMode::TriangleFill => write!(f, "Filled triangle"),
            DemoMode::PentagonOutline => write!(f, "Pentagon outline"),
            DemoMode::ClipRegion => write!(f, "Clip region"),
            DemoMode::ClippedLine => write!(f, "Clipped line"),
            DemoMode::RejectedLine => write!(f, "Rejected line"),
        }
    }
}

pub struct Scene {
    clip: ClipRegion,
}

impl Scene {
    pub fn new(clip: ClipRegion) -> Self {
        Self { clip }
    }

    pub fn clip(&self) -> &ClipRegion {
        &self.clip
    }

    /// Draw one mode onto `canvas` without clearing it first.
    pub fn render<C: Canvas + ?Sized>(&self, mode: DemoMode, canvas: &mut C) -> Result<()> {
        match mode {
            DemoMode::TriangleOutline => {
                canvas.set_color(colors::TRIANGLE);
                outline(canvas, &TRIANGLE);
            }
            DemoMode::TriangleFill => {
                canvas.set_color(colors::TRIANGLE);
                fill(canvas, &TRIANGLE)?;
            }
            DemoMode::PentagonOutline => {
                canvas.set_color(colors::PENTAGON);
                outline(canvas, &PENTAGON);
            }
            DemoMode::ClipRegion => {
                canvas.set_color(colors::CLIP_REGION);
                self.clip.draw(canvas);
            }
            DemoMode::ClippedLine => {
                canvas.set_color(colors::CLIP_REGION);
                self.clip.draw(canvas);
                canvas.set_color(colors::CLIPPED_LINE);
                clip_and_rasterize(canvas, &self.clip, CLIPPED_LINE);
            }
            DemoMode::RejectedLine => {
                canvas.set_color(colors::CLIP_REGION);
                self.clip.draw(canvas);
                canvas.set_color(colors::REJECTED_LINE);
                clip_and_rasterize(canvas, &self.clip, REJECTED_LINE);
            }
        }
        Ok(())
    }

    /// Clear the frame to the background and draw `mode`.
    pub fn render_frame(&self, mode: DemoMode, frame: &mut FrameBuffer) -> Result<()> {
        frame.clear(colors::BACKGROUND);
        self.render(mode, frame)
    }

    /// Render every mode into `dir` as `mode-<n>.png`.
    pub fn export_modes(&self, width: u32, height: u32, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut frame = FrameBuffer::new(width, height);
        let mut written = Vec::with_capacity(DemoMode::ALL.len());

        for mode in DemoMode::ALL {
            self.render_frame(mode, &mut frame)?;
            let path = dir.join(format!("mode-{}.png", mode.index()));
            frame.to_image().save(&path)?;
            log::info!("exported {} to {}", mode.title(), path.display());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    fn scene() -> Scene {
        Scene::new(DemoConfig::default().clip)
    }

    fn rendered(mode: DemoMode) -> FrameBuffer {
        let mut frame = FrameBuffer::new(640, 480);
        scene().render_frame(mode, &mut frame).unwrap();
        frame
    }

    #[test]
    fn modes_cycle_and_wrap() {
        let mut mode = DemoMode::default();
        for expected in DemoMode::ALL.iter().skip(1) {
            mode = mode.next();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode.next(), DemoMode::TriangleOutline);
    }

    #[test]
    fn titles_carry_the_mode_number() {
        assert_eq!(DemoMode::TriangleOutline.title(), "Mode 0: Triangle outline");
        assert_eq!(DemoMode::RejectedLine.title(), "Mode 5: Rejected line");
    }

    #[test]
    fn triangle_fill_covers_base() {
        let frame = rendered(DemoMode::TriangleFill);
        assert_eq!(frame.get_pixel(120, 250), Some(colors::TRIANGLE));
        assert_eq!(frame.get_pixel(520, 250), Some(colors::TRIANGLE));
        assert_eq!(frame.get_pixel(320, 150), Some(colors::TRIANGLE));
        assert_eq!(frame.get_pixel(320, 251), Some(colors::BACKGROUND));
    }

    #[test]
    fn triangle_outline_leaves_interior_empty() {
        let frame = rendered(DemoMode::TriangleOutline);
        assert_eq!(frame.get_pixel(320, 50), Some(colors::TRIANGLE));
        assert_eq!(frame.get_pixel(320, 250), Some(colors::TRIANGLE));
        assert_eq!(frame.get_pixel(320, 150), Some(colors::BACKGROUND));
    }

    #[test]
    fn pentagon_outline_is_red() {
        let frame = rendered(DemoMode::PentagonOutline);
        assert_eq!(frame.get_pixel(150, 450), Some(colors::PENTAGON));
        assert_eq!(frame.count(colors::TRIANGLE), 0);
    }

    #[test]
    fn clipped_line_stays_inside_region() {
        let frame = rendered(DemoMode::ClippedLine);
        assert!(frame.count(colors::CLIPPED_LINE) > 0);
        for y in 0..480 {
            for x in 0..640 {
                if frame.get_pixel(x, y) == Some(colors::CLIPPED_LINE) {
                    assert!((100..=500).contains(&x) && (100..=400).contains(&y));
                }
            }
        }
    }

    #[test]
    fn rejected_line_draws_only_the_region() {
        let frame = rendered(DemoMode::RejectedLine);
        assert_eq!(frame.count(colors::REJECTED_LINE), 0);
        assert_eq!(frame.get_pixel(100, 100), Some(colors::CLIP_REGION));
    }

    #[test]
    fn each_frame_starts_from_background() {
        let s = scene();
        let mut frame = FrameBuffer::new(640, 480);
        s.render_frame(DemoMode::TriangleFill, &mut frame).unwrap();
        s.render_frame(DemoMode::ClipRegion, &mut frame).unwrap();
        assert_eq!(frame.count(colors::TRIANGLE), 0);
    }

    #[test]
    fn export_writes_one_png_per_mode() {
        let dir = std::env::temp_dir().join(format!("rastro-export-{}", std::process::id()));
        let written = scene().export_modes(64, 48, &dir).unwrap();
        assert_eq!(written.len(), 6);
        assert!(written.iter().all(|p| p.exists()));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}

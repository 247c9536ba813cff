//! Cohen-Sutherland line clipping against an axis-aligned rectangle.
//!
//! Each endpoint gets a 4-bit [`OutCode`] saying which sides of the region
//! it lies beyond:
//!
//! ```text
//!            x_min     x_max
//!              |         |
//!   0101       |  0100   |  0110        BOTTOM: y < y_min
//! -------------+---------+----- y_min
//!   0001       |  0000   |  0010        (y grows downward on screen)
//! -------------+---------+----- y_max
//!   1001       |  1000   |  1010        TOP:    y > y_max
//!              |         |
//! ```
//!
//! If both codes are clear the segment is accepted as-is; if they share a
//! bit both endpoints are beyond the same side and the segment is rejected.
//! Otherwise one outside endpoint is moved onto the boundary it violates and
//! the test repeats. Boundaries are resolved in the fixed order TOP, BOTTOM,
//! RIGHT, LEFT, which matters for corner points that violate two sides.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::math::vec2::{round_coord, Point, Vec2};
use crate::raster::rasterize_line;

/// Upper bound on intersection passes for one segment. Exact arithmetic needs
/// at most four; the extra headroom absorbs floating-point jitter at corners.
pub const MAX_CLIP_ITERATIONS: usize = 8;

/// Which sides of a [`ClipRegion`] a point lies beyond.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutCode(u8);

impl OutCode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl BitOr for OutCode {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OutCode {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// A directed line segment in floating-point coordinates.
///
/// Direction matters only for clip interpolation, which is parametrized from
/// `start` toward `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Round both endpoints to pixel coordinates (ties to even).
    pub fn to_pixels(&self) -> (Point, Point) {
        (self.start.round_to_pixel(), self.end.round_to_pixel())
    }
}

/// An axis-aligned clip rectangle, inclusive of its edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRegion {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ClipRegion {
    /// Build a region, requiring finite bounds with `x_min < x_max` and
    /// `y_min < y_max`.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(Error::InvalidClipRegion {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Build a region from bounds already known to be ordered and finite.
    pub(crate) const fn from_ordered_bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Classify a point against the region.
    pub fn outcode(&self, p: Vec2) -> OutCode {
        let mut code = OutCode::INSIDE;

        if p.x < self.x_min {
            code |= OutCode::LEFT;
        } else if p.x > self.x_max {
            code |= OutCode::RIGHT;
        }

        if p.y < self.y_min {
            code |= OutCode::BOTTOM;
        } else if p.y > self.y_max {
            code |= OutCode::TOP;
        }

        code
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.outcode(p).is_inside()
    }

    /// Return the part of `segment` that lies inside the region, or `None`
    /// if it lies entirely outside.
    ///
    /// A segment already inside is returned unchanged.
    pub fn clip(&self, segment: Segment) -> Option<Segment> {
        self.clip_with(segment, MAX_CLIP_ITERATIONS, |_| {})
    }

    /// Clip with at most `max_passes` intersection passes, reporting each
    /// endpoint replacement to `on_move`.
    fn clip_with<F: FnMut(Vec2)>(
        &self,
        segment: Segment,
        max_passes: usize,
        mut on_move: F,
    ) -> Option<Segment> {
        let mut start = segment.start;
        let mut end = segment.end;
        let mut code_start = self.outcode(start);
        let mut code_end = self.outcode(end);

        for _ in 0..max_passes {
            if (code_start | code_end).is_inside() {
                log::debug!("clip accept: {:?} -> {:?}", start, end);
                return Some(Segment::new(start, end));
            }
            if !(code_start & code_end).is_inside() {
                log::debug!("clip reject: {:?} -> {:?}", start, end);
                return None;
            }

            let move_start = !code_start.is_inside();
            let (outside, code_out) = if move_start {
                (start, code_start)
            } else {
                (end, code_end)
            };
            let moved = self.intersect(start, end, outside, code_out);
            on_move(moved);

            if move_start {
                start = moved;
                code_start = self.outcode(start);
            } else {
                end = moved;
                code_end = self.outcode(end);
            }
        }

        log::warn!(
            "clip did not settle after {} passes, rejecting {:?}",
            max_passes,
            segment
        );
        None
    }

    /// Move `outside` onto the highest-priority boundary named in `code`,
    /// along the line through `start` and `end`.
    fn intersect(&self, start: Vec2, end: Vec2, outside: Vec2, code: OutCode) -> Vec2 {
        let (dx, dy) = (end.x - start.x, end.y - start.y);

        // A zero delta on the solving axis cannot happen for a violated
        // boundary on that axis; keep the outside coordinate rather than divide.
        let x_at = |y_bound: f64| {
            if dy != 0.0 {
                start.x + dx * (y_bound - start.y) / dy
            } else {
                outside.x
            }
        };
        let y_at = |x_bound: f64| {
            if dx != 0.0 {
                start.y + dy * (x_bound - start.x) / dx
            } else {
                outside.y
            }
        };

        if code.contains(OutCode::TOP) {
            Vec2::new(x_at(self.y_max), self.y_max)
        } else if code.contains(OutCode::BOTTOM) {
            Vec2::new(x_at(self.y_min), self.y_min)
        } else if code.contains(OutCode::RIGHT) {
            Vec2::new(self.x_max, y_at(self.x_max))
        } else {
            Vec2::new(self.x_min, y_at(self.x_min))
        }
    }

    /// The region as an integer rectangle `(x, y, w, h)` suitable for
    /// [`Canvas::draw_rect`].
    pub fn pixel_rect(&self) -> (i32, i32, i32, i32) {
        let x = round_coord(self.x_min);
        let y = round_coord(self.y_min);
        let w = round_coord(self.x_max - self.x_min);
        let h = round_coord(self.y_max - self.y_min);
        (x, y, w, h)
    }

    /// Outline the region on the canvas with its current color.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let (x, y, w, h) = self.pixel_rect();
        canvas.draw_rect(x, y, w, h);
    }
}

/// Clip a segment to `region`, round the surviving endpoints, and rasterize
/// them with the canvas's current color.
///
/// Returns the pixel endpoints that were drawn, or `None` if the segment was
/// rejected.
pub fn clip_and_rasterize<C: Canvas + ?Sized>(
    canvas: &mut C,
    region: &ClipRegion,
    segment: Segment,
) -> Option<(Point, Point)> {
    let clipped = region.clip(segment)?;
    let (a, b) = clipped.to_pixels();
    rasterize_line(canvas, a.x, a.y, b.x, b.y);
    Some((a, b))
}

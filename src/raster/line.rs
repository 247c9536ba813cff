//! Integer midpoint line rasterization.
//!
//! This is the all-octant Bresenham formulation: one signed error term
//! tracks the distance between the ideal line and the current pixel, and
//! each iteration decides independently whether to step in x, in y, or in
//! both (a diagonal step).
//!
//! ```text
//! dx  = |x1 - x0|          sx = sign(x1 - x0)
//! dy  = -|y1 - y0|         sy = sign(y1 - y0)
//! err = dx + dy
//!
//! loop:
//!     plot (x, y)
//!     if (x, y) == (x1, y1): stop
//!     e2 = 2 * err
//!     if e2 >= dy: err += dy; x += sx
//!     if e2 <= dx: err += dx; y += sy
//! ```
//!
//! The two tests are deliberately not an `if`/`else`: a 45° line needs both
//! to fire on every iteration, otherwise it would wander off the diagonal
//! and miss its endpoint.

use crate::canvas::Canvas;
use crate::math::vec2::Point;

/// Iterator over the pixels of a line, from the start point to the end
/// point inclusive.
///
/// Yields exactly `max(|dx|, |dy|) + 1` pixels, every consecutive pair
/// 8-connected, with no pixel repeated.
#[derive(Clone, Debug)]
pub struct LinePixels {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    // Deltas and error run in i64: endpoints up to i32::MAX apart, and the
    // doubled error, do not fit in i32.
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LinePixels {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 as i64 - x0 as i64).abs();
        let dy = -(y1 as i64 - y0 as i64).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }

    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let current = Point::new(self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;

        // Never step an axis that has already arrived.
        if e2 >= self.dy && self.x != self.x1 {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx && self.y != self.y1 {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Every step advances the major axis by one.
        let remaining = (self.x1 as i64 - self.x as i64)
            .abs()
            .max((self.y1 as i64 - self.y as i64).abs()) as usize
            + 1;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

/// Plot every pixel of the line from `(x0, y0)` to `(x1, y1)` with the
/// canvas's current color.
///
/// A zero-length line plots exactly one pixel.
pub fn rasterize_line<C: Canvas + ?Sized>(canvas: &mut C, x0: i32, y0: i32, x1: i32, y1: i32) {
    for p in LinePixels::new(x0, y0, x1, y1) {
        canvas.plot_pixel(p.x, p.y);
    }
}

//! The drawing surface the rasterization core writes into.
//!
//! The core never owns pixels. It only selects a color and asks a [`Canvas`]
//! to plot pixels or horizontal spans, which keeps the algorithms testable
//! against a recording canvas and lets the demo target an SDL2 texture.

use crate::colors::Color;

/// A pixel sink with a current drawing color.
///
/// Only [`set_color`](Canvas::set_color) and [`plot_pixel`](Canvas::plot_pixel)
/// are required. The span and rectangle operations default to repeated
/// `plot_pixel` calls; implementors with a faster path can override them.
pub trait Canvas {
    /// Set the color used by subsequent plot, span and rect calls.
    fn set_color(&mut self, color: Color);

    /// Set a single pixel to the current color.
    fn plot_pixel(&mut self, x: i32, y: i32);

    /// Fill the horizontal run between `x0` and `x1` on row `y`, inclusive
    /// of both ends.
    ///
    /// Endpoints may be given in either order.
    fn draw_span(&mut self, x0: i32, x1: i32, y: i32) {
        let (start, end) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in start..=end {
            self.plot_pixel(x, y);
        }
    }

    /// Draw the unfilled outline of the `w` x `h` rectangle whose top-left
    /// pixel is `(x, y)`. Does nothing when either dimension is not positive.
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;
        self.draw_span(x, right, y);
        self.draw_span(x, right, bottom);
        for row in y + 1..bottom {
            self.plot_pixel(x, row);
            self.plot_pixel(right, row);
        }
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn set_color(&mut self, color: Color) {
        (**self).set_color(color);
    }

    fn plot_pixel(&mut self, x: i32, y: i32) {
        (**self).plot_pixel(x, y);
    }

    fn draw_span(&mut self, x0: i32, x1: i32, y: i32) {
        (**self).draw_span(x0, x1, y);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        (**self).draw_rect(x, y, w, h);
    }
}

//! Polygon outlines and open polylines.

use super::line::rasterize_line;
use crate::canvas::Canvas;
use crate::math::vec2::Point;

/// Draw the closed boundary of `vertices` with the canvas's current color.
///
/// Edges are drawn in vertex order, the last one wrapping back to the first
/// vertex. Each shared corner is plotted once per adjacent edge. Fewer than
/// three vertices is not a polygon and draws nothing.
pub fn outline<C: Canvas + ?Sized>(canvas: &mut C, vertices: &[Point]) {
    if vertices.len() < 3 {
        return;
    }

    for (i, p1) in vertices.iter().enumerate() {
        let p2 = vertices[(i + 1) % vertices.len()];
        rasterize_line(canvas, p1.x, p1.y, p2.x, p2.y);
    }
}

/// Draw consecutive segments through `points` without closing the path.
///
/// A single point plots one pixel; an empty slice draws nothing.
pub fn polyline<C: Canvas + ?Sized>(canvas: &mut C, points: &[Point]) {
    match points {
        [] => {}
        [p] => canvas.plot_pixel(p.x, p.y),
        _ => {
            for pair in points.windows(2) {
                rasterize_line(canvas, pair[0].x, pair[0].y, pair[1].x, pair[1].y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{self, Color};
    use std::collections::HashSet;

    #[derive(Default)]
    struct PlotLog {
        plots: Vec<(i32, i32)>,
    }

    impl Canvas for PlotLog {
        fn set_color(&mut self, _color: Color) {}

        fn plot_pixel(&mut self, x: i32, y: i32) {
            self.plots.push((x, y));
        }
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut log = PlotLog::default();
        outline(&mut log, &[]);
        outline(&mut log, &[Point::new(0, 0), Point::new(5, 5)]);
        assert!(log.plots.is_empty());
    }

    #[test]
    fn square_outline_closes_and_repeats_corners() {
        let square = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];
        let mut log = PlotLog::default();
        outline(&mut log, &square);

        // Four edges of four pixels each; every corner is plotted twice.
        assert_eq!(log.plots.len(), 16);
        let unique: HashSet<_> = log.plots.iter().copied().collect();
        assert_eq!(unique.len(), 12);
        assert_eq!(log.plots.first(), Some(&(0, 0)));
        assert_eq!(log.plots.last(), Some(&(0, 0)));
    }

    #[test]
    fn edges_follow_vertex_order() {
        let tri = [Point::new(0, 0), Point::new(2, 0), Point::new(0, 2)];
        let mut log = PlotLog::default();
        outline(&mut log, &tri);
        assert_eq!(
            log.plots,
            vec![
                (0, 0), (1, 0), (2, 0),
                (2, 0), (1, 1), (0, 2),
                (0, 2), (0, 1), (0, 0),
            ]
        );
    }

    #[test]
    fn outline_is_idempotent_on_a_frame_buffer() {
        let tri = [Point::new(320, 50), Point::new(120, 250), Point::new(520, 250)];
        let mut once = crate::render::FrameBuffer::new(640, 480);
        let mut twice = crate::render::FrameBuffer::new(640, 480);
        once.set_color(colors::TRIANGLE);
        twice.set_color(colors::TRIANGLE);
        outline(&mut once, &tri);
        outline(&mut twice, &tri);
        outline(&mut twice, &tri);
        assert_eq!(once.as_bytes(), twice.as_bytes());
    }

    #[test]
    fn polyline_does_not_close() {
        let path = [Point::new(0, 0), Point::new(2, 0), Point::new(2, 2)];
        let mut log = PlotLog::default();
        polyline(&mut log, &path);
        assert_eq!(
            log.plots,
            vec![(0, 0), (1, 0), (2, 0), (2, 0), (2, 1), (2, 2)]
        );
        assert!(!log.plots.contains(&(1, 1)));
    }

    #[test]
    fn polyline_short_inputs() {
        let mut log = PlotLog::default();
        polyline(&mut log, &[]);
        assert!(log.plots.is_empty());
        polyline(&mut log, &[Point::new(4, 5)]);
        assert_eq!(log.plots, vec![(4, 5)]);
    }
}

//! Rectangles and circles defined by two drag corners.
//!
//! Corners may arrive in any order; both are normalized so the shape covers
//! the box spanned by the two points, corners included.

use crate::canvas::Canvas;
use crate::math::vec2::Point;

/// Normalize two corners into `(x, y, w, h)` for [`Canvas::draw_rect`].
///
/// The result covers both corner pixels, so identical corners give a 1x1
/// rectangle.
pub fn rect_from_corners(a: Point, b: Point) -> (i32, i32, i32, i32) {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let w = (a.x - b.x).abs() + 1;
    let h = (a.y - b.y).abs() + 1;
    (x, y, w, h)
}

/// Outline the rectangle spanned by two corners.
pub fn outline_rect<C: Canvas + ?Sized>(canvas: &mut C, a: Point, b: Point) {
    let (x, y, w, h) = rect_from_corners(a, b);
    canvas.draw_rect(x, y, w, h);
}

/// Midpoint circle outline around `(cx, cy)`. A radius of 0 plots the
/// center; a negative radius draws nothing.
pub fn circle<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, radius: i32) {
    if radius < 0 {
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 0;

    while x >= y {
        canvas.plot_pixel(cx + x, cy + y);
        canvas.plot_pixel(cx + y, cy + x);
        canvas.plot_pixel(cx - y, cy + x);
        canvas.plot_pixel(cx - x, cy + y);
        canvas.plot_pixel(cx - x, cy - y);
        canvas.plot_pixel(cx - y, cy - x);
        canvas.plot_pixel(cx + y, cy - x);
        canvas.plot_pixel(cx + x, cy - y);

        y += 1;
        err += 1 + 2 * y;
        if 2 * (err - x) + 1 > 0 {
            x -= 1;
            err += 1 - 2 * x;
        }
    }
}

/// Circle fitted to the drag box from `a` to `b`.
///
/// The diameter is the box's horizontal extent and the circle sits in the
/// box's top-left corner, so dragging taller than wide does not stretch it.
/// The center snaps to whole pixels, which shrinks odd diameters by one.
pub fn circle_in_box<C: Canvas + ?Sized>(canvas: &mut C, a: Point, b: Point) {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let radius = (a.x - b.x).abs() / 2;
    circle(canvas, x + radius, y + radius, radius);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Pixels(HashSet<(i32, i32)>);

    impl Canvas for Pixels {
        fn set_color(&mut self, _color: Color) {}

        fn plot_pixel(&mut self, x: i32, y: i32) {
            self.0.insert((x, y));
        }
    }

    #[test]
    fn corners_in_any_order_give_same_rect() {
        let expected = (10, 20, 6, 4);
        assert_eq!(rect_from_corners(Point::new(10, 20), Point::new(15, 23)), expected);
        assert_eq!(rect_from_corners(Point::new(15, 23), Point::new(10, 20)), expected);
        assert_eq!(rect_from_corners(Point::new(10, 23), Point::new(15, 20)), expected);
        assert_eq!(rect_from_corners(Point::new(7, 7), Point::new(7, 7)), (7, 7, 1, 1));
    }

    #[test]
    fn outline_rect_touches_both_corners() {
        let mut c = Pixels::default();
        outline_rect(&mut c, Point::new(15, 23), Point::new(10, 20));
        assert!(c.0.contains(&(15, 23)));
        assert!(c.0.contains(&(10, 20)));
        assert!(!c.0.contains(&(12, 21)));
        assert_eq!(c.0.len(), 2 * 6 + 2 * 2);
    }

    #[test]
    fn circle_points_lie_near_radius() {
        let mut c = Pixels::default();
        circle(&mut c, 50, 50, 10);
        for &(x, y) in &c.0 {
            let d = (((x - 50).pow(2) + (y - 50).pow(2)) as f64).sqrt();
            assert!((d - 10.0).abs() < 1.0, "({x}, {y}) at {d}");
        }
        for p in [(60, 50), (40, 50), (50, 60), (50, 40)] {
            assert!(c.0.contains(&p));
        }
    }

    #[test]
    fn degenerate_circles() {
        let mut c = Pixels::default();
        circle(&mut c, 3, 4, 0);
        assert_eq!(c.0, HashSet::from([(3, 4)]));
        circle(&mut c, 3, 4, -2);
        assert_eq!(c.0.len(), 1);
    }

    #[test]
    fn circle_in_box_uses_width_as_diameter() {
        let mut c = Pixels::default();
        circle_in_box(&mut c, Point::new(40, 90), Point::new(20, 10));
        // Box x 20..40, top at y = 10: radius 10 centered at (30, 20).
        assert!(c.0.contains(&(20, 20)));
        assert!(c.0.contains(&(40, 20)));
        assert!(c.0.contains(&(30, 10)));
        assert!(c.0.contains(&(30, 30)));
    }
}

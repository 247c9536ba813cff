//! A redrawable list of user-drawn shapes.
//!
//! Each shape starts at a press point and grows as further points arrive
//! from a drag. The whole list is redrawn from scratch every frame, and
//! clearing it empties the drawing. Input handling stays with the caller.

use crate::canvas::Canvas;
use crate::colors::Color;
use crate::math::vec2::Point;
use crate::raster::polygon::polyline;
use crate::raster::rasterize_line;
use crate::raster::shape::{circle_in_box, outline_rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Freehand,
    Line,
    Rect,
    Circle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Every drag point, joined in order.
    Freehand { color: Color, points: Vec<Point> },
    /// Press point to the latest drag point; nothing until dragged.
    Line {
        color: Color,
        start: Point,
        end: Option<Point>,
    },
    Rect { color: Color, start: Point, end: Point },
    Circle { color: Color, start: Point, end: Point },
}

impl Shape {
    pub fn begin(kind: ShapeKind, color: Color, start: Point) -> Self {
        match kind {
            ShapeKind::Freehand => Shape::Freehand {
                color,
                points: vec![start],
            },
            ShapeKind::Line => Shape::Line {
                color,
                start,
                end: None,
            },
            ShapeKind::Rect => Shape::Rect {
                color,
                start,
                end: start,
            },
            ShapeKind::Circle => Shape::Circle {
                color,
                start,
                end: start,
            },
        }
    }

    /// Feed the next drag point.
    pub fn extend(&mut self, point: Point) {
        match self {
            Shape::Freehand { points, .. } => points.push(point),
            Shape::Line { end, .. } => *end = Some(point),
            Shape::Rect { end, .. } | Shape::Circle { end, .. } => *end = point,
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match self {
            Shape::Freehand { color, points } => {
                if points.len() >= 2 {
                    canvas.set_color(*color);
                    polyline(canvas, points);
                }
            }
            Shape::Line { color, start, end } => {
                if let Some(end) = end {
                    canvas.set_color(*color);
                    rasterize_line(canvas, start.x, start.y, end.x, end.y);
                }
            }
            Shape::Rect { color, start, end } => {
                canvas.set_color(*color);
                outline_rect(canvas, *start, *end);
            }
            Shape::Circle { color, start, end } => {
                canvas.set_color(*color);
                circle_in_box(canvas, *start, *end);
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sketch {
    shapes: Vec<Shape>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new shape at `point`.
    pub fn press(&mut self, kind: ShapeKind, color: Color, point: Point) {
        self.shapes.push(Shape::begin(kind, color, point));
    }

    /// Extend the most recent shape. Ignored while the sketch is empty.
    pub fn drag(&mut self, point: Point) {
        if let Some(shape) = self.shapes.last_mut() {
            shape.extend(point);
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Draw every shape in insertion order.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for shape in &self.shapes {
            shape.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::render::FrameBuffer;

    const INK: Color = Color::rgb(63, 81, 181);

    #[test]
    fn freehand_collects_every_drag_point() {
        let mut sketch = Sketch::new();
        sketch.press(ShapeKind::Freehand, INK, Point::new(1, 1));
        sketch.drag(Point::new(4, 1));
        sketch.drag(Point::new(4, 3));

        let mut frame = FrameBuffer::new(8, 8);
        sketch.draw(&mut frame);
        assert_eq!(frame.count(INK), 4 + 2);
        assert_eq!(frame.get_pixel(1, 3), Some(colors::BACKGROUND));
    }

    #[test]
    fn undragged_freehand_and_line_draw_nothing() {
        let mut sketch = Sketch::new();
        sketch.press(ShapeKind::Freehand, INK, Point::new(2, 2));
        sketch.press(ShapeKind::Line, INK, Point::new(5, 5));

        let mut frame = FrameBuffer::new(8, 8);
        sketch.draw(&mut frame);
        assert_eq!(frame.count(INK), 0);
    }

    #[test]
    fn line_keeps_only_latest_end() {
        let mut shape = Shape::begin(ShapeKind::Line, INK, Point::new(0, 0));
        shape.extend(Point::new(5, 5));
        shape.extend(Point::new(3, 0));
        assert_eq!(
            shape,
            Shape::Line {
                color: INK,
                start: Point::new(0, 0),
                end: Some(Point::new(3, 0)),
            }
        );

        let mut frame = FrameBuffer::new(8, 8);
        shape.draw(&mut frame);
        assert_eq!(frame.count(INK), 4);
        assert_eq!(frame.get_pixel(1, 1), Some(colors::BACKGROUND));
    }

    #[test]
    fn rect_dragged_up_and_left_is_normalized() {
        let mut sketch = Sketch::new();
        sketch.press(ShapeKind::Rect, INK, Point::new(6, 5));
        sketch.drag(Point::new(2, 1));

        let mut frame = FrameBuffer::new(10, 10);
        sketch.draw(&mut frame);
        assert_eq!(frame.get_pixel(2, 1), Some(INK));
        assert_eq!(frame.get_pixel(6, 5), Some(INK));
        assert_eq!(frame.get_pixel(4, 3), Some(colors::BACKGROUND));
    }

    #[test]
    fn circle_follows_drag_box() {
        let mut sketch = Sketch::new();
        sketch.press(ShapeKind::Circle, INK, Point::new(20, 10));
        sketch.drag(Point::new(40, 30));

        let mut frame = FrameBuffer::new(64, 64);
        sketch.draw(&mut frame);
        assert_eq!(frame.get_pixel(20, 20), Some(INK));
        assert_eq!(frame.get_pixel(30, 20), Some(colors::BACKGROUND));
    }

    #[test]
    fn drag_without_press_is_ignored_and_clear_empties() {
        let mut sketch = Sketch::new();
        sketch.drag(Point::new(1, 1));
        assert!(sketch.is_empty());

        sketch.press(ShapeKind::Rect, INK, Point::new(0, 0));
        sketch.press(ShapeKind::Circle, INK, Point::new(0, 0));
        assert_eq!(sketch.shapes().len(), 2);
        sketch.clear();
        assert!(sketch.is_empty());
    }
}

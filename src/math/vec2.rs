/// An integer pixel coordinate. Polygon vertices and rasterizer output use this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A floating-point 2D coordinate. Clip geometry lives in this domain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snap to the nearest pixel, ties to even.
    ///
    /// This is the only place clip output crosses into integer coordinates,
    /// so a coordinate of exactly `100.5` becomes `100` and `101.5` becomes `102`.
    #[inline]
    pub fn round_to_pixel(self) -> Point {
        Point::new(round_coord(self.x), round_coord(self.y))
    }
}

/// Round a single coordinate to the nearest integer, ties to even.
#[inline]
pub fn round_coord(v: f64) -> i32 {
    v.round_ties_even() as i32
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_ties_to_even() {
        assert_eq!(round_coord(100.5), 100);
        assert_eq!(round_coord(101.5), 102);
        assert_eq!(round_coord(-0.5), 0);
        assert_eq!(round_coord(-1.5), -2);
        assert_eq!(round_coord(2.4999), 2);
        assert_eq!(round_coord(2.5001), 3);
    }

    #[test]
    fn round_to_pixel_rounds_both_axes() {
        assert_eq!(Vec2::new(99.6, 400.2).round_to_pixel(), Point::new(100, 400));
    }
}

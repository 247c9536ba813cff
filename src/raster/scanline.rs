//! Even-odd scanline polygon filling.
//!
//! Every integer row between the polygon's lowest and highest vertex is
//! intersected with every non-horizontal edge. The crossings are sorted and
//! paired up left to right, and each pair becomes one horizontal span:
//!
//! ```text
//!            /\
//!   y ------x--\------x--/----x------   crossings: x0 x1 x2 x3
//!          /    \    /  \/     \        spans:     [x0, x1] [x2, x3]
//!         /      \  /           \
//!        /________\/_____________\
//! ```
//!
//! # Vertex handling
//!
//! An edge crosses row `y` when exactly one of its endpoints satisfies
//! `p.y <= y`. The test is half-open, so a vertex sitting exactly on the row
//! is counted for one of its two edges only, and horizontal edges never
//! cross at all.
//!
//! That rule can never fire on the bottom-most row, because every vertex
//! satisfies `p.y <= y_max` there. The final row is therefore sampled with
//! the mirrored test (`p.y < y`), which picks up the edges arriving at the
//! bottom vertices and keeps the polygon's last row from vanishing.
//!
//! # Scratch space
//!
//! A row can never have more crossings than the polygon has edges, so a
//! single list of `vertices.len()` entries is reserved once per fill and
//! reused for every row. If that reservation fails the fill is abandoned
//! before anything is drawn.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::math::vec2::{round_coord, Point};

/// One horizontal run of filled pixels, inclusive of both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

/// Which endpoint of an edge counts as touching a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeRule {
    /// `p.y <= y`: used for every row except the last.
    UpperInclusive,
    /// `p.y < y`: used for the bottom row.
    LowerInclusive,
}

impl EdgeRule {
    fn for_row(y: i32, y_max: i32) -> Self {
        if y == y_max {
            EdgeRule::LowerInclusive
        } else {
            EdgeRule::UpperInclusive
        }
    }

    #[inline]
    fn crosses(self, a: i32, b: i32, y: i32) -> bool {
        match self {
            EdgeRule::UpperInclusive => (a <= y && b > y) || (a > y && b <= y),
            EdgeRule::LowerInclusive => (a < y && b >= y) || (a >= y && b < y),
        }
    }
}

/// Fill the interior of `vertices` with the canvas's current color, using
/// the even-odd rule.
///
/// Fewer than three vertices draws nothing. Fails only if the scratch list
/// cannot be allocated, in which case nothing is drawn.
pub fn fill<C: Canvas + ?Sized>(canvas: &mut C, vertices: &[Point]) -> Result<()> {
    for_each_span(vertices, |span| {
        canvas.draw_span(span.x_start, span.x_end, span.y)
    })
}

/// Collect the spans [`fill`] would draw, top row first.
pub fn spans(vertices: &[Point]) -> Result<Vec<Span>> {
    let mut out = Vec::new();
    for_each_span(vertices, |span| out.push(span))?;
    Ok(out)
}

/// Sorted crossing x-coordinates of the polygon's edges on row `y`.
///
/// Rows outside the polygon's vertical extent have no crossings.
pub fn intersections_at(vertices: &[Point], y: i32) -> Vec<f64> {
    let mut out = Vec::with_capacity(vertices.len());
    if let Some((y_min, y_max)) = vertical_extent(vertices) {
        if (y_min..=y_max).contains(&y) {
            collect_intersections(vertices, y, EdgeRule::for_row(y, y_max), &mut out);
        }
    }
    out
}

/// Walk every row of the polygon and hand each span to `emit`.
pub fn for_each_span<F: FnMut(Span)>(vertices: &[Point], mut emit: F) -> Result<()> {
    if vertices.len() < 3 {
        return Ok(());
    }
    let Some((y_min, y_max)) = vertical_extent(vertices) else {
        return Ok(());
    };

    let mut crossings = reserve_scratch(vertices.len())?;

    for y in y_min..=y_max {
        collect_intersections(vertices, y, EdgeRule::for_row(y, y_max), &mut crossings);
        emit_pairs(&crossings, y, &mut emit);
    }

    Ok(())
}

fn vertical_extent(vertices: &[Point]) -> Option<(i32, i32)> {
    let y_min = vertices.iter().map(|p| p.y).min()?;
    let y_max = vertices.iter().map(|p| p.y).max()?;
    Some((y_min, y_max))
}

fn reserve_scratch(len: usize) -> Result<Vec<f64>> {
    let mut scratch = Vec::new();
    if let Err(err) = scratch.try_reserve_exact(len) {
        log::error!("scanline fill aborted: {err}");
        return Err(Error::ScratchAllocation { requested: len });
    }
    Ok(scratch)
}

/// Replace `out` with the sorted crossings of row `y`.
fn collect_intersections(vertices: &[Point], y: i32, rule: EdgeRule, out: &mut Vec<f64>) {
    out.clear();

    for (i, p1) in vertices.iter().enumerate() {
        let p2 = vertices[(i + 1) % vertices.len()];

        // Horizontal edges contribute nothing, and would divide by zero.
        if p1.y == p2.y || !rule.crosses(p1.y, p2.y, y) {
            continue;
        }

        let x = p1.x as f64
            + (y - p1.y) as f64 * (p2.x - p1.x) as f64 / (p2.y - p1.y) as f64;
        out.push(x);
    }

    out.sort_by(f64::total_cmp);
}

/// Pair sorted crossings 0-1, 2-3, ... into spans. A trailing unpaired
/// crossing is dropped.
fn emit_pairs<F: FnMut(Span)>(crossings: &[f64], y: i32, emit: &mut F) {
    for pair in crossings.chunks_exact(2) {
        emit(Span {
            y,
            x_start: round_coord(pair[0]),
            x_end: round_coord(pair[1]),
        });
    }
}

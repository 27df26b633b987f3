//! Triangle and convex polygon rasterization.
//!
//! Triangles use a classic scanline fill. Convex polygons use signed edge functions:
//! a pixel is filled when its center lies on the inner side of every edge, where "inner"
//! follows the polygon's winding (sign of the shoelace area).
//!
//! [`ConvexShape`] also provides the 2x2 sub-pixel coverage estimate shared by all
//! antialiased fills.

use crate::color::Rgba;
use crate::geometry::{signed_area2, Point};
use crate::layer::Layer;
use crate::render::primitives::clamp_bounds;

/// Sub-pixel sample positions for coverage estimation (2x2 grid).
const SAMPLE_OFFSETS: [(f64, f64); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Signed edge function of point `p` relative to the directed edge `a -> b`.
///
/// Positive on the inner side of edges of a ring with positive [`signed_area2`].
#[inline]
pub(crate) fn edge_function(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// A convex vertex ring in continuous pixel space.
#[derive(Debug, Clone)]
pub(crate) struct ConvexShape {
    vertices: Vec<(f64, f64)>,
    winding: f64,
}

impl ConvexShape {
    /// Build a shape; `None` for fewer than three vertices or zero area.
    pub(crate) fn new(vertices: Vec<(f64, f64)>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let area2 = signed_area2(&vertices);
        if area2 == 0.0 || !area2.is_finite() {
            return None;
        }
        Some(Self {
            vertices,
            winding: area2.signum(),
        })
    }

    /// Build a shape from integer pixel coordinates.
    pub(crate) fn from_points(points: &[Point]) -> Option<Self> {
        Self::new(
            points
                .iter()
                .map(|p| (f64::from(p.x), f64::from(p.y)))
                .collect(),
        )
    }

    fn edges(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Whether `p` is inside or on the boundary.
    pub(crate) fn contains(&self, p: (f64, f64)) -> bool {
        self.edges()
            .all(|(a, b)| self.winding * edge_function(a, b, p) >= 0.0)
    }

    /// Fraction of the 2x2 sample grid of pixel `(x, y)` that lies inside.
    pub(crate) fn coverage(&self, x: i32, y: i32) -> f64 {
        let hits = SAMPLE_OFFSETS
            .iter()
            .filter(|(ox, oy)| self.contains((f64::from(x) + ox, f64::from(y) + oy)))
            .count();
        hits as f64 / SAMPLE_OFFSETS.len() as f64
    }

    /// Inclusive pixel bounding box, clamped to the layer.
    pub(crate) fn pixel_bounds(&self, layer: &Layer) -> Option<(i32, i32, i32, i32)> {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &self.vertices {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        clamp_bounds(
            layer,
            min_x.floor() as i64,
            min_y.floor() as i64,
            max_x.floor() as i64,
            max_y.floor() as i64,
        )
    }

    /// Blend `color` over every pixel, scaled by its sampled coverage.
    pub(crate) fn fill_coverage(&self, layer: &mut Layer, color: Rgba) {
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(layer) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let coverage = self.coverage(x, y);
                if coverage > 0.0 {
                    layer.blend_pixel(Point::new(x, y), color.with_coverage(coverage));
                }
            }
        }
    }
}

// ============================================================================
// Triangle Drawing
// ============================================================================

/// Draw a filled triangle by scanline (non-antialiased).
///
/// Vertices are sorted by `y`; each scanline spans the inclusive range between the long
/// edge and whichever short edge is active. A triangle with zero height draws nothing.
pub fn draw_triangle(layer: &mut Layer, p1: Point, p2: Point, p3: Point, color: Rgba) {
    let mut v = [p1, p2, p3];
    v.sort_by_key(|p| p.y);
    let [(x1, y1), (x2, y2), (x3, y3)] = v.map(|p| (i64::from(p.x), i64::from(p.y)));

    let total_height = y3 - y1;
    if total_height == 0 {
        return;
    }

    let y_start = y1.max(0);
    let y_end = y3.min(i64::from(layer.height()) - 1);
    let max_x = i64::from(layer.width()) - 1;

    for y in y_start..=y_end {
        let second_half = y > y2 || y2 == y1;
        let segment_height = (if second_half { y3 - y2 } else { y2 - y1 }).max(1);

        let alpha = (y - y1) as f64 / total_height as f64;
        let beta = if second_half {
            (y - y2) as f64 / segment_height as f64
        } else {
            (y - y1) as f64 / segment_height as f64
        };

        let mut ax = (x1 as f64 + (x3 - x1) as f64 * alpha) as i64;
        let mut bx = if second_half {
            (x2 as f64 + (x3 - x2) as f64 * beta) as i64
        } else {
            (x1 as f64 + (x2 - x1) as f64 * beta) as i64
        };
        if ax > bx {
            std::mem::swap(&mut ax, &mut bx);
        }

        let (x_start, x_end) = (ax.max(0), bx.min(max_x));
        if x_start > x_end {
            continue;
        }
        if let Some(row) = layer.row_mut(y as u32) {
            row[x_start as usize..=x_end as usize].fill(color);
        }
    }
}

// ============================================================================
// Convex Polygon Drawing
// ============================================================================

/// Draw a filled convex polygon (non-antialiased).
///
/// A pixel is filled when its center `(x + 0.5, y + 0.5)` lies inside or on every edge.
/// Polygons with fewer than three vertices, or with zero area, draw nothing.
pub fn draw_polygon(layer: &mut Layer, points: &[Point], color: Rgba) {
    let Some(shape) = ConvexShape::from_points(points) else {
        return;
    };
    let Some((x0, y0, x1, y1)) = shape.pixel_bounds(layer) else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            if shape.contains((f64::from(x) + 0.5, f64::from(y) + 0.5)) {
                layer.set_pixel(Point::new(x, y), color);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

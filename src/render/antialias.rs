//! Antialiased primitive rendering.
//!
//! Every function here estimates a per-pixel coverage in `[0, 1]`, scales the drawing
//! color's alpha by it and blends with [`Rgba::blend`]. Nothing is overwritten, so
//! overlapping soft edges accumulate.
//!
//! # Algorithms
//!
//! - **Wu's Line**: two weighted pixels per step along the major axis
//! - **Distance coverage**: `clamp01(radius - distance + 0.5)` for circles
//! - **2x2 sub-pixel sampling**: rectangles, triangles, polygons and thick lines
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use crate::color::{clamp01, Rgba};
use crate::geometry::{Point, Size};
use crate::layer::Layer;
use crate::render::polygon::ConvexShape;
use crate::render::primitives::clamp_bounds;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw an anti-aliased line.
///
/// With `thickness <= 1` this is Xiaolin Wu's algorithm. Thicker lines are rasterized
/// as a quad through the pixel centers of both end points, offset by `thickness / 2`
/// on either side. A zero-length line becomes an antialiased disc of radius
/// `thickness / 2`.
///
/// # Algorithm
///
/// Wu's algorithm draws two pixels at each step along the major axis,
/// adjusting their intensities based on the fractional distance from
/// the ideal line position. End pixels are weighted by their horizontal gap.
pub fn draw_line_aa(layer: &mut Layer, p1: Point, p2: Point, thickness: u32, color: Rgba) {
    let half = f64::from(thickness.max(1)) / 2.0;

    if p1 == p2 {
        fill_disc_aa(
            layer,
            f64::from(p1.x),
            f64::from(p1.y),
            half,
            color,
        );
        return;
    }

    if thickness <= 1 {
        wu_line(layer, p1, p2, color);
    } else {
        thick_line_aa(layer, p1, p2, half, color);
    }
}

/// Xiaolin Wu's line between integer end points.
///
/// The main loop only visits columns of the major axis that lie on the layer.
fn wu_line(layer: &mut Layer, p1: Point, p2: Point, color: Rgba) {
    let (x0, y0, x1, y1) = (
        f64::from(p1.x),
        f64::from(p1.y),
        f64::from(p2.x),
        f64::from(p2.y),
    );
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let plot = |layer: &mut Layer, x: i64, y: i64, intensity: f64| {
        let (px, py) = if steep { (y, x) } else { (x, y) };
        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
            layer.blend_pixel(Point::new(px, py), color.with_coverage(intensity));
        }
    };

    // Handle first endpoint
    let xend = x0.round();
    let yend1 = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i64;
    let ypxl1 = yend1.floor() as i64;
    plot(layer, xpxl1, ypxl1, rfpart(yend1) * xgap);
    plot(layer, xpxl1, ypxl1 + 1, fpart(yend1) * xgap);

    // Handle second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i64;
    let ypxl2 = yend.floor() as i64;
    plot(layer, xpxl2, ypxl2, rfpart(yend) * xgap);
    plot(layer, xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    // Main loop, clipped to the layer along the major axis
    let extent = i64::from(if steep { layer.height() } else { layer.width() });
    let first = (xpxl1 + 1).max(0);
    let last = (xpxl2 - 1).min(extent - 1);
    for x in first..=last {
        let intery = yend1 + gradient * (x - xpxl1) as f64;
        let ipart = intery.floor() as i64;
        plot(layer, x, ipart, rfpart(intery));
        plot(layer, x, ipart + 1, fpart(intery));
    }
}

/// Thick antialiased line as a sampled quad.
fn thick_line_aa(layer: &mut Layer, p1: Point, p2: Point, half: f64, color: Rgba) {
    let (x1, y1) = (f64::from(p1.x) + 0.5, f64::from(p1.y) + 0.5);
    let (x2, y2) = (f64::from(p2.x) + 0.5, f64::from(p2.y) + 0.5);

    let (dx, dy) = (x2 - x1, y2 - y1);
    let len = dx.hypot(dy);
    let nx = -dy / len * half;
    let ny = dx / len * half;

    let quad = vec![
        (x1 + nx, y1 + ny),
        (x2 + nx, y2 + ny),
        (x2 - nx, y2 - ny),
        (x1 - nx, y1 - ny),
    ];
    if let Some(shape) = ConvexShape::new(quad) {
        shape.fill_coverage(layer, color);
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw an anti-aliased rectangle.
///
/// Covers the same cells as [`draw_rect`](super::draw_rect) but blends the color
/// instead of overwriting.
pub fn draw_rect_aa(layer: &mut Layer, pos: Point, size: Size, color: Rgba) {
    let x0 = f64::from(pos.x);
    let y0 = f64::from(pos.y);
    let x1 = x0 + f64::from(size.width);
    let y1 = y0 + f64::from(size.height);

    if let Some(shape) = ConvexShape::new(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]) {
        shape.fill_coverage(layer, color);
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Draw an anti-aliased filled circle.
///
/// Coverage is `clamp01(radius - distance + 0.5)`, producing a soft edge about one
/// pixel wide.
pub fn draw_circle_aa(layer: &mut Layer, center: Point, radius: u32, color: Rgba) {
    fill_disc_aa(
        layer,
        f64::from(center.x),
        f64::from(center.y),
        f64::from(radius),
        color,
    );
}

fn fill_disc_aa(layer: &mut Layer, cx: f64, cy: f64, radius: f64, color: Rgba) {
    let reach = radius.ceil() as i64;
    let (icx, icy) = (cx as i64, cy as i64);
    let Some((x0, y0, x1, y1)) =
        clamp_bounds(layer, icx - reach, icy - reach, icx + reach, icy + reach)
    else {
        return;
    };

    for y in y0..=y1 {
        let dy = f64::from(y) - cy;
        for x in x0..=x1 {
            let dx = f64::from(x) - cx;
            let coverage = clamp01(radius - dx.hypot(dy) + 0.5);
            if coverage > 0.0 {
                layer.blend_pixel(Point::new(x, y), color.with_coverage(coverage));
            }
        }
    }
}

// ============================================================================
// Triangle / Polygon Drawing
// ============================================================================

/// Draw an anti-aliased filled triangle using 2x2 sub-pixel sampling.
///
/// Vertices sit on pixel corners. Degenerate (zero-area) triangles draw nothing.
pub fn draw_triangle_aa(layer: &mut Layer, p1: Point, p2: Point, p3: Point, color: Rgba) {
    draw_polygon_aa(layer, &[p1, p2, p3], color);
}

/// Draw an anti-aliased filled convex polygon using 2x2 sub-pixel sampling.
///
/// The whole polygon is sampled at once, so interior pixels are blended exactly once.
/// Polygons with fewer than three vertices, or with zero area, draw nothing.
pub fn draw_polygon_aa(layer: &mut Layer, points: &[Point], color: Rgba) {
    if let Some(shape) = ConvexShape::from_points(points) {
        shape.fill_coverage(layer, color);
    }
}

// ============================================================================
// Tests
// ============================================================================

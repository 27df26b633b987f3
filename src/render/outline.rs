//! Outline (stroke-only) variants of the filled primitives.

use crate::color::{clamp01, Rgba};
use crate::geometry::{Point, Size};
use crate::layer::Layer;
use crate::render::antialias::draw_line_aa;
use crate::render::primitives::{clamp_bounds, draw_line, fill_cells};

// ============================================================================
// Rectangle Outline
// ============================================================================

/// Draw a rectangle outline with the given border thickness, inside the rectangle.
pub fn draw_rect_outline(layer: &mut Layer, pos: Point, size: Size, thickness: u32, color: Rgba) {
    let t = i64::from(thickness.max(1));
    let (x0, y0) = (i64::from(pos.x), i64::from(pos.y));
    let (w, h) = (i64::from(size.width), i64::from(size.height));
    let (x1, y1) = (x0 + w, y0 + h);

    // Top edge
    fill_cells(layer, x0, y0, x1, y0 + t.min(h), color);
    // Bottom edge
    if h > t {
        fill_cells(layer, x0, y1 - t, x1, y1, color);
    }
    // Left edge
    if h > 2 * t {
        fill_cells(layer, x0, y0 + t, x0 + t.min(w), y1 - t, color);
    }
    // Right edge
    if w > t && h > 2 * t {
        fill_cells(layer, x1 - t, y0 + t, x1, y1 - t, color);
    }
}

// ============================================================================
// Circle Outline
// ============================================================================

/// Draw a one-pixel circle outline using the midpoint algorithm.
///
/// Nothing is stepped when the ring cannot reach the layer: either its bounding box
/// misses the layer, or the whole layer sits inside the ring's hole.
pub fn draw_circle_outline(layer: &mut Layer, center: Point, radius: u32, color: Rgba) {
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let radius = i64::from(radius);
    if radius == 0 {
        layer.set_pixel(center, color);
        return;
    }
    if clamp_bounds(layer, cx - radius, cy - radius, cx + radius, cy + radius).is_none()
        || layer_inside_disc(layer, cx, cy, radius - 1)
    {
        return;
    }

    let mut plot = |px: i64, py: i64| {
        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
            layer.set_pixel(Point::new(px, py), color);
        }
    };

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        // Plot 8 octant points
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            plot(px, py);
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Whether every pixel of the layer lies strictly within distance `inner` of the center.
///
/// Midpoint ring pixels never come closer than `radius - 1`.
fn layer_inside_disc(layer: &Layer, cx: i64, cy: i64, inner: i64) -> bool {
    if inner <= 0 {
        return false;
    }
    let (w, h) = (i64::from(layer.width()) - 1, i64::from(layer.height()) - 1);
    let inner2 = i128::from(inner) * i128::from(inner);
    [(0, 0), (w, 0), (0, h), (w, h)].iter().all(|&(x, y)| {
        let (dx, dy) = (i128::from(x - cx), i128::from(y - cy));
        dx * dx + dy * dy < inner2
    })
}

/// Draw an anti-aliased circle outline.
///
/// Coverage is `clamp01(thickness / 2 + 0.5 - |distance - radius|)`: a ring of the
/// requested thickness centered on the radius with soft edges on both sides.
pub fn draw_circle_outline_aa(
    layer: &mut Layer,
    center: Point,
    radius: u32,
    thickness: u32,
    color: Rgba,
) {
    let half = f64::from(thickness.max(1)) / 2.0;
    let r = f64::from(radius);
    let reach = (r + half + 0.5).ceil() as i64;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));

    let Some((x0, y0, x1, y1)) = clamp_bounds(layer, cx - reach, cy - reach, cx + reach, cy + reach)
    else {
        return;
    };

    for y in y0..=y1 {
        let dy = (i64::from(y) - cy) as f64;
        for x in x0..=x1 {
            let dx = (i64::from(x) - cx) as f64;
            let coverage = clamp01(half + 0.5 - (dx.hypot(dy) - r).abs());
            if coverage > 0.0 {
                layer.blend_pixel(Point::new(x, y), color.with_coverage(coverage));
            }
        }
    }
}

// ============================================================================
// Triangle / Polygon Outline
// ============================================================================

/// Draw a triangle outline with hard-edged lines.
pub fn draw_triangle_outline(
    layer: &mut Layer,
    p1: Point,
    p2: Point,
    p3: Point,
    thickness: u32,
    color: Rgba,
) {
    draw_polygon_outline(layer, &[p1, p2, p3], thickness, color);
}

/// Draw a triangle outline with antialiased lines.
pub fn draw_triangle_outline_aa(
    layer: &mut Layer,
    p1: Point,
    p2: Point,
    p3: Point,
    thickness: u32,
    color: Rgba,
) {
    draw_polygon_outline_aa(layer, &[p1, p2, p3], thickness, color);
}

/// Draw a closed polygon outline with hard-edged lines.
///
/// Fewer than three vertices draw nothing.
pub fn draw_polygon_outline(layer: &mut Layer, points: &[Point], thickness: u32, color: Rgba) {
    for (a, b) in closed_edges(points) {
        draw_line(layer, a, b, thickness, color);
    }
}

/// Draw a closed polygon outline with antialiased lines.
///
/// Fewer than three vertices draw nothing.
pub fn draw_polygon_outline_aa(layer: &mut Layer, points: &[Point], thickness: u32, color: Rgba) {
    for (a, b) in closed_edges(points) {
        draw_line_aa(layer, a, b, thickness, color);
    }
}

fn closed_edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = if points.len() < 3 { 0 } else { points.len() };
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

//! Hard-edge primitive rendering.
//!
//! These functions overwrite pixels with the drawing color; nothing is blended.

use crate::color::Rgba;
use crate::geometry::{Point, Size};
use crate::layer::Layer;

/// Inclusive pixel bounds of a box, clamped to the layer. `None` if nothing is visible.
pub(crate) fn clamp_bounds(
    layer: &Layer,
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> Option<(i32, i32, i32, i32)> {
    let x0 = min_x.max(0);
    let y0 = min_y.max(0);
    let x1 = max_x.min(i64::from(layer.width()) - 1);
    let y1 = max_y.min(i64::from(layer.height()) - 1);

    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0 as i32, y0 as i32, x1 as i32, y1 as i32))
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle covering `[pos.x, pos.x + size.width)` by
/// `[pos.y, pos.y + size.height)`.
///
/// The rectangle is clamped to the layer before filling.
pub fn draw_rect(layer: &mut Layer, pos: Point, size: Size, color: Rgba) {
    let x = i64::from(pos.x);
    let y = i64::from(pos.y);
    fill_cells(layer, x, y, x + i64::from(size.width), y + i64::from(size.height), color);
}

/// Overwrite the cells `[x0, x1) x [y0, y1)`, clamped to the layer.
pub(crate) fn fill_cells(layer: &mut Layer, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba) {
    let width = i64::from(layer.width());
    let height = i64::from(layer.height());

    let x_start = x0.clamp(0, width) as usize;
    let y_start = y0.clamp(0, height) as u32;
    let x_end = x1.clamp(0, width) as usize;
    let y_end = y1.clamp(0, height) as u32;

    if x_start >= x_end {
        return;
    }

    for y in y_start..y_end {
        if let Some(row) = layer.row_mut(y) {
            row[x_start..x_end].fill(color);
        }
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// For `thickness > 1` every stepped pixel is widened to a square of radius
/// `thickness / 2`. A zero-length line draws a single pixel (or square).
///
/// Only the steps whose major-axis coordinate can reach the layer are visited, so the
/// cost is bounded by the layer size rather than the line length.
///
/// # Arguments
///
/// * `layer` - Target layer
/// * `p1`, `p2` - End points (both inclusive)
/// * `thickness` - Stroke width in pixels
/// * `color` - Line color
pub fn draw_line(layer: &mut Layer, p1: Point, p2: Point, thickness: u32, color: Rgba) {
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let half = i64::from(thickness / 2);

    // Walk along the major axis; the minor axis follows from the step index.
    let x_major = dx >= dy;
    let (major, minor, s_major, s_minor, d_major, d_minor, extent) = if x_major {
        (x1, y1, sx, sy, dx, dy, i64::from(layer.width()))
    } else {
        (y1, x1, sy, sx, dy, dx, i64::from(layer.height()))
    };

    let Some((k_start, k_end)) = visible_steps(major, s_major, d_major, extent, half) else {
        return;
    };

    for k in k_start..=k_end {
        let a = major + s_major * k;
        let b = minor + s_minor * minor_steps(k, d_major, d_minor);
        let (x, y) = if x_major { (a, b) } else { (b, a) };

        if thickness <= 1 {
            if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                layer.set_pixel(Point::new(x, y), color);
            }
        } else {
            fill_cells(layer, x - half, y - half, x + half + 1, y + half + 1, color);
        }
    }
}

/// Minor-axis steps Bresenham has taken after `k` major-axis steps.
///
/// The error term `d_major * (1 + minor) - d_minor * (1 + k)` depends only on the
/// position, so the count is the number of `m >= 0` with
/// `2 * d_major * m + d_major < 2 * d_minor * k`.
fn minor_steps(k: i64, d_major: i64, d_minor: i64) -> i64 {
    let num = 2 * i128::from(d_minor) * i128::from(k) - i128::from(d_major);
    if num <= 0 {
        return 0;
    }
    let den = 2 * i128::from(d_major);
    ((num + den - 1) / den) as i64
}

/// Range of step indices in `0..=d_major` whose stamp can touch `[0, extent)` on the
/// major axis.
fn visible_steps(
    start: i64,
    step: i64,
    d_major: i64,
    extent: i64,
    half: i64,
) -> Option<(i64, i64)> {
    let lo = -half - start;
    let hi = extent - 1 + half - start;
    let (k_lo, k_hi) = if step > 0 { (lo, hi) } else { (-hi, -lo) };

    let k_start = k_lo.max(0);
    let k_end = k_hi.min(d_major);
    (k_start <= k_end).then_some((k_start, k_end))
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Draw a filled circle: every pixel whose squared distance to `center` is at most
/// `radius²`.
///
/// # Arguments
///
/// * `layer` - Target layer
/// * `center` - Center coordinates
/// * `radius` - Circle radius in pixels (0 draws the center pixel only)
/// * `color` - Fill color
pub fn draw_circle(layer: &mut Layer, center: Point, radius: u32, color: Rgba) {
    let r = i64::from(radius);
    let cx = i64::from(center.x);
    let cy = i64::from(center.y);

    let Some((x0, y0, x1, y1)) = clamp_bounds(layer, cx - r, cy - r, cx + r, cy + r) else {
        return;
    };

    let r2 = r * r;
    for y in y0..=y1 {
        let dy = i64::from(y) - cy;
        for x in x0..=x1 {
            let dx = i64::from(x) - cx;
            if dx * dx + dy * dy <= r2 {
                layer.set_pixel(Point::new(x, y), color);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Layer compositing.
//!
//! [`composite`] places a source layer onto a destination layer at an offset, blending
//! each source pixel over the destination pixel beneath it. Source pixels that land
//! outside the destination are skipped.
//!
//! The blend function is pluggable through [`BlendMode`]. Any
//! `Fn(Rgba, Rgba) -> Rgba` closure taking `(dst, src)` is a blend mode.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::layer::Layer;

/// Combines a destination pixel with a source pixel.
pub trait BlendMode {
    /// Blend `src` onto `dst`, returning the new destination value.
    fn blend(&self, dst: Rgba, src: Rgba) -> Rgba;
}

impl<F> BlendMode for F
where
    F: Fn(Rgba, Rgba) -> Rgba,
{
    #[inline]
    fn blend(&self, dst: Rgba, src: Rgba) -> Rgba {
        self(dst, src)
    }
}

/// Straight-alpha "over" operator ([`Rgba::blend`]). The default blend mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphaOver;

impl BlendMode for AlphaOver {
    #[inline]
    fn blend(&self, dst: Rgba, src: Rgba) -> Rgba {
        dst.blend(src)
    }
}

/// Copies source pixels verbatim, ignoring the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Replace;

impl BlendMode for Replace {
    #[inline]
    fn blend(&self, _dst: Rgba, src: Rgba) -> Rgba {
        src
    }
}

/// Composite `src` onto `dst` with its top-left corner at `pos`, using [`AlphaOver`].
///
/// # Example
///
/// ```
/// use layer_raster::color::Rgba;
/// use layer_raster::composite::composite;
/// use layer_raster::geometry::Point;
/// use layer_raster::layer::Layer;
///
/// let mut dst = Layer::new(4, 4).unwrap();
/// let mut src = Layer::new(2, 2).unwrap();
/// src.fill(Rgba::RED);
///
/// composite(&mut dst, &src, Point::new(3, 3));
/// assert_eq!(dst.get_pixel(Point::new(3, 3)), Rgba::RED);
/// assert_eq!(dst.get_pixel(Point::new(2, 2)), Rgba::TRANSPARENT);
/// ```
pub fn composite(dst: &mut Layer, src: &Layer, pos: Point) {
    composite_with(dst, src, pos, &AlphaOver);
}

/// Composite `src` onto `dst` with its top-left corner at `pos`, using `mode`.
///
/// Source pixels are visited in row-major order; those mapping outside `dst` are
/// skipped.
pub fn composite_with<B: BlendMode + ?Sized>(dst: &mut Layer, src: &Layer, pos: Point, mode: &B) {
    let dst_w = i64::from(dst.width());
    let dst_h = i64::from(dst.height());

    // Visible source range, in source coordinates
    let sx0 = (-i64::from(pos.x)).clamp(0, i64::from(src.width()));
    let sx1 = (dst_w - i64::from(pos.x)).clamp(0, i64::from(src.width()));
    let sy0 = (-i64::from(pos.y)).clamp(0, i64::from(src.height()));
    let sy1 = (dst_h - i64::from(pos.y)).clamp(0, i64::from(src.height()));
    if sx0 >= sx1 || sy0 >= sy1 {
        return;
    }

    let (sx0, sx1) = (sx0 as usize, sx1 as usize);
    let dx0 = (i64::from(pos.x) + sx0 as i64) as usize;

    for sy in sy0..sy1 {
        let dy = (i64::from(pos.y) + sy) as u32;
        let (Some(src_row), Some(dst_row)) = (src.row(sy as u32), dst.row_mut(dy)) else {
            continue;
        };
        let dst_span = &mut dst_row[dx0..dx0 + (sx1 - sx0)];
        for (d, s) in dst_span.iter_mut().zip(&src_row[sx0..sx1]) {
            *d = mode.blend(*d, *s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solid(width: u32, height: u32, color: Rgba) -> Layer {
        let mut layer = Layer::new(width, height).expect("layer creation should succeed");
        layer.fill(color);
        layer
    }

    #[test]
    fn test_opaque_same_size_copies_source() {
        let mut dst = solid(6, 4, Rgba::BLUE);
        let mut src = Layer::new(6, 4).expect("layer creation should succeed");
        for y in 0..4 {
            for x in 0..6 {
                let c = Rgba::new(f64::from(x) / 5.0, f64::from(y) / 3.0, 0.5, 1.0);
                src.set_pixel(Point::new(x, y), c);
            }
        }

        composite(&mut dst, &src, Point::ORIGIN);

        assert_eq!(dst, src);
    }

    #[test]
    fn test_transparent_source_is_noop() {
        let mut dst = solid(5, 5, Rgba::GREEN);
        let src = Layer::new(5, 5).expect("layer creation should succeed");
        let before = dst.clone();

        composite(&mut dst, &src, Point::ORIGIN);

        assert_eq!(dst, before);
    }

    #[test]
    fn test_offset_clips_to_destination() {
        let mut dst = Layer::new(4, 4).expect("layer creation should succeed");
        let src = solid(3, 3, Rgba::RED);

        composite(&mut dst, &src, Point::new(2, -1));

        let filled: Vec<Point> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Point::new(x, y)))
            .filter(|&p| dst.get_pixel(p).a > 0.0)
            .collect();
        assert_eq!(
            filled,
            vec![
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(2, 1),
                Point::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_fully_outside_is_noop() {
        let mut dst = solid(4, 4, Rgba::WHITE);
        let src = solid(2, 2, Rgba::BLACK);
        let before = dst.clone();

        composite(&mut dst, &src, Point::new(4, 0));
        composite(&mut dst, &src, Point::new(-2, -2));
        composite(&mut dst, &src, Point::new(0, 100));

        assert_eq!(dst, before);
    }

    #[test]
    fn test_semi_transparent_blends() {
        let mut dst = solid(2, 2, Rgba::BLUE);
        let src = solid(1, 1, Rgba::RED.with_alpha(0.5));

        composite(&mut dst, &src, Point::new(1, 1));

        let px = dst.get_pixel(Point::new(1, 1));
        assert_relative_eq!(px.r, 0.5);
        assert_relative_eq!(px.b, 0.5);
        assert_relative_eq!(px.a, 1.0);
        assert_eq!(dst.get_pixel(Point::new(0, 0)), Rgba::BLUE);
    }

    #[test]
    fn test_replace_mode_copies_alpha() {
        let mut dst = solid(3, 3, Rgba::WHITE);
        let src = Layer::new(2, 2).expect("layer creation should succeed");

        composite_with(&mut dst, &src, Point::new(1, 1), &Replace);

        assert_eq!(dst.get_pixel(Point::new(2, 2)), Rgba::TRANSPARENT);
        assert_eq!(dst.get_pixel(Point::new(0, 0)), Rgba::WHITE);
    }

    #[test]
    fn test_closure_blend_mode() {
        let mut dst = solid(2, 1, Rgba::new(0.2, 0.2, 0.2, 1.0));
        let src = solid(2, 1, Rgba::new(0.3, 0.1, 0.5, 1.0));

        let additive = |d: Rgba, s: Rgba| Rgba::new(d.r + s.r, d.g + s.g, d.b + s.b, 1.0);
        composite_with(&mut dst, &src, Point::ORIGIN, &additive);

        let px = dst.get_pixel(Point::new(1, 0));
        assert_relative_eq!(px.r, 0.5, epsilon = 1e-12);
        assert_relative_eq!(px.g, 0.3, epsilon = 1e-12);
        assert_relative_eq!(px.b, 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_dyn_blend_mode() {
        let mut dst = solid(1, 1, Rgba::WHITE);
        let src = solid(1, 1, Rgba::BLACK.with_alpha(0.0));
        let mode: &dyn BlendMode = &Replace;

        composite_with(&mut dst, &src, Point::ORIGIN, mode);

        assert_eq!(dst.get_pixel(Point::ORIGIN).a, 0.0);
    }
}

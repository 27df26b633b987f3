//! Geometric transforms on layers.
//!
//! Each transform has a copy-returning `*_to` form that leaves the source untouched
//! and a destructive form that replaces the layer's contents. Destructive forms build
//! the new buffer first and swap it in only on success, so an error leaves the layer
//! as it was. Flips never change the size and run in place.
//!
//! All sampling goes through [`Layer::get_pixel`], so reads outside the source are
//! transparent black.

use tracing::trace;

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::layer::Layer;

/// Sample a pixel with wide coordinates; anything outside `i32` is transparent.
#[inline]
fn sample(layer: &Layer, x: i64, y: i64) -> Rgba {
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => layer.get_pixel(Point::new(x, y)),
        _ => Rgba::TRANSPARENT,
    }
}

/// Build a layer of `size` by evaluating `f(x, y)` for every output pixel.
fn build<F>(size: Size, mut f: F) -> Result<Layer>
where
    F: FnMut(u32, u32) -> Rgba,
{
    let mut out = Layer::with_size(size)?;
    let width = size.width as usize;
    for (y, row) in out.pixels_mut().chunks_exact_mut(width).enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = f(x as u32, y as u32);
        }
    }
    Ok(out)
}

/// Per-axis bilinear mapping `dst -> src = dst * scale + offset`.
///
/// Corner pixels map onto corner pixels. A one-pixel target samples the source center.
fn bilinear_axis(src: u32, dst: u32) -> (f64, f64) {
    let src_last = f64::from(src.saturating_sub(1));
    if dst <= 1 {
        (0.0, src_last / 2.0)
    } else {
        (src_last / f64::from(dst - 1), 0.0)
    }
}

/// Weighted average of four neighbours, interpolating along x first.
fn bilinear_mix(tl: Rgba, tr: Rgba, bl: Rgba, br: Rgba, fx: f64, fy: f64) -> Rgba {
    let mix = |a: f64, b: f64, c: f64, d: f64| {
        let top = a * (1.0 - fx) + b * fx;
        let bottom = c * (1.0 - fx) + d * fx;
        top * (1.0 - fy) + bottom * fy
    };
    Rgba::new(
        mix(tl.r, tr.r, bl.r, br.r),
        mix(tl.g, tr.g, bl.g, br.g),
        mix(tl.b, tr.b, bl.b, br.b),
        mix(tl.a, tr.a, bl.a, br.a),
    )
}

impl Layer {
    // ========================================================================
    // Clip
    // ========================================================================

    /// Copy the region `rect` into a new layer of `rect.size`.
    ///
    /// Parts of `rect` outside this layer come out transparent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions) if `rect`
    /// is empty.
    pub fn clip_to(&self, rect: Rect) -> Result<Self> {
        trace!(
            x = rect.origin.x,
            y = rect.origin.y,
            width = rect.size.width,
            height = rect.size.height,
            "clip"
        );
        let (ox, oy) = (i64::from(rect.origin.x), i64::from(rect.origin.y));
        build(rect.size, |x, y| {
            sample(self, ox + i64::from(x), oy + i64::from(y))
        })
    }

    /// Replace this layer with the region `rect`. See [`Layer::clip_to`].
    pub fn clip(&mut self, rect: Rect) -> Result<()> {
        self.replace_with(|layer| layer.clip_to(rect))
    }

    // ========================================================================
    // Resize
    // ========================================================================

    /// Nearest-neighbour resize.
    ///
    /// Output pixel `(x, y)` copies source pixel
    /// `(trunc(x * src_w / dst_w), trunc(y * src_h / dst_h))`.
    pub fn resize_nearest_to(&self, size: Size) -> Result<Self> {
        trace!(
            from = ?self.size(),
            to = ?size,
            "resize_nearest"
        );
        let x_scale = f64::from(self.width()) / f64::from(size.width.max(1));
        let y_scale = f64::from(self.height()) / f64::from(size.height.max(1));

        build(size, |x, y| {
            let sx = (f64::from(x) * x_scale) as i64;
            let sy = (f64::from(y) * y_scale) as i64;
            sample(self, sx, sy)
        })
    }

    /// Nearest-neighbour resize in place. See [`Layer::resize_nearest_to`].
    pub fn resize_nearest(&mut self, size: Size) -> Result<()> {
        self.replace_with(|layer| layer.resize_nearest_to(size))
    }

    /// Bilinear resize.
    ///
    /// Source coordinates scale by `(src - 1) / (dst - 1)` so that corners line up; the
    /// four neighbours are weighted by the fractional offsets. A target dimension of 1
    /// samples the middle of the source along that axis.
    pub fn resize_bilinear_to(&self, size: Size) -> Result<Self> {
        trace!(
            from = ?self.size(),
            to = ?size,
            "resize_bilinear"
        );
        let (x_scale, x_offset) = bilinear_axis(self.width(), size.width);
        let (y_scale, y_offset) = bilinear_axis(self.height(), size.height);
        let max_x = i64::from(self.width()) - 1;
        let max_y = i64::from(self.height()) - 1;

        build(size, |x, y| {
            let src_x = f64::from(x) * x_scale + x_offset;
            let src_y = f64::from(y) * y_scale + y_offset;

            let x0 = src_x.floor() as i64;
            let y0 = src_y.floor() as i64;
            let x1 = (x0 + 1).clamp(0, max_x);
            let y1 = (y0 + 1).clamp(0, max_y);
            let fx = src_x - x0 as f64;
            let fy = src_y - y0 as f64;

            bilinear_mix(
                sample(self, x0, y0),
                sample(self, x1, y0),
                sample(self, x0, y1),
                sample(self, x1, y1),
                fx,
                fy,
            )
        })
    }

    /// Bilinear resize in place. See [`Layer::resize_bilinear_to`].
    pub fn resize_bilinear(&mut self, size: Size) -> Result<()> {
        self.replace_with(|layer| layer.resize_bilinear_to(size))
    }

    // ========================================================================
    // Flip
    // ========================================================================

    /// Mirrored copy, left to right.
    pub fn flip_horizontal_to(&self) -> Result<Self> {
        trace!(width = self.width(), height = self.height(), "flip_horizontal");
        let last = i64::from(self.width()) - 1;
        build(self.size(), |x, y| {
            sample(self, last - i64::from(x), i64::from(y))
        })
    }

    /// Mirror left to right in place.
    pub fn flip_horizontal(&mut self) {
        trace!(width = self.width(), height = self.height(), "flip_horizontal");
        let width = self.width() as usize;
        for row in self.pixels_mut().chunks_exact_mut(width) {
            row.reverse();
        }
    }

    /// Mirrored copy, top to bottom.
    pub fn flip_vertical_to(&self) -> Result<Self> {
        trace!(width = self.width(), height = self.height(), "flip_vertical");
        let last = i64::from(self.height()) - 1;
        build(self.size(), |x, y| {
            sample(self, i64::from(x), last - i64::from(y))
        })
    }

    /// Mirror top to bottom in place.
    pub fn flip_vertical(&mut self) {
        trace!(width = self.width(), height = self.height(), "flip_vertical");
        let width = self.width() as usize;
        let height = self.height() as usize;
        let pixels = self.pixels_mut();

        for y in 0..height / 2 {
            let (top, bottom) = pixels.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }

    // ========================================================================
    // Downsample
    // ========================================================================

    /// Halve both dimensions with a 2x2 box filter.
    ///
    /// RGB is averaged after applying alpha and stored as is; alpha is the plain
    /// average. A trailing odd row or column is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions) if either
    /// dimension is below 2.
    pub fn downsample_2x_to(&self) -> Result<Self> {
        trace!(width = self.width(), height = self.height(), "downsample_2x");
        let size = Size::new(self.width() / 2, self.height() / 2);

        build(size, |x, y| {
            let (sx, sy) = (i64::from(x) * 2, i64::from(y) * 2);
            let block = [
                sample(self, sx, sy),
                sample(self, sx + 1, sy),
                sample(self, sx, sy + 1),
                sample(self, sx + 1, sy + 1),
            ];

            let rgb = (block[0].apply_alpha()
                + block[1].apply_alpha()
                + block[2].apply_alpha()
                + block[3].apply_alpha())
                * 0.25;
            let a = (block[0].a + block[1].a + block[2].a + block[3].a) / 4.0;
            Rgba::from_rgb(rgb, a)
        })
    }

    /// Downsample in place. See [`Layer::downsample_2x_to`].
    pub fn downsample_2x(&mut self) -> Result<()> {
        self.replace_with(Self::downsample_2x_to)
    }
}

//! Core pixel buffer for rasterization.
//!
//! A [`Layer`] owns a dense row-major array of straight-alpha [`Rgba`] pixels. Every
//! drawing, compositing and transform operation in this crate reads or writes layers.
//!
//! Out-of-bounds access is not an error: reads return transparent black and writes are
//! ignored. Compositing and sampling code relies on this to skip bounds checks.

use crate::color::{Rgb, Rgba};
use crate::error::{Error, Result};
use crate::geometry::{Point, Size};

/// Row-major RGBA pixel buffer.
///
/// Cloning produces an independent deep copy; layers never share pixel storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels in row-major order, `width * height` long.
    pixels: Vec<Rgba>,
}

/// Allocate a `len`-pixel buffer filled with `fill`, reporting failure instead of aborting.
fn alloc_pixels(width: u32, height: u32, fill: Rgba) -> Result<Vec<Rgba>> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::Allocation { width, height })?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation { width, height })?;
    pixels.resize(len, fill);
    Ok(pixels)
}

impl Layer {
    /// Create a new, fully transparent layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero, and
    /// [`Error::Allocation`] if the pixel buffer cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use layer_raster::color::Rgba;
    /// use layer_raster::geometry::Point;
    /// use layer_raster::layer::Layer;
    ///
    /// let layer = Layer::new(800, 600).unwrap();
    /// assert_eq!(layer.width(), 800);
    /// assert_eq!(layer.height(), 600);
    /// assert_eq!(layer.get_pixel(Point::new(10, 10)), Rgba::TRANSPARENT);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let pixels = alloc_pixels(width, height, Rgba::TRANSPARENT)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a new, fully transparent layer of the given size.
    pub fn with_size(size: Size) -> Result<Self> {
        Self::new(size.width, size.height)
    }

    /// Build a layer from row-major RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the size is empty or `pixels` does not hold
    /// exactly `width * height` entries.
    pub fn from_pixels(size: Size, pixels: Vec<Rgba>) -> Result<Self> {
        if size.is_empty() || pixels.len() != size.area() {
            return Err(Error::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }

        Ok(Self {
            width: size.width,
            height: size.height,
            pixels,
        })
    }

    /// Build an opaque layer from row-major RGB pixels.
    pub fn from_rgb(size: Size, data: &[Rgb]) -> Result<Self> {
        if data.len() != size.area() {
            return Err(Error::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        let mut layer = Self::with_size(size)?;
        for (dst, &rgb) in layer.pixels.iter_mut().zip(data) {
            *dst = Rgba::from(rgb);
        }
        Ok(layer)
    }

    /// Build a layer from a slice of RGBA rows.
    ///
    /// Every row must be exactly `size.width` long and there must be `size.height` rows.
    pub fn from_rows_rgba<R: AsRef<[Rgba]>>(size: Size, rows: &[R]) -> Result<Self> {
        let invalid = Error::InvalidDimensions {
            width: size.width,
            height: size.height,
        };
        if rows.len() != size.height as usize
            || rows.iter().any(|row| row.as_ref().len() != size.width as usize)
        {
            return Err(invalid);
        }

        let mut layer = Self::with_size(size)?;
        for (dst, row) in layer.pixels.chunks_exact_mut(size.width as usize).zip(rows) {
            dst.copy_from_slice(row.as_ref());
        }
        Ok(layer)
    }

    /// Build an opaque layer from a slice of RGB rows.
    pub fn from_rows_rgb<R: AsRef<[Rgb]>>(size: Size, rows: &[R]) -> Result<Self> {
        if rows.len() != size.height as usize
            || rows.iter().any(|row| row.as_ref().len() != size.width as usize)
        {
            return Err(Error::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }

        let mut layer = Self::with_size(size)?;
        for (dst, row) in layer.pixels.chunks_exact_mut(size.width as usize).zip(rows) {
            for (px, &rgb) in dst.iter_mut().zip(row.as_ref()) {
                *px = Rgba::from(rgb);
            }
        }
        Ok(layer)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the size in pixels.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Get the raw pixel data as a mutable slice.
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Get a row of pixels as a mutable slice.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        let width = self.width as usize;
        Some(&mut self.pixels[start..start + width])
    }

    /// Check whether a coordinate lies inside the layer.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Get the color at a pixel coordinate.
    ///
    /// Returns transparent black for any coordinate outside the layer.
    #[must_use]
    pub fn get_pixel(&self, p: Point) -> Rgba {
        match self.index(p) {
            Some(idx) => self.pixels[idx],
            None => Rgba::TRANSPARENT,
        }
    }

    /// Set the color at a pixel coordinate.
    ///
    /// Does nothing if the coordinate is out of bounds.
    pub fn set_pixel(&mut self, p: Point, color: Rgba) {
        if let Some(idx) = self.index(p) {
            self.pixels[idx] = color;
        }
    }

    /// Composite `color` over the pixel at `p` using [`Rgba::blend`].
    ///
    /// Does nothing if the coordinate is out of bounds.
    pub fn blend_pixel(&mut self, p: Point, color: Rgba) {
        if let Some(idx) = self.index(p) {
            self.pixels[idx] = self.pixels[idx].blend(color);
        }
    }

    /// Exchange the entire contents (size and pixels) of two layers.
    pub fn swap_contents(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Replace this layer's contents with a freshly built one.
    ///
    /// The old buffer is released only after `build` succeeds; on error the layer is left
    /// untouched.
    pub(crate) fn replace_with<F>(&mut self, build: F) -> Result<()>
    where
        F: FnOnce(&Self) -> Result<Self>,
    {
        let next = build(self)?;
        *self = next;
        Ok(())
    }

    /// Get pixel data as tightly packed RGBA8 bytes (straight alpha).
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.to_rgba8()).collect()
    }

    /// Get pixel data flattened to opaque RGB8 bytes (alpha applied).
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|px| px.apply_alpha().to_rgb8())
            .collect()
    }

    /// Calculate the buffer index for a coordinate, if it is inside the layer.
    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y as usize) * (self.width as usize) + (p.x as usize))
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Reads outside the layer always yield alpha 0, whatever the contents.
        #[test]
        fn prop_outside_reads_are_transparent(
            w in 1u32..32,
            h in 1u32..32,
            x in -64i32..64,
            y in -64i32..64,
        ) {
            let mut layer = Layer::new(w, h).unwrap();
            layer.fill(Rgba::WHITE);
            let p = Point::new(x, y);
            let inside = x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h;
            prop_assert_eq!(layer.contains(p), inside);
            if !inside {
                prop_assert_eq!(layer.get_pixel(p).a, 0.0);
            }
        }

        /// Zero in either dimension never yields a layer.
        #[test]
        fn prop_zero_dimension_fails(n in 0u32..1000) {
            prop_assert!(Layer::new(0, n).is_err());
            prop_assert!(Layer::new(n, 0).is_err());
        }
    }
}

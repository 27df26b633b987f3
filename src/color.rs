//! Color types and straight-alpha arithmetic.
//!
//! Components are `f64` in naive linear `[0.0, 1.0]` space. Nothing is clamped on
//! construction; values are clamped only when quantized for output.
//!
//! [`Rgba`] uses *straight* (non-premultiplied) alpha: the RGB part is the color at full
//! coverage. [`Rgba::apply_alpha`] produces the premultiplied RGB wherever an operation
//! needs it (flattening to an opaque file, box filtering).
//!
//! # References
//!
//! - Porter, T., & Duff, T. (1984). "Compositing Digital Images." SIGGRAPH '84.

use std::ops::{Add, Div, Mul};

/// Clamp a component to `[0.0, 1.0]`.
#[inline]
pub(crate) fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Quantize a component to 8 bits, rounding half up.
#[inline]
pub(crate) fn quantize(v: f64) -> u8 {
    (clamp01(v) * 255.0 + 0.5) as u8
}

#[inline]
fn mix(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

/// RGB color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new RGB color. No validation is performed.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors.
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate. The endpoints are
    /// reproduced exactly at `t = 0` and `t = 1`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self::new(
            mix(self.r, to.r, t),
            mix(self.g, to.g, t),
            mix(self.b, to.b, t),
        )
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Clamp to `[0, 1]` and quantize each component to 8 bits.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.r * scalar, self.g * scalar, self.b * scalar)
    }
}

/// Componentwise division. The divisor is not guarded; dividing by zero yields
/// non-finite components.
impl Div<f64> for Rgb {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.r / scalar, self.g / scalar, self.b / scalar)
    }
}

/// RGBA color with straight (non-premultiplied) alpha.
///
/// Alpha `0.0` is fully transparent, `1.0` fully opaque. The default value is
/// transparent black, which is also what a fresh [`Layer`](crate::layer::Layer) holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new RGBA color. No validation is performed.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 1.0).
    #[must_use]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Attach an alpha value to an RGB color.
    #[must_use]
    pub const fn from_rgb(rgb: Rgb, a: f64) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// The color part, ignoring alpha.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Scale alpha by a coverage factor, leaving the color untouched.
    #[must_use]
    pub fn with_coverage(self, coverage: f64) -> Self {
        self.with_alpha(self.a * coverage)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation of all four components. `t` is not clamped.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self::from_rgb(self.rgb().lerp(to.rgb(), t), mix(self.a, to.a, t))
    }

    /// Composite `src` over `self` (the "over" operator for straight alpha).
    ///
    /// ```text
    /// out_a   = src.a + dst.a * (1 - src.a)
    /// out_rgb = (src.rgb * src.a + dst.rgb * dst.a * (1 - src.a)) / out_a
    /// ```
    ///
    /// When `out_a` is zero the result is transparent black.
    ///
    /// # Example
    ///
    /// ```
    /// use layer_raster::color::Rgba;
    ///
    /// let out = Rgba::WHITE.blend(Rgba::RED.with_alpha(0.5));
    /// assert_eq!(out.a, 1.0);
    /// assert_eq!(out.r, 1.0);
    /// assert_eq!(out.g, 0.5);
    /// ```
    #[must_use]
    pub fn blend(self, src: Self) -> Self {
        let dst = self;
        let out_a = src.a + dst.a * (1.0 - src.a);

        if out_a == 0.0 {
            return Self::TRANSPARENT;
        }

        let rgb = (src.rgb() * src.a + dst.rgb() * (dst.a * (1.0 - src.a))) / out_a;
        Self::from_rgb(rgb, out_a)
    }

    /// RGB multiplied by alpha (premultiplied color).
    #[must_use]
    pub fn apply_alpha(self) -> Rgb {
        self.rgb() * self.a
    }

    /// Quantize to straight-alpha RGBA8, clamping each component.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb, 1.0)
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

//! # Layer-Raster
//!
//! Software 2D rasterization into in-memory RGBA layers.
//!
//! A [`Layer`](layer::Layer) is a dense row-major buffer of straight-alpha
//! [`Rgba`](color::Rgba) pixels. Shapes are drawn onto layers with hard edges or with
//! coverage-based antialiasing, layers are composited onto each other with the "over"
//! operator, transformed (clip, resize, flip, downsample) and saved as PPM or PNG.
//!
//! ## Features
//!
//! - **Pure Rust**: No native image libraries
//! - **Straight Alpha**: Colors are never premultiplied in storage
//! - **Antialiasing**: Wu lines, distance-based circles, 2x2 sampled polygons
//! - **Bit-exact PPM**: P3 and P6 output matches the classic netpbm layout byte for byte
//!
//! ## Quick Start
//!
//! ```rust
//! use layer_raster::prelude::*;
//!
//! let mut background = Layer::new(64, 64)?;
//! background.fill(Rgba::WHITE);
//!
//! let mut sprite = Layer::new(16, 16)?;
//! draw_circle_aa(&mut sprite, Point::new(8, 8), 6, Rgba::RED);
//!
//! composite(&mut background, &sprite, Point::new(24, 24));
//! let ppm = PpmEncoder::to_bytes(&background, PpmFormat::Binary)?;
//! assert!(ppm.starts_with(b"P6\n64 64\n255\n"));
//! # Ok::<(), layer_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `png` (default): PNG export through the `png` crate
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber. File I/O logs at
//! `debug`, decode failures at `warn`, transforms at `trace`.
//!
//! ## Academic References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Porter, T., & Duff, T. (1984). "Compositing Digital Images." SIGGRAPH '84.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and blending math.
pub mod color;

/// Geometric primitives (points, sizes, shapes).
pub mod geometry;

/// Core pixel buffer.
pub mod layer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of shapes onto layers.
pub mod render;

/// Layer-over-layer compositing.
pub mod composite;

/// Clip, resize, flip and downsample.
pub mod transform;

/// Output encoders (PPM, PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for layer-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use layer_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, Rgba};
    pub use crate::composite::{composite, composite_with, AlphaOver, BlendMode, Replace};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Line, Point, Polygon, Rect, Size, Triangle};
    pub use crate::layer::Layer;
    #[cfg(feature = "png")]
    pub use crate::output::PngEncoder;
    pub use crate::output::{PpmDecoder, PpmEncoder, PpmFormat};
    pub use crate::render::*;
}

//! Rasterization of geometric primitives onto a [`Layer`](crate::Layer).
//!
//! Two families of functions live here:
//!
//! - **Hard-edge** (`draw_*`): pixels are overwritten with the color, no blending.
//! - **Antialiased** (`draw_*_aa`): per-pixel coverage scales the color's alpha and
//!   the result is blended over the existing pixel.
//!
//! All functions clip to the layer; shapes partially or fully outside never panic.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer line stepping with square-brush thickness
//! - **Wu's Anti-aliased Line**: smooth thin lines with sub-pixel accuracy
//! - **Scanline Triangle**: edge interpolation per row
//! - **Edge Functions**: convex polygon inside tests and 2x2 coverage sampling
//! - **Midpoint Circle**: outlined circles
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.

mod antialias;
mod drawable;
mod outline;
mod polygon;
mod primitives;

pub use antialias::{
    draw_circle_aa, draw_line_aa, draw_polygon_aa, draw_rect_aa, draw_triangle_aa,
};
pub use drawable::Drawable;
pub use outline::{
    draw_circle_outline, draw_circle_outline_aa, draw_polygon_outline, draw_polygon_outline_aa,
    draw_rect_outline, draw_triangle_outline, draw_triangle_outline_aa,
};
pub use polygon::{draw_polygon, draw_triangle};
pub use primitives::{draw_circle, draw_line, draw_rect};

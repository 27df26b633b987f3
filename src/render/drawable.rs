//! Shape-value drawing.

use crate::color::Rgba;
use crate::geometry::{Circle, Line, Polygon, Rect, Triangle};
use crate::layer::Layer;
use crate::render::antialias::{
    draw_circle_aa, draw_line_aa, draw_polygon_aa, draw_rect_aa, draw_triangle_aa,
};
use crate::render::polygon::{draw_polygon, draw_triangle};
use crate::render::primitives::{draw_circle, draw_line, draw_rect};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a layer with hard edges.
    fn draw(&self, layer: &mut Layer, color: Rgba);

    /// Draw this primitive with anti-aliasing.
    fn draw_aa(&self, layer: &mut Layer, color: Rgba);
}

impl Drawable for Line {
    fn draw(&self, layer: &mut Layer, color: Rgba) {
        draw_line(layer, self.start, self.end, self.thickness, color);
    }

    fn draw_aa(&self, layer: &mut Layer, color: Rgba) {
        draw_line_aa(layer, self.start, self.end, self.thickness, color);
    }
}

impl Drawable for Rect {
    fn draw(&self, layer: &mut Layer, color: Rgba) {
        draw_rect(layer, self.origin, self.size, color);
    }

    fn draw_aa(&self, layer: &mut Layer, color: Rgba) {
        draw_rect_aa(layer, self.origin, self.size, color);
    }
}

impl Drawable for Circle {
    fn draw(&self, layer: &mut Layer, color: Rgba) {
        draw_circle(layer, self.center, self.radius, color);
    }

    fn draw_aa(&self, layer: &mut Layer, color: Rgba) {
        draw_circle_aa(layer, self.center, self.radius, color);
    }
}

impl Drawable for Triangle {
    fn draw(&self, layer: &mut Layer, color: Rgba) {
        let [a, b, c] = self.vertices;
        draw_triangle(layer, a, b, c, color);
    }

    fn draw_aa(&self, layer: &mut Layer, color: Rgba) {
        let [a, b, c] = self.vertices;
        draw_triangle_aa(layer, a, b, c, color);
    }
}

impl Drawable for Polygon {
    fn draw(&self, layer: &mut Layer, color: Rgba) {
        draw_polygon(layer, &self.vertices, color);
    }

    fn draw_aa(&self, layer: &mut Layer, color: Rgba) {
        draw_polygon_aa(layer, &self.vertices, color);
    }
}

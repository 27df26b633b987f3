//! Geometric primitives for rasterization.
//!
//! Pixel coordinates are integers with the origin at the top-left and `y` growing
//! downward. Points are signed so that shapes may extend past the layer edges; sizes
//! are unsigned.

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point, saturating at the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = (i64::from(self.x) - i64::from(other.x)) as f64;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f64;
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    #[must_use]
    pub const fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent in pixels.
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from raw coordinates.
    #[must_use]
    pub const fn from_coords(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Check if a pixel lies inside the rectangle (right/bottom edges exclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let dx = i64::from(point.x) - i64::from(self.origin.x);
        let dy = i64::from(point.y) - i64::from(self.origin.y);
        dx >= 0 && dy >= 0 && dx < i64::from(self.size.width) && dy < i64::from(self.size.height)
    }

    /// The four corners in clockwise order (on screen), inclusive of the last pixel.
    ///
    /// Corners past the `i32` range are clamped to it.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let last = |origin: i32, extent: u32| {
            let edge = i64::from(origin) + i64::from(extent) - 1;
            edge.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
        };
        let right = last(self.origin.x, self.size.width);
        let bottom = last(self.origin.y, self.size.height);
        [
            self.origin,
            Point::new(right, self.origin.y),
            Point::new(right, bottom),
            Point::new(self.origin.x, bottom),
        ]
    }
}

/// A line segment with a stroke thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke thickness in pixels (values <= 1 draw a one-pixel line).
    pub thickness: u32,
}

impl Line {
    /// Create a one-pixel line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            thickness: 1,
        }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Set the stroke thickness.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels.
    pub radius: u32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: u32) -> Self {
        Self { center, radius }
    }
}

/// A triangle given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle {
    /// Vertices in any winding order.
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
}

/// A convex polygon given by its vertices in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    /// Vertices in either winding order.
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Create a new polygon.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }
}

/// Twice the signed area of a vertex ring (shoelace formula).
///
/// Positive for clockwise-on-screen (y down) winding, negative for counter-clockwise,
/// zero for degenerate rings.
pub(crate) fn signed_area2(vertices: &[(f64, f64)]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let (x0, y0) = vertices[i];
            let (x1, y1) = vertices[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum()
}

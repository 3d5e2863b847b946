//! Regular hexagon fitted inside a bounding rectangle.
//!
//! The hexagon has flat top and bottom edges and points to the left and
//! right. Vertices are numbered clockwise on screen (y grows downward):
//!
//! ```text
//!       0------1
//!      /        \
//!     5          2
//!      \        /
//!       4------3
//! ```
//!
//! Centre lookups rely on this order: vertices 2 and 5 share the centre's
//! `y` and bracket its `x`, vertices 0 and 3 bracket its `y`.

use crate::core::types::{to_pixel, Point, Point2D, Rect};
use geo::{BoundingRect, Contains, Coord, LineString, Polygon, Scale, Translate};

pub const SQRT3: f64 = 1.732_050_807_568_877_2;

/// Vertex geometry of one hex cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HexShape {
    vertices: [Point2D; 6],
    /// Base rectangle the vertices were computed from
    base: Rect,
    /// Perpendicular offset of edge decorations, a third of the side scale
    len: f64,
}

impl HexShape {
    pub fn new(rect: Rect) -> Self {
        let mut shape = Self::default();
        shape.compute_vertices(rect);
        shape
    }

    /// Fit the largest regular hexagon centred in `rect`.
    ///
    /// Both half extents are clamped against the rectangle directly, so the
    /// vertices never leave it even after rounding. A rectangle without
    /// positive area collapses the hexagon onto its centre.
    pub fn compute_vertices(&mut self, rect: Rect) -> [Point2D; 6] {
        let w = rect.width as f64;
        let h = rect.height as f64;
        let half_width = (w / 2.0).min(h / SQRT3).max(0.0);
        let half_height = (h / 2.0).min(w * SQRT3 / 4.0).max(0.0);
        let scale = half_width / 2.0;

        let mx = rect.x as f64 + w / 2.0;
        let my = rect.y as f64 + h / 2.0;

        self.vertices = [
            Point2D::new(mx - scale, my - half_height),
            Point2D::new(mx + scale, my - half_height),
            Point2D::new(mx + half_width, my),
            Point2D::new(mx + scale, my + half_height),
            Point2D::new(mx - scale, my + half_height),
            Point2D::new(mx - half_width, my),
        ];
        self.base = rect;
        self.len = scale / 3.0;
        self.vertices
    }

    pub fn vertices(&self) -> &[Point2D; 6] {
        &self.vertices
    }

    pub fn vertex(&self, i: usize) -> Point2D {
        self.vertices[i % 6]
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1`.
    pub fn edge(&self, i: usize) -> (Point2D, Point2D) {
        (self.vertex(i), self.vertex(i + 1))
    }

    pub fn base_rect(&self) -> Rect {
        self.base
    }

    /// Offset used to size decorations drawn along the edges
    pub fn decoration_len(&self) -> f64 {
        self.len
    }

    /// Half the length of a side
    pub fn side_scale(&self) -> f64 {
        self.len * 3.0
    }

    /// Hit test against the hexagon itself, not its rectangle.
    pub fn contains(&self, point: Point) -> bool {
        self.contains_2d(point.as_dvec2())
    }

    pub fn contains_2d(&self, point: Point2D) -> bool {
        even_odd_contains(&self.vertices, point)
    }

    /// The pixel closest to the centre of the hexagon.
    ///
    /// Inside the hexagon whenever both sides of the base rectangle are at
    /// least two pixels. With a one-pixel side, rounding half up lands the
    /// centre on the hexagon's right vertex or edge, which `contains` rejects.
    pub fn find_center(&self) -> Point {
        to_pixel(self.find_center_2d())
    }

    pub fn find_center_2d(&self) -> Point2D {
        let v = &self.vertices;
        Point2D::new((v[2].x + v[5].x) / 2.0, (v[0].y + v[3].y) / 2.0)
    }

    /// Pixel rectangle covering the hexagon
    pub fn bounds(&self) -> Rect {
        let min = self.vertices.iter().copied().fold(self.vertices[0], Point2D::min);
        let max = self.vertices.iter().copied().fold(self.vertices[0], Point2D::max);
        Rect::enclosing(min, max)
    }

    pub fn polygon(&self) -> Polygon<f64> {
        polygon_of(&self.vertices)
    }

    /// The hexagon shrunk by `scale` and moved back onto the original centre.
    pub fn inner_hexagon(&self, scale: f64) -> Polygon<f64> {
        let center = self.find_center_2d();
        let inner = self.polygon().scale(scale);
        match inner.bounding_rect() {
            Some(bbox) => {
                let c = bbox.center();
                inner.translate(center.x - c.x, center.y - c.y)
            }
            None => inner,
        }
    }

    /// Interior test against [`HexShape::inner_hexagon`]; points on its
    /// outline are outside.
    pub fn inner_contains(&self, point: Point, scale: f64) -> bool {
        let p = point.as_dvec2();
        self.inner_hexagon(scale).contains(&Coord { x: p.x, y: p.y })
    }
}

/// Even-odd rule point-in-polygon test.
///
/// Counts crossings of a horizontal ray running right from `point`.
pub fn even_odd_contains(vertices: &[Point2D], point: Point2D) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > point.y) != (b.y > point.y) {
            let cross_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

pub(crate) fn polygon_of(points: &[Point2D]) -> Polygon<f64> {
    let ring: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    Polygon::new(LineString::from(ring), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_height_limited_vertices() {
        // A regular hexagon is 2:sqrt3 wide, so 80x40 leaves spare width
        let shape = HexShape::new(Rect::new(0, 0, 80, 40));
        let v = shape.vertices();
        assert_eq!(v[0].y, 0.0);
        assert_eq!(v[3].y, 40.0);
        assert!((v[2].x - v[5].x - 80.0 / SQRT3).abs() < 1e-9);
    }

    #[test]
    fn test_square_rect_touches_left_and_right() {
        let shape = HexShape::new(Rect::new(10, 20, 60, 60));
        let v = shape.vertices();
        assert_eq!(v[5].x, 10.0);
        assert_eq!(v[2].x, 70.0);
        assert_eq!(v[5].y, 50.0);
        assert!(v[0].y > 20.0);
        assert_eq!(shape.side_scale(), 15.0);
        assert_eq!(shape.decoration_len(), 5.0);
    }

    #[test]
    fn test_regular_sides() {
        let shape = HexShape::new(Rect::new(0, 0, 100, 100));
        let lengths: Vec<f64> = (0..6)
            .map(|i| {
                let (a, b) = shape.edge(i);
                a.distance(b)
            })
            .collect();
        for l in &lengths {
            assert!((l - lengths[0]).abs() < 1e-9, "sides {:?}", lengths);
        }
    }

    #[test]
    fn test_contains_respects_corners() {
        let shape = HexShape::new(Rect::new(0, 0, 100, 100));
        assert!(shape.contains(shape.find_center()));
        // Inside the rectangle but cut off by the top-left edge
        assert!(!shape.contains(Point::new(2, 16)));
        assert!(!shape.contains(Point::new(50, 5)));
        assert!(shape.contains(Point::new(50, 10)));
    }

    #[test]
    fn test_degenerate_rect_collapses() {
        let mut shape = HexShape::default();
        let v = shape.compute_vertices(Rect::new(5, 5, 0, -10));
        assert!(v.iter().all(|p| *p == v[0]));
        assert!(!shape.contains(Point::new(5, 0)));
        assert_eq!(shape.decoration_len(), 0.0);
    }

    #[test]
    fn test_center_uses_round_half_up() {
        // x is exact when the width limits the hexagon, y when the height does
        let square = HexShape::new(Rect::new(0, 0, 3, 3));
        assert_eq!(square.find_center_2d().x, 1.5);
        assert_eq!(square.find_center().x, 2);

        let wide = HexShape::new(Rect::new(0, 0, 9, 3));
        assert_eq!(wide.find_center_2d().y, 1.5);
        assert_eq!(wide.find_center().y, 2);

        let negative = HexShape::new(Rect::new(-3, -3, 3, 3));
        assert_eq!(negative.find_center().x, -1);
    }

    #[test]
    fn test_center_inside_needs_two_pixels() {
        for (w, h) in [(2, 2), (3, 2), (2, 3), (2, 50), (50, 2)] {
            let shape = HexShape::new(Rect::new(-7, 11, w, h));
            assert!(shape.contains(shape.find_center()), "{}x{}", w, h);
        }
        // A one-pixel side rounds the centre onto the outline
        for (w, h) in [(1, 1), (2, 1), (1, 2), (1, 50)] {
            let shape = HexShape::new(Rect::new(0, 0, w, h));
            assert!(!shape.contains(shape.find_center()), "{}x{}", w, h);
        }
    }

    #[test]
    fn test_inner_hexagon_is_concentric() {
        let shape = HexShape::new(Rect::new(0, 0, 100, 100));
        let outer = shape.polygon();
        let inner = shape.inner_hexagon(0.8);
        let ratio = inner.unsigned_area() / outer.unsigned_area();
        assert!((ratio - 0.64).abs() < 1e-9);
        let bbox = inner.bounding_rect().unwrap();
        let c = shape.find_center_2d();
        assert!((bbox.center().x - c.x).abs() < 1e-9);
        assert!((bbox.center().y - c.y).abs() < 1e-9);
        assert!(shape.inner_contains(Point::new(50, 50), 0.8));
        assert!(!shape.inner_contains(Point::new(4, 50), 0.8));
        assert!(shape.contains(Point::new(4, 50)));
    }

    #[test]
    fn test_inner_contains_edges() {
        let shape = HexShape::new(Rect::new(0, 0, 100, 100));
        // Inner hexagon spans x 10..90 on the centre row, y 15.36..84.64
        assert!(shape.inner_contains(Point::new(12, 50), 0.8));
        assert!(!shape.inner_contains(Point::new(8, 50), 0.8));
        assert!(shape.inner_contains(Point::new(50, 16), 0.8));
        assert!(!shape.inner_contains(Point::new(50, 15), 0.8));

        // Full scale agrees with the even-odd test away from the outline
        for x in (2..100).step_by(7) {
            for y in (2..100).step_by(7) {
                let p = Point::new(x, y);
                assert_eq!(shape.inner_contains(p, 1.0), shape.contains(p), "{:?}", p);
            }
        }
    }

    #[test]
    fn test_bounds_cover_vertices() {
        let shape = HexShape::new(Rect::new(0, 0, 100, 100));
        let b = shape.bounds();
        assert_eq!(b.x, 0);
        assert_eq!(b.width, 100);
        assert!(b.y >= 0 && b.bottom() <= 100);
    }
}

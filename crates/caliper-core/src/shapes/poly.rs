//! Polyline shape implementation.

use crate::action::PolyPatch;
use crate::geometry;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A multi-segment measuring line.
///
/// The vertex list is never empty: a polyline begins life as the single
/// point where the pointer first went down. The trailing vertex is the
/// one that tracks the pointer while the polyline is in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poly {
    points: Vec<Point>,
}

impl Poly {
    /// Create a polyline holding its first vertex.
    pub fn new(origin: Point) -> Self {
        Self {
            points: vec![origin],
        }
    }

    /// The vertices in draw order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Append a vertex after the trailing one.
    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Relocate the trailing vertex in place.
    pub fn set_endpoint(&mut self, p: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = p;
        }
    }

    /// The vertex just before the trailing one, if the polyline has more
    /// than one vertex. This is the last vertex a press committed.
    pub fn prev_vertex(&self) -> Option<Point> {
        if self.points.len() < 2 {
            None
        } else {
            Some(self.points[self.points.len() - 2])
        }
    }

    /// Remove the trailing vertex. The final remaining vertex is kept so
    /// the polyline never goes empty.
    pub(crate) fn drop_last(&mut self) {
        if self.points.len() > 1 {
            self.points.pop();
        }
    }

    /// Total length of all segments.
    pub fn total_length(&self) -> f64 {
        geometry::polyline_length(&self.points)
    }

    /// Per-segment lengths in draw order.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.points.windows(2).map(|w| w[0].distance(w[1])).collect()
    }

    /// Per-segment bearings in degrees, in draw order.
    pub fn segment_angles(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| geometry::bearing_deg(w[0], w[1]))
            .collect()
    }

    /// Vertices flattened to `[x0, y0, x1, y1, ..]`.
    pub fn flat_points(&self) -> Vec<f64> {
        geometry::flatten(&self.points)
    }

    /// Vertices flattened to canvas-space `[x0, y0, ..]`.
    pub fn canvas_points(&self) -> Vec<f64> {
        geometry::flatten_canvas(&self.points)
    }

    /// Apply a vertex edit.
    pub(crate) fn apply(&mut self, patch: PolyPatch) {
        match patch {
            PolyPatch::MoveLast(p) => self.set_endpoint(p),
            PolyPatch::AddVertex(p) => {
                self.set_endpoint(p);
                self.add_point(p);
            }
            PolyPatch::DropLast => self.drop_last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poly_starts_with_one_vertex() {
        let poly = Poly::new(Point::new(5.0, 6.0));
        assert_eq!(poly.vertex_count(), 1);
        assert_eq!(poly.points()[0], Point::new(5.0, 6.0));
    }

    #[test]
    fn test_add_point_grows_by_one() {
        let mut poly = Poly::new(Point::ZERO);
        poly.add_point(Point::new(1.0, 0.0));
        assert_eq!(poly.vertex_count(), 2);
        poly.add_point(Point::new(2.0, 0.0));
        assert_eq!(poly.vertex_count(), 3);
        assert_eq!(poly.points()[0], Point::ZERO);
    }

    #[test]
    fn test_set_endpoint_moves_only_the_trailing_vertex() {
        let mut poly = Poly::new(Point::ZERO);
        poly.add_point(Point::new(1.0, 1.0));
        poly.set_endpoint(Point::new(9.0, 9.0));
        assert_eq!(poly.points(), &[Point::ZERO, Point::new(9.0, 9.0)]);
    }

    #[test]
    fn test_drop_last_keeps_final_vertex() {
        let mut poly = Poly::new(Point::ZERO);
        poly.add_point(Point::new(1.0, 0.0));
        poly.drop_last();
        assert_eq!(poly.vertex_count(), 1);
        poly.drop_last();
        assert_eq!(poly.vertex_count(), 1);
    }

    #[test]
    fn test_prev_vertex() {
        let mut poly = Poly::new(Point::ZERO);
        assert_eq!(poly.prev_vertex(), None);
        poly.add_point(Point::new(4.0, 0.0));
        assert_eq!(poly.prev_vertex(), Some(Point::ZERO));
        poly.add_point(Point::new(8.0, 0.0));
        assert_eq!(poly.prev_vertex(), Some(Point::new(4.0, 0.0)));
    }

    #[test]
    fn test_total_length_and_segments() {
        let mut poly = Poly::new(Point::ZERO);
        poly.add_point(Point::new(3.0, 4.0));
        poly.add_point(Point::new(3.0, 10.0));
        assert!((poly.total_length() - 11.0).abs() < f64::EPSILON);
        let lengths = poly.segment_lengths();
        assert_eq!(lengths.len(), 2);
        assert!((lengths[0] - 5.0).abs() < f64::EPSILON);
        assert!((lengths[1] - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_segment_angles() {
        let mut poly = Poly::new(Point::ZERO);
        poly.add_point(Point::new(10.0, 0.0));
        poly.add_point(Point::new(10.0, 10.0));
        let angles = poly.segment_angles();
        assert!((angles[0] - 0.0).abs() < 1e-9);
        assert!((angles[1] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_vertex_patch_pins_then_grows() {
        let mut poly = Poly::new(Point::ZERO);
        poly.add_point(Point::ZERO);
        poly.apply(PolyPatch::MoveLast(Point::new(5.0, 5.0)));
        assert_eq!(poly.points(), &[Point::ZERO, Point::new(5.0, 5.0)]);

        poly.apply(PolyPatch::AddVertex(Point::new(6.0, 5.0)));
        assert_eq!(
            poly.points(),
            &[Point::ZERO, Point::new(6.0, 5.0), Point::new(6.0, 5.0)]
        );

        poly.apply(PolyPatch::DropLast);
        assert_eq!(poly.points(), &[Point::ZERO, Point::new(6.0, 5.0)]);
    }

    #[test]
    fn test_canvas_points_strip_layout_offsets() {
        let mut poly = Poly::new(Point::new(300.0, 45.0));
        poly.add_point(Point::new(305.0, 50.0));
        assert_eq!(poly.canvas_points(), vec![0.0, 0.0, 5.0, 5.0]);
        assert_eq!(poly.flat_points(), vec![300.0, 45.0, 305.0, 50.0]);
    }
}

//! Line shape implementation.

use crate::action::LinePatch;
use crate::geometry;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A straight measuring segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Start point, pinned where the drag began.
    pub start: Point,
    /// End point; tracks the pointer while the line is in progress.
    pub end: Point,
}

impl Line {
    /// Create a line between two points.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Bearing from start to end in degrees, in `(-180, 180]`.
    pub fn angle_deg(&self) -> f64 {
        geometry::bearing_deg(self.start, self.end)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Endpoints as `[x1, y1, x2, y2]` in absolute viewport space.
    pub fn points(&self) -> [f64; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    /// Endpoints as `[x1, y1, x2, y2]` in canvas space.
    pub fn canvas_points(&self) -> [f64; 4] {
        let start = geometry::canvas_point(self.start);
        let end = geometry::canvas_point(self.end);
        [start.x, start.y, end.x, end.y]
    }

    /// Endpoints translated so the segment starts at the origin, as
    /// `[0, 0, x2 - x1, y2 - y1]`.
    pub fn zeroed_points(&self) -> [f64; 4] {
        [0.0, 0.0, self.end.x - self.start.x, self.end.y - self.start.y]
    }

    /// Apply sparse endpoint moves.
    pub(crate) fn apply(&mut self, patch: LinePatch) {
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((line.length() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_line_has_zero_length() {
        let p = Point::new(10.0, 10.0);
        let line = Line::new(p, p);
        assert_eq!(line.length(), 0.0);
        assert_eq!(line.points(), [10.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_line_midpoint() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        let mid = line.midpoint();
        assert!((mid.x - 5.0).abs() < f64::EPSILON);
        assert!((mid.y - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_line_angle() {
        let line = Line::new(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        assert!((line.angle_deg() - 45.0).abs() < 1e-10);
    }

    #[test]
    fn test_line_point_arrays() {
        let line = Line::new(Point::new(310.0, 50.0), Point::new(320.0, 65.0));
        assert_eq!(line.points(), [310.0, 50.0, 320.0, 65.0]);
        assert_eq!(line.canvas_points(), [10.0, 5.0, 20.0, 20.0]);
        assert_eq!(line.zeroed_points(), [0.0, 0.0, 10.0, 15.0]);
    }

    #[test]
    fn test_line_patch_moves_endpoints() {
        let p = Point::new(10.0, 10.0);
        let mut line = Line::new(p, p);
        line.apply(LinePatch {
            start: None,
            end: Some(Point::new(13.0, 14.0)),
        });
        assert_eq!(line.start, Point::new(10.0, 10.0));
        assert_eq!(line.end, Point::new(13.0, 14.0));
        assert!((line.length() - 5.0).abs() < f64::EPSILON);
        assert_eq!(line.points(), [10.0, 10.0, 13.0, 14.0]);

        line.apply(LinePatch {
            start: Some(Point::new(5.0, 5.0)),
            end: None,
        });
        assert_eq!(line.start, Point::new(5.0, 5.0));
        assert_eq!(line.end, Point::new(13.0, 14.0));
    }
}

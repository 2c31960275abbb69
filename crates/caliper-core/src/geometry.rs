//! Viewport layout constants and the point helpers shared by all shapes.

use kurbo::Point;

/// Horizontal distance from the window edge to the canvas: the sidebar
/// sits to the left of the drawing surface.
pub const SIDEBAR_OFFSET: f64 = 300.0;

/// Vertical distance from the window edge to the canvas: the top bar sits
/// above the drawing surface.
pub const TOPBAR_OFFSET: f64 = 45.0;

/// Narrowest the sidebar can be dragged.
pub const MIN_SIDEBAR_WIDTH: f64 = 300.0;

/// Widest the sidebar can be dragged.
pub const MAX_SIDEBAR_WIDTH: f64 = 450.0;

/// Bearing from `from` to `to` in degrees, in `(-180, 180]` with y-down
/// screen coordinates. Coincident points report `0.0`.
pub fn bearing_deg(from: Point, to: Point) -> f64 {
    (to - from).atan2().to_degrees()
}

/// Translate an absolute viewport point into canvas space by stripping the
/// fixed layout offsets.
pub fn canvas_point(p: Point) -> Point {
    Point::new(p.x - SIDEBAR_OFFSET, p.y - TOPBAR_OFFSET)
}

/// Flatten points into the `[x0, y0, x1, y1, ..]` layout renderers take
/// stroke coordinates in.
pub fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Flatten points into `[x0, y0, ..]` after translating each into canvas
/// space.
pub fn flatten_canvas(points: &[Point]) -> Vec<f64> {
    points
        .iter()
        .map(|&p| canvas_point(p))
        .flat_map(|p| [p.x, p.y])
        .collect()
}

/// Total length of the polyline running through `points` in order.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

//! Per-kind drawing behavior behind the pad's begin/press/drag/release
//! loop.
//!
//! Each shape kind contributes one [`DrawTool`]. The pad runs the same
//! event loop for every kind and lets the tool decide what a press, drag,
//! or release means for the shape under construction.

use crate::action::{CirclePatch, GeometryPatch, LinePatch, PolyPatch};
use crate::color::Rgba;
use crate::shapes::{Geometry, Poly, Shape, ShapeId, ShapeKind};
use kurbo::Point;

/// How close a press must land to the last committed vertex to close a
/// polyline, in pixels.
pub const POLY_CLOSE_SLOP: f64 = 5.0;

/// What one pointer event means for the shape under construction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawStep {
    /// Defined no-op for this kind.
    Ignore,
    /// Anomalous event; report it and leave everything as it was.
    Reject,
    /// Patch the in-progress geometry.
    Continue(GeometryPatch),
    /// Finalize the shape, optionally patching it first.
    Finish(Option<GeometryPatch>),
}

/// Drawing behavior for one shape kind.
pub trait DrawTool {
    /// Fresh in-progress shape for a press while the pad is idle.
    fn begin(&self, id: ShapeId, origin: Point) -> Shape;

    /// A press while this kind is mid-draw.
    fn press(&self, shape: &Shape, at: Point) -> DrawStep;

    /// A pointer move while mid-draw.
    fn drag(&self, shape: &Shape, at: Point) -> DrawStep;

    /// A release while mid-draw.
    fn release(&self, shape: &Shape, at: Point) -> DrawStep;
}

/// The drawing behavior for a kind.
pub fn tool_for(kind: ShapeKind) -> &'static dyn DrawTool {
    match kind {
        ShapeKind::Line => &LineTool,
        ShapeKind::Poly => &PolyTool,
        ShapeKind::Circle => &CircleTool,
    }
}

/// Drag-to-draw straight segments: press pins the start, release ends.
#[derive(Debug, Default)]
pub struct LineTool;

impl DrawTool for LineTool {
    fn begin(&self, id: ShapeId, origin: Point) -> Shape {
        Shape::line(id, origin, Rgba::black())
    }

    fn press(&self, _shape: &Shape, _at: Point) -> DrawStep {
        // A second press mid-drag means the matching release was lost.
        DrawStep::Reject
    }

    fn drag(&self, _shape: &Shape, at: Point) -> DrawStep {
        DrawStep::Continue(GeometryPatch::Line(LinePatch {
            start: None,
            end: Some(at),
        }))
    }

    fn release(&self, _shape: &Shape, _at: Point) -> DrawStep {
        DrawStep::Finish(None)
    }
}

/// Click-to-commit polylines: each press pins a vertex, a press on the
/// last committed vertex closes the run, releases mean nothing.
#[derive(Debug, Default)]
pub struct PolyTool;

impl DrawTool for PolyTool {
    fn begin(&self, id: ShapeId, origin: Point) -> Shape {
        // Seed the trailing vertex up front so the first drag has a
        // vertex to move without disturbing the origin.
        let mut poly = Poly::new(origin);
        poly.add_point(origin);
        Shape::from_parts(id, origin, Rgba::blue(), Geometry::Poly(poly))
    }

    fn press(&self, shape: &Shape, at: Point) -> DrawStep {
        let Some(poly) = shape.as_poly() else {
            return DrawStep::Reject;
        };
        match poly.prev_vertex() {
            Some(prev) if prev.distance(at) <= POLY_CLOSE_SLOP => {
                // Pressing the committed vertex again ends the run; the
                // trailing duplicate is dropped before finalizing.
                DrawStep::Finish(Some(GeometryPatch::Poly(PolyPatch::DropLast)))
            }
            _ => DrawStep::Continue(GeometryPatch::Poly(PolyPatch::AddVertex(at))),
        }
    }

    fn drag(&self, _shape: &Shape, at: Point) -> DrawStep {
        DrawStep::Continue(GeometryPatch::Poly(PolyPatch::MoveLast(at)))
    }

    fn release(&self, _shape: &Shape, _at: Point) -> DrawStep {
        // Polylines commit on presses; the paired releases carry nothing.
        DrawStep::Ignore
    }
}

/// Drag-to-size circles: the center pins where the press landed, the
/// radius follows the pointer, release ends.
#[derive(Debug, Default)]
pub struct CircleTool;

impl DrawTool for CircleTool {
    fn begin(&self, id: ShapeId, origin: Point) -> Shape {
        Shape::circle(id, origin, Rgba::red())
    }

    fn press(&self, _shape: &Shape, _at: Point) -> DrawStep {
        DrawStep::Reject
    }

    fn drag(&self, shape: &Shape, at: Point) -> DrawStep {
        DrawStep::Continue(GeometryPatch::Circle(CirclePatch {
            radius: Some(shape.origin.distance(at)),
        }))
    }

    fn release(&self, _shape: &Shape, _at: Point) -> DrawStep {
        DrawStep::Finish(None)
    }
}

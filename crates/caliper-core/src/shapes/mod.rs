//! Shape definitions for the measuring pad.

mod circle;
mod line;
mod poly;

pub use circle::Circle;
pub use line::Line;
pub use poly::Poly;

use crate::action::{GeometryPatch, ShapePatch};
use crate::color::Rgba;
use crate::error::{PadError, PadResult};
use crate::geometry;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Shortest a finalized line may be and still be kept, in pixels.
pub const MIN_LINE_LENGTH: f64 = 8.0;

/// Fewest vertices a finalized polyline may have and still be kept.
pub const MIN_POLY_POINTS: usize = 2;

/// Smallest radius a finalized circle may have and still be kept, in
/// pixels.
pub const MIN_CIRCLE_RADIUS: f64 = 5.0;

/// The closed set of shape kinds, doubling as the pad's draw mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Line,
    Poly,
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Line => f.write_str("line"),
            ShapeKind::Poly => f.write_str("poly"),
            ShapeKind::Circle => f.write_str("circle"),
        }
    }
}

/// Mints ids for new shapes.
///
/// Interactive pads use `Random`. `Sequential` derives ids from a counter
/// so tests and replays see creation order in the ids themselves.
#[derive(Debug, Clone, Default)]
pub enum IdSource {
    /// Random v4 uuids.
    #[default]
    Random,
    /// Counter-backed uuids: 1, 2, 3, .. encoded in the low bits.
    Sequential(u64),
}

impl IdSource {
    /// Mint the next id.
    pub fn next_id(&mut self) -> ShapeId {
        match self {
            IdSource::Random => Uuid::new_v4(),
            IdSource::Sequential(n) => {
                *n += 1;
                Uuid::from_u128(u128::from(*n))
            }
        }
    }
}

/// Kind-specific geometry, one case per shape kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Geometry {
    Line(Line),
    Poly(Poly),
    Circle(Circle),
}

impl Geometry {
    /// The kind tag of this case.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Line(_) => ShapeKind::Line,
            Geometry::Poly(_) => ShapeKind::Poly,
            Geometry::Circle(_) => ShapeKind::Circle,
        }
    }
}

/// A drawn shape: shared identity and presentation plus one geometry case.
///
/// The id and the geometry case are fixed at construction. Geometry is
/// edited through kind-tagged patches, so a line can never turn into a
/// circle mid-life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    /// Where the pointer went down when this shape was begun. Doubles as
    /// the center for circles.
    pub origin: Point,
    /// Stroke color.
    pub color: Rgba,
    /// Whether this shape is the measuring-unit reference.
    pub is_unit: bool,
    /// Whether the sidebar profile for this shape is expanded.
    pub show_details: bool,
    geometry: Geometry,
}

impl Shape {
    /// Create a line shape: a zero-length segment at `origin`.
    pub fn line(id: ShapeId, origin: Point, color: Rgba) -> Self {
        Self::from_parts(id, origin, color, Geometry::Line(Line::new(origin, origin)))
    }

    /// Create a polyline shape: a single-vertex run at `origin`.
    pub fn poly(id: ShapeId, origin: Point, color: Rgba) -> Self {
        Self::from_parts(id, origin, color, Geometry::Poly(Poly::new(origin)))
    }

    /// Create a circle shape: zero radius centered on `origin`.
    pub fn circle(id: ShapeId, origin: Point, color: Rgba) -> Self {
        Self::from_parts(id, origin, color, Geometry::Circle(Circle::new()))
    }

    /// Assemble a shape from explicit parts.
    pub(crate) fn from_parts(id: ShapeId, origin: Point, color: Rgba, geometry: Geometry) -> Self {
        Self {
            id,
            origin,
            color,
            is_unit: false,
            show_details: false,
            geometry,
        }
    }

    /// The shape's id.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// The shape's kind tag.
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Borrow the geometry case.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Whether this shape is a line.
    pub fn is_line(&self) -> bool {
        matches!(self.geometry, Geometry::Line(_))
    }

    /// Whether this shape is a polyline.
    pub fn is_poly(&self) -> bool {
        matches!(self.geometry, Geometry::Poly(_))
    }

    /// Whether this shape is a circle.
    pub fn is_circle(&self) -> bool {
        matches!(self.geometry, Geometry::Circle(_))
    }

    /// Borrow the line case, if this is a line.
    pub fn as_line(&self) -> Option<&Line> {
        match &self.geometry {
            Geometry::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Borrow the polyline case, if this is a polyline.
    pub fn as_poly(&self) -> Option<&Poly> {
        match &self.geometry {
            Geometry::Poly(poly) => Some(poly),
            _ => None,
        }
    }

    /// Borrow the circle case, if this is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match &self.geometry {
            Geometry::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// The scalar a measurement reads off this shape: segment length for
    /// lines, total length for polylines, diameter for circles.
    pub fn measured_length(&self) -> f64 {
        match &self.geometry {
            Geometry::Line(line) => line.length(),
            Geometry::Poly(poly) => poly.total_length(),
            Geometry::Circle(circle) => circle.diameter(),
        }
    }

    /// Whether a finalized shape meets its kind's minimum size. Shapes
    /// that fall short are discarded when their drawing ends.
    pub fn meets_minimum(&self) -> bool {
        match &self.geometry {
            Geometry::Line(line) => line.length() >= MIN_LINE_LENGTH,
            Geometry::Poly(poly) => poly.vertex_count() >= MIN_POLY_POINTS,
            Geometry::Circle(circle) => circle.radius >= MIN_CIRCLE_RADIUS,
        }
    }

    /// Apply a sparse patch.
    ///
    /// Presentation fields always land. A geometry patch tagged for a
    /// different kind is skipped and reported while the rest of the patch
    /// still applies.
    pub fn apply(&mut self, patch: ShapePatch) -> PadResult<()> {
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(is_unit) = patch.is_unit {
            self.is_unit = is_unit;
        }
        if let Some(show_details) = patch.show_details {
            self.show_details = show_details;
        }
        match (&mut self.geometry, patch.geometry) {
            (_, None) => {}
            (Geometry::Line(line), Some(GeometryPatch::Line(p))) => line.apply(p),
            (Geometry::Poly(poly), Some(GeometryPatch::Poly(p))) => poly.apply(p),
            (Geometry::Circle(circle), Some(GeometryPatch::Circle(p))) => circle.apply(p),
            (geometry, Some(mismatched)) => {
                return Err(PadError::PatchKindMismatch {
                    id: self.id,
                    shape: geometry.kind(),
                    patch: mismatched.kind(),
                });
            }
        }
        Ok(())
    }

    /// Value copy of this shape under a fresh id.
    ///
    /// The geometry owns all of its point data, so the copy shares nothing
    /// with the source. The unit flag does not carry over; at most one
    /// shape holds it.
    pub fn duplicate_with(&self, id: ShapeId) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.is_unit = false;
        copy
    }

    /// The origin translated into canvas space.
    pub fn canvas_origin(&self) -> Point {
        geometry::canvas_point(self.origin)
    }
}

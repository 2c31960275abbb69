//! Caliper core library
//!
//! Contains the shape model and drawing logic for the measuring pad:
//! shape variants and their validity rules, the action protocol and
//! reducer, the pointer-event state machine, and the measuring scale.
//! Rendering and panels live elsewhere and only read what this crate
//! exposes.

pub mod action;
pub mod color;
pub mod error;
pub mod geometry;
pub mod pad;
pub mod reducer;
pub mod shapes;
pub mod tools;
pub mod unit;

pub use action::{
    Action, Applied, CirclePatch, GeometryPatch, LinePatch, PolyPatch, ShapeAction, ShapePatch,
};
pub use color::{DRAW_PALETTE, Rgba, palette_color};
pub use error::{PadError, PadResult};
pub use pad::{Dimensions, DrawState, Pad, PointerEvent, PointerPhase};
pub use reducer::{ShapeMap, reduce};
pub use shapes::{
    Circle, Geometry, IdSource, Line, MIN_CIRCLE_RADIUS, MIN_LINE_LENGTH, MIN_POLY_POINTS, Poly,
    Shape, ShapeId, ShapeKind,
};
pub use tools::{CircleTool, DrawStep, DrawTool, LineTool, POLY_CLOSE_SLOP, PolyTool, tool_for};
pub use unit::{MIN_UNIT_LENGTH, UnitScale};

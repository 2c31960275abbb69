//! Actions the pad accepts, and the sparse patches they carry.

use crate::color::Rgba;
use crate::shapes::{Shape, ShapeId, ShapeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Sparse endpoint moves for a line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePatch {
    /// New start point, if it moves.
    pub start: Option<Point>,
    /// New end point, if it moves.
    pub end: Option<Point>,
}

/// Vertex edits for a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PolyPatch {
    /// Drag the trailing vertex to the point.
    MoveLast(Point),
    /// Pin the trailing vertex at the point and grow a new trailing
    /// vertex in the same place.
    AddVertex(Point),
    /// Remove the trailing vertex. Skipped when only one vertex remains.
    DropLast,
}

/// Radius resize for a circle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CirclePatch {
    /// New radius, if it changes.
    pub radius: Option<f64>,
}

/// A geometry edit tagged with the kind it applies to. Sending one to a
/// shape of a different kind is reported and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GeometryPatch {
    Line(LinePatch),
    Poly(PolyPatch),
    Circle(CirclePatch),
}

impl GeometryPatch {
    /// The kind this patch applies to.
    pub fn kind(&self) -> ShapeKind {
        match self {
            GeometryPatch::Line(_) => ShapeKind::Line,
            GeometryPatch::Poly(_) => ShapeKind::Poly,
            GeometryPatch::Circle(_) => ShapeKind::Circle,
        }
    }
}

/// Sparse update for an existing shape: any subset of the presentation
/// fields plus at most one geometry edit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapePatch {
    /// Restroke with this color.
    pub color: Option<Rgba>,
    /// Set or clear the measuring-unit flag.
    pub is_unit: Option<bool>,
    /// Expand or collapse the sidebar profile.
    pub show_details: Option<bool>,
    /// Edit the geometry.
    pub geometry: Option<GeometryPatch>,
}

impl ShapePatch {
    /// Patch carrying only a geometry edit.
    pub fn geometry(patch: GeometryPatch) -> Self {
        Self {
            geometry: Some(patch),
            ..Self::default()
        }
    }

    /// Patch carrying only a recolor.
    pub fn color(color: Rgba) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Patch setting or clearing the unit flag.
    pub fn unit_flag(is_unit: bool) -> Self {
        Self {
            is_unit: Some(is_unit),
            ..Self::default()
        }
    }

    /// Patch expanding or collapsing the sidebar profile.
    pub fn show_details(show: bool) -> Self {
        Self {
            show_details: Some(show),
            ..Self::default()
        }
    }
}

impl From<GeometryPatch> for ShapePatch {
    fn from(patch: GeometryPatch) -> Self {
        Self::geometry(patch)
    }
}

/// Intents that mutate the shape collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShapeAction {
    /// Insert a new shape keyed by its id. Ids are minted by the caller;
    /// uniqueness is upheld there, not re-checked here.
    Create(Shape),
    /// Patch the shape at `target`.
    Continue { target: ShapeId, patch: ShapePatch },
    /// Finalize the drawing at `target`, discarding the shape if it does
    /// not meet its kind's minimum size.
    End { target: ShapeId },
    /// Delete the shape at `target`.
    Remove { target: ShapeId },
}

/// Every intent the pad accepts through dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    /// Route to the shape reducer.
    Shapes(ShapeAction),
    /// Replace the active draw mode.
    SetDrawMode(ShapeKind),
}

impl Action {
    /// Create intent for a fully formed shape.
    pub fn create(shape: Shape) -> Self {
        Action::Shapes(ShapeAction::Create(shape))
    }

    /// Continue intent patching `target`.
    pub fn continue_shape(target: ShapeId, patch: impl Into<ShapePatch>) -> Self {
        Action::Shapes(ShapeAction::Continue {
            target,
            patch: patch.into(),
        })
    }

    /// End intent finalizing `target`.
    pub fn end_shape(target: ShapeId) -> Self {
        Action::Shapes(ShapeAction::End { target })
    }

    /// Remove intent deleting `target`.
    pub fn remove_shape(target: ShapeId) -> Self {
        Action::Shapes(ShapeAction::Remove { target })
    }

    /// Whether this action mutates the shape collection.
    pub fn targets_shapes(&self) -> bool {
        matches!(self, Action::Shapes(_))
    }

    /// Whether this action replaces the draw mode.
    pub fn targets_draw_mode(&self) -> bool {
        matches!(self, Action::SetDrawMode(_))
    }
}

/// Structured outcome of a successfully applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A shape was inserted.
    Created(ShapeId),
    /// A shape was patched.
    Updated(ShapeId),
    /// A finalized shape met its minimum size and was kept.
    Finished(ShapeId),
    /// A finalized shape fell short of its minimum size and was removed.
    Discarded(ShapeId),
    /// A shape was deleted.
    Removed(ShapeId),
    /// The draw mode changed.
    DrawModeSet(ShapeKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_predicates_are_exclusive() {
        let shape_action = Action::end_shape(ShapeId::from_u128(1));
        assert!(shape_action.targets_shapes());
        assert!(!shape_action.targets_draw_mode());

        let mode_action = Action::SetDrawMode(ShapeKind::Circle);
        assert!(mode_action.targets_draw_mode());
        assert!(!mode_action.targets_shapes());
    }

    #[test]
    fn test_geometry_patch_kind_tags() {
        assert_eq!(
            GeometryPatch::Line(LinePatch::default()).kind(),
            ShapeKind::Line
        );
        assert_eq!(GeometryPatch::Poly(PolyPatch::DropLast).kind(), ShapeKind::Poly);
        assert_eq!(
            GeometryPatch::Circle(CirclePatch::default()).kind(),
            ShapeKind::Circle
        );
    }

    #[test]
    fn test_patch_constructors_set_one_field() {
        let patch = ShapePatch::unit_flag(true);
        assert_eq!(patch.is_unit, Some(true));
        assert_eq!(patch.color, None);
        assert_eq!(patch.show_details, None);
        assert!(patch.geometry.is_none());

        let geom = ShapePatch::from(GeometryPatch::Poly(PolyPatch::DropLast));
        assert_eq!(geom.geometry, Some(GeometryPatch::Poly(PolyPatch::DropLast)));
        assert_eq!(geom.is_unit, None);
    }

    #[test]
    fn test_continue_constructor_wraps_geometry_patch() {
        let target = ShapeId::from_u128(9);
        let action = Action::continue_shape(
            target,
            GeometryPatch::Circle(CirclePatch { radius: Some(6.0) }),
        );
        match action {
            Action::Shapes(ShapeAction::Continue { target: t, patch }) => {
                assert_eq!(t, target);
                assert_eq!(
                    patch.geometry,
                    Some(GeometryPatch::Circle(CirclePatch { radius: Some(6.0) }))
                );
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
}

//! The measuring pad: draw-mode state machine and dispatch entry point.
//!
//! The pad owns the shape collection, the active draw mode, and the
//! one-flag interaction state. Pointer events come in through
//! [`Pad::handle_canvas_click`] and [`Pad::handle_mouse_move`]; every
//! mutation they imply is routed through [`crate::reducer::reduce`] as an
//! action, so the reducer stays the only writer.

use crate::action::{Action, Applied, ShapeAction, ShapePatch};
use crate::error::{PadError, PadResult};
use crate::geometry::{MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH};
use crate::reducer::{ShapeMap, reduce};
use crate::shapes::{IdSource, Shape, ShapeId, ShapeKind};
use crate::tools::{DrawStep, tool_for};
use crate::unit::{MIN_UNIT_LENGTH, UnitScale};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;

/// Phase of a raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

impl fmt::Display for PointerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerPhase::Down => f.write_str("down"),
            PointerPhase::Move => f.write_str("move"),
            PointerPhase::Up => f.write_str("up"),
        }
    }
}

/// Raw pointer input forwarded by the drawing surface, positioned in
/// absolute viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    /// The event's phase.
    pub fn phase(&self) -> PointerPhase {
        match self {
            PointerEvent::Down { .. } => PointerPhase::Down,
            PointerEvent::Move { .. } => PointerPhase::Move,
            PointerEvent::Up { .. } => PointerPhase::Up,
        }
    }

    /// The event's position.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}

/// Viewport layout owned by the pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Sidebar width in pixels.
    pub sidebar: f64,
    /// Full viewport width in pixels.
    pub width: f64,
    /// Full viewport height in pixels.
    pub height: f64,
}

impl Dimensions {
    /// Width left for the canvas once the sidebar is taken out.
    pub fn canvas_width(&self) -> f64 {
        (self.width - self.sidebar).max(0.0)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            sidebar: MIN_SIDEBAR_WIDTH,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Whether a drawing interaction is underway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawState {
    /// No shape in progress.
    #[default]
    Idle,
    /// A press landed and the shape it created is still being built.
    Drawing { shape: ShapeId },
}

/// The measuring pad.
#[derive(Debug, Clone)]
pub struct Pad {
    shapes: ShapeMap,
    draw_mode: ShapeKind,
    state: DrawState,
    dimensions: Dimensions,
    ids: IdSource,
    unit: UnitScale,
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

impl Pad {
    /// Create an empty pad in line mode.
    pub fn new() -> Self {
        Self {
            shapes: ShapeMap::new(),
            draw_mode: ShapeKind::Line,
            state: DrawState::Idle,
            dimensions: Dimensions::default(),
            ids: IdSource::Random,
            unit: UnitScale::new(),
        }
    }

    /// Pad minting sequential ids, for deterministic tests and replays.
    pub fn with_sequential_ids() -> Self {
        Self {
            ids: IdSource::Sequential(0),
            ..Self::new()
        }
    }

    /// Every shape on the pad.
    pub fn shapes(&self) -> &ShapeMap {
        &self.shapes
    }

    /// Borrow one shape.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// The active draw mode.
    pub fn draw_mode(&self) -> ShapeKind {
        self.draw_mode
    }

    /// Current viewport layout.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The raw interaction state.
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Id of the shape being drawn, if one is in progress.
    pub fn in_progress(&self) -> Option<ShapeId> {
        match self.state {
            DrawState::Drawing { shape } => Some(shape),
            DrawState::Idle => None,
        }
    }

    /// Whether a drawing interaction is underway.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawState::Drawing { .. })
    }

    /// The measuring scale.
    pub fn unit(&self) -> &UnitScale {
        &self.unit
    }

    /// Apply one action. This is the single mutation entry point: shape
    /// actions go through the reducer, and a draw-mode switch finalizes
    /// any shape in progress first so no drag target is left dangling.
    pub fn dispatch(&mut self, action: Action) -> PadResult<Applied> {
        match action {
            Action::Shapes(action) => self.reduce_shapes(action),
            Action::SetDrawMode(kind) => {
                // Finalization failures are already logged and must not
                // block the switch.
                let _ = self.finish_drawing();
                self.draw_mode = kind;
                Ok(Applied::DrawModeSet(kind))
            }
        }
    }

    /// Convenience for dispatching a draw-mode switch.
    pub fn set_draw_mode(&mut self, kind: ShapeKind) -> PadResult<Applied> {
        self.dispatch(Action::SetDrawMode(kind))
    }

    /// Entry point for press and release events on the canvas. A move
    /// event forwarded here is routed to [`Pad::handle_mouse_move`].
    pub fn handle_canvas_click(&mut self, event: PointerEvent) -> PadResult<Option<Applied>> {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Move { position } => self.handle_mouse_move(position),
        }
    }

    /// Entry point for pointer moves. Does nothing while idle; while
    /// drawing this is the per-event hot path, one lookup plus one patch.
    pub fn handle_mouse_move(&mut self, position: Point) -> PadResult<Option<Applied>> {
        let DrawState::Drawing { shape } = self.state else {
            return Ok(None);
        };
        let step = match self.shapes.get(&shape) {
            Some(target) => tool_for(self.draw_mode).drag(target, position),
            None => return self.missing_in_progress(shape),
        };
        self.apply_step(shape, step, PointerPhase::Move)
    }

    /// Finalize the shape in progress through the normal end path and go
    /// idle. No-op while idle.
    pub fn finish_drawing(&mut self) -> PadResult<Option<Applied>> {
        let Some(shape) = self.in_progress() else {
            return Ok(None);
        };
        self.state = DrawState::Idle;
        self.reduce_shapes(ShapeAction::End { target: shape }).map(Some)
    }

    /// Throw away the shape in progress and go idle, the teardown path
    /// for a surface dismissed mid-draw. No-op while idle.
    pub fn cancel_drawing(&mut self) -> PadResult<Option<Applied>> {
        let Some(shape) = self.in_progress() else {
            return Ok(None);
        };
        self.state = DrawState::Idle;
        self.reduce_shapes(ShapeAction::Remove { target: shape }).map(Some)
    }

    /// Refresh the viewport size from a window resize. The sidebar width
    /// is left alone.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.dimensions.width = width;
        self.dimensions.height = height;
    }

    /// Set the sidebar width, clamped to its layout range.
    pub fn set_sidebar_width(&mut self, width: f64) {
        self.dimensions.sidebar = width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);
    }

    /// Make `id` the measuring reference: its measured length becomes one
    /// unit. Clears the flag on the previous reference.
    pub fn set_unit_shape(&mut self, id: ShapeId) -> PadResult<()> {
        let length = match self.shapes.get(&id) {
            Some(shape) => shape.measured_length(),
            None => return Err(PadError::MissingShape(id)),
        };
        if length < MIN_UNIT_LENGTH {
            let err = PadError::DegenerateUnit(id);
            log::warn!("{err}");
            return Err(err);
        }
        if let Some(prev) = self.unit.shape() {
            if prev != id && self.shapes.contains_key(&prev) {
                self.reduce_shapes(ShapeAction::Continue {
                    target: prev,
                    patch: ShapePatch::unit_flag(false),
                })?;
            }
        }
        self.reduce_shapes(ShapeAction::Continue {
            target: id,
            patch: ShapePatch::unit_flag(true),
        })?;
        self.unit.set(id, length);
        Ok(())
    }

    /// Drop the measuring reference and report raw pixels again.
    pub fn clear_unit(&mut self) {
        if let Some(prev) = self.unit.shape() {
            if self.shapes.contains_key(&prev) {
                let _ = self.reduce_shapes(ShapeAction::Continue {
                    target: prev,
                    patch: ShapePatch::unit_flag(false),
                });
            }
        }
        self.unit.reset();
    }

    /// Measured length of a shape, converted by the current scale.
    pub fn measure(&self, id: ShapeId) -> PadResult<f64> {
        match self.shapes.get(&id) {
            Some(shape) => Ok(self.unit.measure(shape.measured_length())),
            None => Err(PadError::MissingShape(id)),
        }
    }

    fn pointer_down(&mut self, position: Point) -> PadResult<Option<Applied>> {
        match self.state {
            DrawState::Idle => self.begin_shape(position),
            DrawState::Drawing { shape } => {
                let step = match self.shapes.get(&shape) {
                    Some(target) => tool_for(self.draw_mode).press(target, position),
                    None => return self.missing_in_progress(shape),
                };
                self.apply_step(shape, step, PointerPhase::Down)
            }
        }
    }

    fn pointer_up(&mut self, position: Point) -> PadResult<Option<Applied>> {
        match self.state {
            // Stray release; the matching press landed outside the canvas.
            DrawState::Idle => Ok(None),
            DrawState::Drawing { shape } => {
                let step = match self.shapes.get(&shape) {
                    Some(target) => tool_for(self.draw_mode).release(target, position),
                    None => return self.missing_in_progress(shape),
                };
                self.apply_step(shape, step, PointerPhase::Up)
            }
        }
    }

    /// Mint an id, create the mode's shape through the reducer, and enter
    /// the drawing state holding its id.
    fn begin_shape(&mut self, position: Point) -> PadResult<Option<Applied>> {
        let id = self.ids.next_id();
        let shape = tool_for(self.draw_mode).begin(id, position);
        let applied = self.reduce_shapes(ShapeAction::Create(shape))?;
        self.state = DrawState::Drawing { shape: id };
        log::debug!("began {} {id} at {position:?}", self.draw_mode);
        Ok(Some(applied))
    }

    /// Carry out what the tool decided for one event.
    fn apply_step(
        &mut self,
        shape: ShapeId,
        step: DrawStep,
        phase: PointerPhase,
    ) -> PadResult<Option<Applied>> {
        match step {
            DrawStep::Ignore => Ok(None),
            DrawStep::Reject => {
                let err = PadError::UnexpectedEvent {
                    mode: self.draw_mode,
                    phase,
                };
                log::warn!("{err}");
                Err(err)
            }
            DrawStep::Continue(patch) => self
                .reduce_shapes(ShapeAction::Continue {
                    target: shape,
                    patch: patch.into(),
                })
                .map(Some),
            DrawStep::Finish(pre) => {
                self.state = DrawState::Idle;
                if let Some(patch) = pre {
                    self.reduce_shapes(ShapeAction::Continue {
                        target: shape,
                        patch: patch.into(),
                    })?;
                }
                self.reduce_shapes(ShapeAction::End { target: shape }).map(Some)
            }
        }
    }

    /// Feed one action through the reducer, swapping the collection in
    /// and out by value.
    fn reduce_shapes(&mut self, action: ShapeAction) -> PadResult<Applied> {
        let shapes = mem::take(&mut self.shapes);
        let (shapes, result) = reduce(shapes, action);
        self.shapes = shapes;
        match &result {
            Ok(applied) => self.note_applied(*applied),
            Err(err) => log::error!("shape action failed: {err}"),
        }
        result
    }

    /// Keep machine and unit state coherent with what the reducer did,
    /// regardless of whether the action came from a pointer event or an
    /// outside dispatch.
    fn note_applied(&mut self, applied: Applied) {
        match applied {
            Applied::Finished(id) => {
                if self.in_progress() == Some(id) {
                    self.state = DrawState::Idle;
                }
            }
            Applied::Discarded(id) | Applied::Removed(id) => {
                if self.in_progress() == Some(id) {
                    self.state = DrawState::Idle;
                }
                if self.unit.shape() == Some(id) {
                    self.unit.reset();
                }
            }
            _ => {}
        }
    }

    /// The shape in progress is gone from the collection. Only an
    /// invariant breach can get here; fall back to idle so the machine
    /// never wedges.
    fn missing_in_progress(&mut self, shape: ShapeId) -> PadResult<Option<Applied>> {
        self.state = DrawState::Idle;
        log::warn!("shape {shape} vanished mid-draw, pad returned to idle");
        Err(PadError::MissingShape(shape))
    }
}

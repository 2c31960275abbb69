//! Error types for reducer and pad operations.

use crate::pad::PointerPhase;
use crate::shapes::{ShapeId, ShapeKind};
use thiserror::Error;

/// Errors reported by the reducer and the pad state machine.
///
/// Every variant is recoverable: the shape collection and the machine are
/// left in a consistent state and the caller decides what to surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PadError {
    /// A geometry patch tagged for one kind reached a shape of another
    /// kind. The presentation fields of the same patch still apply.
    #[error("{patch} patch does not apply to {shape} shape {id}")]
    PatchKindMismatch {
        id: ShapeId,
        shape: ShapeKind,
        patch: ShapeKind,
    },

    /// A pointer phase with no transition for the current mode and state,
    /// such as a second press while a line drag is underway.
    #[error("pointer {phase} has no transition while drawing a {mode}")]
    UnexpectedEvent { mode: ShapeKind, phase: PointerPhase },

    /// An action or query named an id that is not in the collection.
    #[error("no shape with id {0}")]
    MissingShape(ShapeId),

    /// The named shape is too small to serve as the measuring unit.
    #[error("shape {0} is too small to define the unit")]
    DegenerateUnit(ShapeId),
}

/// Result type for pad operations.
pub type PadResult<T> = Result<T, PadError>;

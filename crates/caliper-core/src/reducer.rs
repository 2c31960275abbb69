//! The pure reducer owning every write to the shape collection.

use crate::action::{Applied, ShapeAction};
use crate::error::{PadError, PadResult};
use crate::shapes::{Shape, ShapeId};
use std::collections::HashMap;

/// Every shape on the pad, keyed by id. Iteration order carries no
/// meaning; displays that need an order sort on their own criteria.
pub type ShapeMap = HashMap<ShapeId, Shape>;

/// Apply one shape action, consuming the previous collection and handing
/// back the next one together with the structured outcome.
///
/// Taking the map by value means no caller can still observe the prior
/// collection once it has been reduced. A missing target leaves the
/// collection untouched; a kind-mismatched geometry patch is skipped while
/// its presentation fields still land (see [`Shape::apply`]).
pub fn reduce(mut shapes: ShapeMap, action: ShapeAction) -> (ShapeMap, PadResult<Applied>) {
    let result = match action {
        ShapeAction::Create(shape) => {
            let id = shape.id();
            shapes.insert(id, shape);
            Ok(Applied::Created(id))
        }
        ShapeAction::Continue { target, patch } => match shapes.get_mut(&target) {
            Some(shape) => shape.apply(patch).map(|()| Applied::Updated(target)),
            None => Err(PadError::MissingShape(target)),
        },
        ShapeAction::End { target } => match shapes.get(&target) {
            Some(shape) if shape.meets_minimum() => Ok(Applied::Finished(target)),
            Some(_) => {
                shapes.remove(&target);
                Ok(Applied::Discarded(target))
            }
            None => Err(PadError::MissingShape(target)),
        },
        ShapeAction::Remove { target } => match shapes.remove(&target) {
            Some(_) => Ok(Applied::Removed(target)),
            None => Err(PadError::MissingShape(target)),
        },
    };
    (shapes, result)
}

//! Measuring-scale state: which shape defines one unit, and conversions
//! against it.

use crate::shapes::ShapeId;
use serde::{Deserialize, Serialize};

/// Shortest pixel length accepted as a unit reference. Anything below
/// this would blow every converted measurement up to nonsense.
pub const MIN_UNIT_LENGTH: f64 = 1e-6;

/// The measuring scale: an optional reference shape and the pixel length
/// that counts as one unit.
///
/// With no reference set the scale is the identity and measurements come
/// back in raw pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitScale {
    unit_length_px: f64,
    shape: Option<ShapeId>,
}

impl Default for UnitScale {
    fn default() -> Self {
        Self {
            unit_length_px: 1.0,
            shape: None,
        }
    }
}

impl UnitScale {
    /// Fresh scale measuring raw pixels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the scale at a reference shape of the given pixel length.
    pub(crate) fn set(&mut self, shape: ShapeId, unit_length_px: f64) {
        self.unit_length_px = unit_length_px;
        self.shape = Some(shape);
    }

    /// Forget the reference and measure raw pixels again.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert a pixel length into units.
    pub fn measure(&self, px: f64) -> f64 {
        px / self.unit_length_px
    }

    /// The reference shape, if one is set.
    pub fn shape(&self) -> Option<ShapeId> {
        self.shape
    }

    /// Pixel length of one unit.
    pub fn unit_length_px(&self) -> f64 {
        self.unit_length_px
    }

    /// Whether a reference shape is set.
    pub fn is_calibrated(&self) -> bool {
        self.shape.is_some()
    }
}

//! Circle shape implementation.

use crate::action::CirclePatch;
use serde::{Deserialize, Serialize};

/// A measuring circle. Its center is the owning shape's origin; only the
/// radius lives here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Circle {
    /// Radius in pixels, never negative. Grows as the pointer drags away
    /// from the center.
    pub radius: f64,
}

impl Circle {
    /// Create a circle with zero radius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diameter in pixels, the scalar a circle measures with.
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Apply a radius resize.
    pub(crate) fn apply(&mut self, patch: CirclePatch) {
        if let Some(radius) = patch.radius {
            self.radius = radius.max(0.0);
        }
    }
}

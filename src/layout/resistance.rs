use glam::Vec2;

use crate::config::DEFAULT_RESISTANCE_FACTOR;
use crate::utils::math::{damp_towards_zero, manhattan_distance};

/// Maps the distance between the pointer and an item's anchor to a damping ratio.
///
/// Items under the finger get a ratio close to zero and follow the scroll
/// almost rigidly; items further away get larger ratios and lag behind,
/// which is what makes the grid look like it is hanging off springs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceModel {
    factor: f32,
}

impl Default for ResistanceModel {
    fn default() -> Self {
        Self::new(DEFAULT_RESISTANCE_FACTOR)
    }
}

impl ResistanceModel {
    pub fn new(factor: f32) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            DEFAULT_RESISTANCE_FACTOR
        };
        Self { factor }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn compute_resistance(&self, pointer: Vec2, anchor: Vec2) -> f32 {
        manhattan_distance(pointer, anchor) / self.factor
    }

    /// Portion of `delta` an item anchored at `anchor` moves by.
    pub fn displacement(&self, delta: f32, pointer: Vec2, anchor: Vec2) -> f32 {
        damp_towards_zero(delta, self.compute_resistance(pointer, anchor))
    }
}

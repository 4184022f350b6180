use glam::Vec2;

use crate::dynamics::DynamicsEngine;

use super::{ResistanceModel, ScrollState};

/// Turns scroll offset changes into per-item displacements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollDeltaPropagator;

impl ScrollDeltaPropagator {
    pub fn new() -> Self {
        Self
    }

    /// Records the vertical delta and pushes every simulated item by its
    /// resistance-damped share of it, leaving anchors where they are so the
    /// springs pull the items back. Never asks for a full relayout.
    pub fn on_scroll_position_change<D>(
        &self,
        engine: &mut D,
        scroll: &mut ScrollState,
        resistance: &ResistanceModel,
        new_origin: Vec2,
        previous_origin: Vec2,
    ) -> bool
    where
        D: DynamicsEngine + ?Sized,
    {
        let delta = new_origin.y - previous_origin.y;
        scroll.latest_delta = delta;
        let pointer = scroll.pointer;

        for id in engine.constraint_ids() {
            let Some(constraint) = engine.constraint(id) else {
                continue;
            };
            let displacement = resistance.displacement(delta, pointer, constraint.anchor);
            if engine.displace_item(id, Vec2::new(0.0, displacement)) {
                engine.refresh_constraint(id);
            }
        }

        false
    }
}

//! Dynamics engine seam: the trait the layout drives, and the bundled spring world.

pub mod integrator;
pub mod spring_world;

pub use integrator::SpringIntegrator;
pub use spring_world::{SpringBody, SpringWorld};

use glam::Vec2;

use crate::core::{AttachmentConstraint, ItemId, ItemLayout, Rect, SpringParams};

/// Constraint-based dynamics engine that owns simulated items and their springs.
///
/// The layout only orchestrates: it decides which items are attached, where
/// their anchors sit and how far scrolling displaces them. Everything that
/// moves an item over time happens behind this trait.
pub trait DynamicsEngine {
    /// Starts simulating `item`, pinned to `anchor` by a spring with `params`.
    /// Attaching an already simulated item replaces its constraint.
    fn attach_constraint(&mut self, item: ItemLayout, anchor: Vec2, params: SpringParams);

    /// Stops simulating `id`. Returns whether a constraint existed.
    fn detach_constraint(&mut self, id: ItemId) -> bool;

    /// Re-reads the item's current state into the simulation, waking it up.
    fn refresh_constraint(&mut self, id: ItemId);

    /// Moves the simulated item by `offset` without touching its anchor.
    /// Returns `false` when `id` is not simulated.
    fn displace_item(&mut self, id: ItemId, offset: Vec2) -> bool;

    fn constraint(&self, id: ItemId) -> Option<AttachmentConstraint>;

    /// Identifiers of every live constraint, in ascending order.
    fn constraint_ids(&self) -> Vec<ItemId>;

    fn query_item_state(&self, id: ItemId) -> Option<ItemLayout>;

    /// Current layouts of every simulated item overlapping `rect`.
    fn query_items_in_rect(&self, rect: Rect) -> Vec<ItemLayout>;

    /// Advances the simulation by `dt` seconds.
    fn step(&mut self, dt: f32);

    /// Whether any simulated item is still moving.
    fn is_running(&self) -> bool;

    /// Removes every constraint. Returns how many were removed.
    fn teardown_all(&mut self) -> usize;

    fn constraint_count(&self) -> usize {
        self.constraint_ids().len()
    }
}

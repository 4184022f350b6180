use std::collections::BTreeMap;

use glam::Vec2;

use crate::{
    config::{DEFAULT_SUBSTEPS, DEFAULT_TIME_STEP},
    core::{AttachmentConstraint, ItemId, ItemLayout, Rect, SpringParams},
    utils::logging::PassTimer,
};

use super::{DynamicsEngine, SpringIntegrator};

/// Longest frame the accumulator will try to catch up on.
const MAX_FRAME_TIME: f32 = 0.25;

/// A simulated item. Its position is kept as an offset from the anchor so the
/// integrator works on small numbers however far down the content it sits.
#[derive(Debug, Clone)]
pub struct SpringBody {
    pub id: ItemId,
    pub size: Vec2,
    pub offset: Vec2,
    pub velocity: Vec2,
    pub constraint: AttachmentConstraint,
    pub is_awake: bool,
}

impl SpringBody {
    pub fn new(layout: ItemLayout, constraint: AttachmentConstraint) -> Self {
        Self {
            id: layout.id,
            size: layout.frame.size,
            offset: layout.center() - constraint.anchor,
            velocity: Vec2::ZERO,
            constraint,
            is_awake: true,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.constraint.anchor + self.offset
    }

    /// Current frame in content space.
    pub fn layout(&self) -> ItemLayout {
        ItemLayout::new(self.id, Rect::from_center_size(self.center(), self.size))
    }

    /// Places the body at the spring's rest position and stops it.
    pub fn snap_to_rest(&mut self) {
        self.offset = self.constraint.rest_offset(self.offset);
        self.velocity = Vec2::ZERO;
        self.is_awake = false;
    }
}

/// Mass-spring world driving item layouts towards their anchors.
pub struct SpringWorld {
    bodies: BTreeMap<ItemId, SpringBody>,
    pub integrator: SpringIntegrator,
    pub time_step: f32,
    pub time_accumulated: f32,
}

impl Default for SpringWorld {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl SpringWorld {
    pub fn new(time_step: f32) -> Self {
        Self::with_substeps(time_step, DEFAULT_SUBSTEPS)
    }

    pub fn with_substeps(time_step: f32, substeps: u32) -> Self {
        let ts = if time_step <= 0.0 || !time_step.is_finite() {
            DEFAULT_TIME_STEP
        } else {
            time_step
        };

        Self {
            bodies: BTreeMap::new(),
            integrator: SpringIntegrator::new(ts, substeps),
            time_step: ts,
            time_accumulated: 0.0,
        }
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    pub fn body(&self, id: ItemId) -> Option<&SpringBody> {
        self.bodies.get(&id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl DynamicsEngine for SpringWorld {
    fn attach_constraint(&mut self, item: ItemLayout, anchor: Vec2, params: SpringParams) {
        let constraint = AttachmentConstraint::new(item.id, anchor, params);
        self.bodies.insert(item.id, SpringBody::new(item, constraint));
    }

    fn detach_constraint(&mut self, id: ItemId) -> bool {
        self.bodies.remove(&id).is_some()
    }

    fn refresh_constraint(&mut self, id: ItemId) {
        if let Some(body) = self.bodies.get_mut(&id) {
            body.is_awake = true;
        }
    }

    fn displace_item(&mut self, id: ItemId, offset: Vec2) -> bool {
        match self.bodies.get_mut(&id) {
            Some(body) => {
                body.offset += offset;
                true
            }
            None => false,
        }
    }

    fn constraint(&self, id: ItemId) -> Option<AttachmentConstraint> {
        self.bodies.get(&id).map(|body| body.constraint)
    }

    fn constraint_ids(&self) -> Vec<ItemId> {
        self.bodies.keys().copied().collect()
    }

    fn query_item_state(&self, id: ItemId) -> Option<ItemLayout> {
        self.bodies.get(&id).map(SpringBody::layout)
    }

    fn query_items_in_rect(&self, rect: Rect) -> Vec<ItemLayout> {
        self.bodies
            .values()
            .map(SpringBody::layout)
            .filter(|layout| layout.frame.intersects(&rect))
            .collect()
    }

    /// Advances the simulation using a fixed timestep accumulator.
    fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.time_accumulated += dt.min(MAX_FRAME_TIME);

        while self.time_accumulated >= self.time_step {
            self.time_accumulated -= self.time_step;
            let _timer = PassTimer::new("springs::integrate");
            self.integrator.step(&mut self.bodies);
        }
    }

    fn is_running(&self) -> bool {
        self.bodies.values().any(|body| body.is_awake)
    }

    fn teardown_all(&mut self) -> usize {
        let removed = self.bodies.len();
        self.bodies.clear();
        self.time_accumulated = 0.0;
        removed
    }

    fn constraint_count(&self) -> usize {
        self.bodies.len()
    }
}

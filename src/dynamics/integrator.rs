use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{DEFAULT_REST_DISTANCE, DEFAULT_REST_SPEED};
use crate::core::ItemId;

use super::spring_world::SpringBody;

/// Integrator responsible for stepping spring bodies forward in time.
#[derive(Debug, Clone)]
pub struct SpringIntegrator {
    pub dt: f32,
    pub substeps: u32,
    pub rest_distance: f32,
    pub rest_speed: f32,
    parallel: bool,
}

impl SpringIntegrator {
    pub fn new(dt: f32, substeps: u32) -> Self {
        let substep_dt = dt / substeps.max(1) as f32;
        Self {
            dt: substep_dt,
            substeps: substeps.max(1),
            rest_distance: DEFAULT_REST_DISTANCE,
            rest_speed: DEFAULT_REST_SPEED,
            parallel: false,
        }
    }

    /// Only takes effect when the crate is built with the `parallel` feature.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Semi-implicit Euler on the offset from the anchor: velocity first, then
    /// the offset with the new velocity. Offsets stay small wherever the item
    /// sits in the content.
    pub fn integrate(&self, body: &mut SpringBody, dt: f32) {
        if !body.is_awake {
            return;
        }

        let acceleration = body.constraint.acceleration(body.offset, body.velocity);
        body.velocity += acceleration * dt;
        body.offset += body.velocity * dt;
    }

    /// Puts a body to sleep once it has settled on its anchor.
    pub fn settle(&self, body: &mut SpringBody) {
        if !body.is_awake {
            return;
        }

        let stretch = body.constraint.stretch(body.offset).length();
        if stretch < self.rest_distance && body.velocity.length() < self.rest_speed {
            body.snap_to_rest();
        }
    }

    pub fn step(&self, bodies: &mut BTreeMap<ItemId, SpringBody>) {
        #[cfg(feature = "parallel")]
        if self.parallel {
            bodies.par_iter_mut().for_each(|(_, body)| self.step_body(body));
            return;
        }

        for body in bodies.values_mut() {
            self.step_body(body);
        }
    }

    fn step_body(&self, body: &mut SpringBody) {
        for _ in 0..self.substeps {
            self.integrate(body, self.dt);
        }
        self.settle(body);
    }
}

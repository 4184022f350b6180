use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_REST_LENGTH, DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_FREQUENCY,
    DEFAULT_TORQUE_FRICTION,
};
use crate::core::types::ItemId;

/// Spring parameters shared by every attachment constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Distance kept between the item and its anchor.
    pub length: f32,
    /// Damping ratio: 1.0 is critically damped, lower values overshoot.
    pub damping: f32,
    /// Oscillation frequency in Hz.
    pub frequency: f32,
    pub torque_friction: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_REST_LENGTH,
            damping: DEFAULT_SPRING_DAMPING,
            frequency: DEFAULT_SPRING_FREQUENCY,
            torque_friction: DEFAULT_TORQUE_FRICTION,
        }
    }
}

impl SpringParams {
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.length.is_finite() || self.length < 0.0 {
            self.length = defaults.length;
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            log::warn!("invalid spring damping {}, using {}", self.damping, defaults.damping);
            self.damping = defaults.damping;
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            log::warn!(
                "invalid spring frequency {}, using {}",
                self.frequency,
                defaults.frequency
            );
            self.frequency = defaults.frequency;
        }
        if !self.torque_friction.is_finite() || self.torque_friction < 0.0 {
            self.torque_friction = defaults.torque_friction;
        }
        self
    }

    pub fn angular_frequency(&self) -> f32 {
        std::f32::consts::TAU * self.frequency
    }
}

/// Spring pinning one simulated item to an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttachmentConstraint {
    pub item: ItemId,
    pub anchor: Vec2,
    pub params: SpringParams,
}

impl AttachmentConstraint {
    pub fn new(item: ItemId, anchor: Vec2, params: SpringParams) -> Self {
        Self {
            item,
            anchor,
            params,
        }
    }

    /// Acceleration the spring applies to a unit-mass body displaced by
    /// `offset` from the anchor and moving at `velocity`.
    pub fn acceleration(&self, offset: Vec2, velocity: Vec2) -> Vec2 {
        let omega = self.params.angular_frequency();
        -omega * omega * self.stretch(offset) - 2.0 * self.params.damping * omega * velocity
    }

    /// Part of `offset` beyond the rest length, along the same direction.
    pub fn stretch(&self, offset: Vec2) -> Vec2 {
        let distance = offset.length();
        if self.params.length > 0.0 && distance > 1e-6 {
            offset * ((distance - self.params.length) / distance)
        } else {
            offset
        }
    }

    /// Offset at which the spring is relaxed, keeping the direction of `offset`.
    pub fn rest_offset(&self, offset: Vec2) -> Vec2 {
        offset - self.stretch(offset)
    }
}

//! Configuration constants and tunables for the bounce layout.

use serde::{Deserialize, Serialize};

use crate::core::constraints::SpringParams;

/// Extra simulated space above and below the viewport.
pub const DEFAULT_WINDOW_MARGIN: f32 = 200.0;

/// Divisor turning a pointer/anchor Manhattan distance into a resistance ratio.
pub const DEFAULT_RESISTANCE_FACTOR: f32 = 1500.0;

/// Damping ratio of every attachment constraint.
pub const DEFAULT_SPRING_DAMPING: f32 = 0.5;

/// Oscillation frequency (Hz) of every attachment constraint.
pub const DEFAULT_SPRING_FREQUENCY: f32 = 0.8;

/// Rotational friction of every attachment constraint. Items never rotate.
pub const DEFAULT_TORQUE_FRICTION: f32 = 0.0;

/// Rest length of every attachment constraint: items are pinned to their anchor.
pub const DEFAULT_REST_LENGTH: f32 = 0.0;

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Integrator substeps per fixed step.
pub const DEFAULT_SUBSTEPS: u32 = 2;

/// Offset (in points) below which a body may come to rest.
pub const DEFAULT_REST_DISTANCE: f32 = 0.05;

/// Speed (in points/second) below which a body may come to rest.
pub const DEFAULT_REST_SPEED: f32 = 0.5;

/// Frame budget used when warning about slow layout passes (in milliseconds).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 16.0;

/// Tunables of a [`crate::BounceLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub window_margin: f32,
    pub resistance_factor: f32,
    pub spring: SpringParams,
    pub time_step: f32,
    pub substeps: u32,
    pub frame_budget_ms: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            window_margin: DEFAULT_WINDOW_MARGIN,
            resistance_factor: DEFAULT_RESISTANCE_FACTOR,
            spring: SpringParams::default(),
            time_step: DEFAULT_TIME_STEP,
            substeps: DEFAULT_SUBSTEPS,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}

impl LayoutConfig {
    /// Replaces values that would break the simulation with their defaults.
    pub fn sanitized(mut self) -> Self {
        if !self.window_margin.is_finite() || self.window_margin < 0.0 {
            log::warn!(
                "invalid window margin {}, using {}",
                self.window_margin,
                DEFAULT_WINDOW_MARGIN
            );
            self.window_margin = DEFAULT_WINDOW_MARGIN;
        }
        if !self.resistance_factor.is_finite() || self.resistance_factor <= 0.0 {
            log::warn!(
                "invalid resistance factor {}, using {}",
                self.resistance_factor,
                DEFAULT_RESISTANCE_FACTOR
            );
            self.resistance_factor = DEFAULT_RESISTANCE_FACTOR;
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            log::warn!(
                "invalid time step {}, using {}",
                self.time_step,
                DEFAULT_TIME_STEP
            );
            self.time_step = DEFAULT_TIME_STEP;
        }
        self.substeps = self.substeps.max(1);
        if !self.frame_budget_ms.is_finite() || self.frame_budget_ms <= 0.0 {
            self.frame_budget_ms = DEFAULT_FRAME_BUDGET_MS;
        }
        self.spring = self.spring.sanitized();
        self
    }
}

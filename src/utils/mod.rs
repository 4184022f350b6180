//! Utility helpers: math on layout points and scoped logging timers.

pub mod logging;
pub mod math;

pub use math::*;

//! Bounce Layout – spring-driven grid layout for Rust.
//!
//! This crate lays a scrollable grid of items out with a flow layout and then
//! hangs every item near the viewport off a damped spring. Scrolling pushes
//! the items by an amount that depends on how far they are from the finger,
//! and the springs pull them back, so the grid wobbles instead of moving as a
//! rigid sheet.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod grid;
pub mod layout;
pub mod utils;

pub use glam::Vec2;

pub use config::LayoutConfig;
pub use crate::core::{
    constraints::{AttachmentConstraint, SpringParams},
    types::{ItemId, ItemLayout, Rect, Viewport},
};
pub use dynamics::{DynamicsEngine, SpringBody, SpringIntegrator, SpringWorld};
pub use grid::{BaseGridLayout, EdgeInsets, FlowGridLayout};
pub use layout::{
    BounceLayout, ConstraintLifecycleManager, ReconcileStats, ResistanceModel,
    ScrollDeltaPropagator, ScrollState, SimulationWindowTracker, TrackedSet,
};

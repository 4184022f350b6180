//! The bounce layout: a flow grid whose items hang off springs.

pub mod lifecycle;
pub mod propagator;
pub mod resistance;
pub mod scroll;
pub mod window;

pub use lifecycle::{ConstraintLifecycleManager, ReconcileStats};
pub use propagator::ScrollDeltaPropagator;
pub use resistance::ResistanceModel;
pub use scroll::ScrollState;
pub use window::{SimulationWindowTracker, TrackedSet};

use glam::Vec2;

use crate::{
    config::LayoutConfig,
    core::{ItemId, ItemLayout, Rect, Viewport},
    dynamics::{DynamicsEngine, SpringWorld},
    grid::BaseGridLayout,
    utils::logging::PassTimer,
};

/// Layout engine giving grid cells a spring-like response to scrolling.
///
/// Drive it once per frame from the rendering thread:
/// 1. forward scroll offset changes to [`BounceLayout::on_scroll_position_change`],
/// 2. call [`BounceLayout::step`] with the frame time,
/// 3. call [`BounceLayout::prepare_frame`],
/// 4. read positions with [`BounceLayout::items_in_rect`] or [`BounceLayout::item_at`].
pub struct BounceLayout<B: BaseGridLayout, D: DynamicsEngine = SpringWorld> {
    base: B,
    dynamics: D,
    window: SimulationWindowTracker,
    lifecycle: ConstraintLifecycleManager,
    propagator: ScrollDeltaPropagator,
    resistance: ResistanceModel,
    scroll: ScrollState,
    viewport: Option<Viewport>,
    config: LayoutConfig,
    last_stats: ReconcileStats,
}

impl<B: BaseGridLayout> BounceLayout<B, SpringWorld> {
    pub fn new(base: B) -> Self {
        Self::with_config(base, LayoutConfig::default())
    }

    pub fn with_config(base: B, config: LayoutConfig) -> Self {
        let config = config.sanitized();
        let dynamics = SpringWorld::with_substeps(config.time_step, config.substeps);
        Self::with_dynamics(base, dynamics, config)
    }
}

impl<B: BaseGridLayout, D: DynamicsEngine> BounceLayout<B, D> {
    /// Builds a layout on top of a caller-provided dynamics engine.
    pub fn with_dynamics(base: B, dynamics: D, config: LayoutConfig) -> Self {
        let config = config.sanitized();
        Self {
            base,
            dynamics,
            window: SimulationWindowTracker::new(config.window_margin),
            lifecycle: ConstraintLifecycleManager::new(config.spring),
            propagator: ScrollDeltaPropagator::new(),
            resistance: ResistanceModel::new(config.resistance_factor),
            scroll: ScrollState::default(),
            viewport: None,
            config,
            last_stats: ReconcileStats::default(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    pub fn dynamics(&self) -> &D {
        &self.dynamics
    }

    pub fn dynamics_mut(&mut self) -> &mut D {
        &mut self.dynamics
    }

    pub fn tracked(&self) -> &TrackedSet {
        self.window.tracked()
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn last_stats(&self) -> ReconcileStats {
        self.last_stats
    }

    pub fn attach_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Constraints stay attached until the next pass with a viewport, or teardown.
    pub fn detach_viewport(&mut self) -> Option<Viewport> {
        self.viewport.take()
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Records the touch location (content space). `Vec2::ZERO` means no touch.
    pub fn set_pointer_location(&mut self, pointer: Vec2) {
        self.scroll.pointer = pointer;
    }

    pub fn end_touch(&mut self) {
        self.scroll.pointer = Vec2::ZERO;
    }

    pub fn simulation_window(&self) -> Rect {
        self.window.compute_window(self.viewport.as_ref())
    }

    pub fn content_size(&self) -> Vec2 {
        self.base.content_size()
    }

    /// Reconciles the simulated items with the current simulation window.
    /// Must run once before every render.
    pub fn prepare_frame(&mut self) -> ReconcileStats {
        let budget_ms = self.config.frame_budget_ms;
        let _timer = PassTimer::with_budget("layout::prepare_frame", budget_ms);

        let Some(viewport) = self.viewport else {
            self.last_stats = ReconcileStats::default();
            return self.last_stats;
        };
        self.base.prepare(&viewport);

        let window = self.window.compute_window(Some(&viewport));
        if window.is_empty() {
            self.last_stats = ReconcileStats::default();
            return self.last_stats;
        }

        let candidates = self.base.layout_items_in_rect(window);
        let stats = {
            let _timer = PassTimer::new("layout::reconcile");
            self.lifecycle.reconcile(
                &mut self.dynamics,
                self.window.tracked_mut(),
                &candidates,
                &self.scroll,
                &self.resistance,
            )
        };

        if !stats.is_noop() || stats.skipped > 0 {
            log::trace!(
                "reconciled window {:?}: +{} -{} (skipped {}), tracking {}",
                window,
                stats.admitted,
                stats.evicted,
                stats.skipped,
                self.window.tracked().len()
            );
        }

        self.last_stats = stats;
        stats
    }

    /// Current, possibly mid-bounce, layouts of the items overlapping `rect`.
    pub fn items_in_rect(&self, rect: Rect) -> Vec<ItemLayout> {
        self.dynamics.query_items_in_rect(rect)
    }

    /// Current simulated layout of one item, absent when it is not tracked.
    pub fn item_at(&self, id: ItemId) -> Option<ItemLayout> {
        if !self.window.tracked().contains(id) {
            return None;
        }
        self.dynamics.query_item_state(id)
    }

    /// Feeds a scroll offset change into the springs. Always returns `false`:
    /// scrolling alone never requires a full relayout.
    pub fn on_scroll_position_change(&mut self, new_origin: Vec2, previous_origin: Vec2) -> bool {
        let invalidate = self.propagator.on_scroll_position_change(
            &mut self.dynamics,
            &mut self.scroll,
            &self.resistance,
            new_origin,
            previous_origin,
        );
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.origin = new_origin;
        }
        invalidate
    }

    /// Advances the spring simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.dynamics.step(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.dynamics.is_running()
    }

    /// Detaches every constraint and forgets all tracked items and input.
    /// Returns the number of constraints removed.
    pub fn teardown(&mut self) -> usize {
        let removed = self.dynamics.teardown_all();
        self.window.tracked_mut().clear();
        self.scroll.reset();
        self.last_stats = ReconcileStats::default();
        if removed > 0 {
            log::debug!("teardown released {removed} constraints");
        }
        removed
    }
}

impl<B: BaseGridLayout, D: DynamicsEngine> Drop for BounceLayout<B, D> {
    fn drop(&mut self) {
        self.teardown();
    }
}

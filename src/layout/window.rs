use std::collections::HashSet;

use crate::config::DEFAULT_WINDOW_MARGIN;
use crate::core::{ItemId, Rect, Viewport};

/// Identifiers of the items that currently hold a live constraint.
///
/// Only the layout module writes to it; everything else gets read access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedSet {
    ids: HashSet<ItemId>,
}

impl TrackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Tracked identifiers in ascending order.
    pub fn sorted(&self) -> Vec<ItemId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub(crate) fn insert(&mut self, id: ItemId) -> bool {
        self.ids.insert(id)
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> bool {
        self.ids.remove(&id)
    }

    pub(crate) fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&ItemId) -> bool,
    {
        self.ids.retain(keep);
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Decides which region of the content is kept under simulation and owns the
/// set of items attached to it.
#[derive(Debug, Clone)]
pub struct SimulationWindowTracker {
    margin: f32,
    tracked: TrackedSet,
}

impl Default for SimulationWindowTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MARGIN)
    }
}

impl SimulationWindowTracker {
    pub fn new(margin: f32) -> Self {
        Self {
            margin: margin.max(0.0),
            tracked: TrackedSet::new(),
        }
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// The viewport's bounds grown by the margin on the top and bottom edges.
    /// Empty when the layout is not attached to a viewport.
    pub fn compute_window(&self, viewport: Option<&Viewport>) -> Rect {
        match viewport {
            Some(viewport) => viewport.bounds().inset_by(0.0, -self.margin),
            None => Rect::ZERO,
        }
    }

    pub fn tracked(&self) -> &TrackedSet {
        &self.tracked
    }

    pub(crate) fn tracked_mut(&mut self) -> &mut TrackedSet {
        &mut self.tracked
    }
}

use std::collections::HashSet;

use crate::core::{ItemId, ItemLayout, SpringParams};
use crate::dynamics::DynamicsEngine;

use super::{ResistanceModel, ScrollState, TrackedSet};

/// What one reconciliation pass changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileStats {
    pub evicted: usize,
    pub admitted: usize,
    /// Candidates dropped because the base layout gave them unusable geometry.
    pub skipped: usize,
}

impl ReconcileStats {
    pub fn is_noop(&self) -> bool {
        self.evicted == 0 && self.admitted == 0
    }
}

/// Attaches and detaches springs so that exactly the items inside the
/// simulation window are simulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintLifecycleManager {
    params: SpringParams,
}

impl ConstraintLifecycleManager {
    pub fn new(params: SpringParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Diffs `candidates` against the tracked set: constraints of items that
    /// left are removed first, then items that entered get a new constraint.
    pub fn reconcile<D>(
        &self,
        engine: &mut D,
        tracked: &mut TrackedSet,
        candidates: &[ItemLayout],
        scroll: &ScrollState,
        resistance: &ResistanceModel,
    ) -> ReconcileStats
    where
        D: DynamicsEngine + ?Sized,
    {
        let candidate_ids: HashSet<ItemId> = candidates.iter().map(|item| item.id).collect();

        let mut stats = ReconcileStats {
            evicted: self.evict(engine, tracked, &candidate_ids),
            ..ReconcileStats::default()
        };

        for item in candidates {
            if tracked.contains(item.id) {
                continue;
            }
            if !item.is_valid() {
                log::debug!("skipping {:?}: unusable frame {:?}", item.id, item.frame);
                stats.skipped += 1;
                continue;
            }
            self.admit(engine, tracked, *item, scroll, resistance);
            stats.admitted += 1;
        }

        stats
    }

    fn evict<D>(&self, engine: &mut D, tracked: &mut TrackedSet, keep: &HashSet<ItemId>) -> usize
    where
        D: DynamicsEngine + ?Sized,
    {
        let mut evicted = 0;
        for id in engine.constraint_ids() {
            if keep.contains(&id) {
                continue;
            }
            engine.detach_constraint(id);
            tracked.remove(id);
            evicted += 1;
        }
        // Anything still tracked without a constraint would break the
        // tracked == attached invariant.
        tracked.retain(|id| keep.contains(id) && engine.constraint(*id).is_some());
        evicted
    }

    fn admit<D>(
        &self,
        engine: &mut D,
        tracked: &mut TrackedSet,
        mut item: ItemLayout,
        scroll: &ScrollState,
        resistance: &ResistanceModel,
    ) where
        D: DynamicsEngine + ?Sized,
    {
        let anchor = item.center();
        if scroll.has_active_pointer() {
            let mut center = anchor;
            center.y += resistance.displacement(scroll.latest_delta, scroll.pointer, anchor);
            item.set_center(center);
        }

        engine.attach_constraint(item, anchor, self.params);
        tracked.insert(item.id);
    }
}

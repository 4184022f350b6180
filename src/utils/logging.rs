//! Tracing helpers for layout and simulation passes.

use log::{log_enabled, Level};
use std::time::{Duration, Instant};

/// Times one pass: traces its start and end, and warns on drop when the
/// pass overran its frame budget.
pub struct PassTimer {
    label: &'static str,
    budget_ms: Option<f32>,
    start: Instant,
}

impl PassTimer {
    pub fn new(label: &'static str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("{label}: start");
        }
        Self {
            label,
            budget_ms: None,
            start: Instant::now(),
        }
    }

    /// Same as [`PassTimer::new`], plus a warning when the pass takes longer
    /// than `budget_ms` milliseconds.
    pub fn with_budget(label: &'static str, budget_ms: f32) -> Self {
        let mut timer = Self::new(label);
        timer.budget_ms = Some(budget_ms);
        timer
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PassTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if log_enabled!(Level::Trace) {
            log::trace!("{}: done in {} µs", self.label, elapsed.as_micros());
        }
        if let Some(overrun) = self.budget_ms.and_then(|budget| budget_overrun(elapsed, budget)) {
            log::warn!("{} exceeded its frame budget by {overrun:.2} ms", self.label);
        }
    }
}

/// Milliseconds by which `elapsed` exceeds `budget_ms`, if it does.
pub fn budget_overrun(elapsed: Duration, budget_ms: f32) -> Option<f32> {
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    (elapsed_ms > budget_ms).then(|| elapsed_ms - budget_ms)
}

use glam::Vec2;

/// Input observed between layout passes: the last scroll delta and the last
/// known pointer location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Vertical change of the scroll offset reported by the latest scroll event.
    pub latest_delta: f32,
    /// Last known touch location in content space, `Vec2::ZERO` when no touch is active.
    pub pointer: Vec2,
}

impl ScrollState {
    pub fn has_active_pointer(&self) -> bool {
        self.pointer != Vec2::ZERO
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

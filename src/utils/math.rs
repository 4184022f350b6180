//! Additional math helpers layered on top of `glam`.

use glam::Vec2;

/// Sum of the absolute per-axis differences between two points.
pub fn manhattan_distance(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Scales `delta` by `resistance` without ever exceeding `delta` in magnitude
/// or flipping its sign, as long as `resistance` is non-negative.
pub fn damp_towards_zero(delta: f32, resistance: f32) -> f32 {
    let scaled = delta * resistance;
    if delta > 0.0 {
        delta.min(scaled)
    } else {
        delta.max(scaled)
    }
}

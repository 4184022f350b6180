//! Base grid measurement: the raw, unanimated frames the bounce layout starts from.

pub mod flow;

pub use flow::{EdgeInsets, FlowGridLayout};

use glam::Vec2;

use crate::core::{ItemId, ItemLayout, Rect, Viewport};

/// Measures items and wraps them into lines. Positions are at rest; the
/// bounce layout adds the spring motion on top.
pub trait BaseGridLayout {
    /// Called at the start of every layout pass with the attached viewport.
    fn prepare(&mut self, _viewport: &Viewport) {}

    /// Raw frames of every item overlapping `rect`.
    fn layout_items_in_rect(&self, rect: Rect) -> Vec<ItemLayout>;

    fn layout_item(&self, id: ItemId) -> Option<ItemLayout>;

    /// Total size of the laid out content.
    fn content_size(&self) -> Vec2;
}

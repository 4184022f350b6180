//! Core value types shared by the layout, the grid and the dynamics engine.

pub mod constraints;
pub mod types;

pub use constraints::{AttachmentConstraint, SpringParams};
pub use types::{ItemId, ItemLayout, Rect, Viewport};

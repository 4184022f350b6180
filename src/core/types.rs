use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable identifier of a grid cell: its section and position within the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ItemId {
    pub section: usize,
    pub item: usize,
}

impl ItemId {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Identifier of an item in the first (and often only) section.
    pub fn from_index(item: usize) -> Self {
        Self::new(0, item)
    }
}

/// Axis-aligned rectangle with a top-left origin, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.origin
    }

    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// A rectangle with no area covers nothing, not even its origin.
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top and
    /// bottom. Negative insets grow it.
    pub fn inset_by(&self, dx: f32, dy: f32) -> Self {
        Self {
            origin: self.origin + Vec2::new(dx, dy),
            size: self.size - Vec2::new(2.0 * dx, 2.0 * dy),
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a_min = self.min();
        let a_max = self.max();
        let b_min = other.min();
        let b_max = other.max();
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

/// Placement of one item: its identifier and frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemLayout {
    pub id: ItemId,
    pub frame: Rect,
}

impl ItemLayout {
    pub fn new(id: ItemId, frame: Rect) -> Self {
        Self { id, frame }
    }

    pub fn center(&self) -> Vec2 {
        self.frame.center()
    }

    /// Moves the frame so that it is centred on `center`, keeping its size.
    pub fn set_center(&mut self, center: Vec2) {
        self.frame = Rect::from_center_size(center, self.frame.size);
    }

    /// Whether the base layout produced usable geometry for this item.
    pub fn is_valid(&self) -> bool {
        self.frame.is_finite() && self.frame.size.x >= 0.0 && self.frame.size.y >= 0.0
    }
}

/// Visible surface the layout is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Current scroll offset (the visible bounds' origin in content space).
    pub origin: Vec2,
    pub size: Vec2,
}

impl Viewport {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            origin: self.origin,
            size: self.size,
        }
    }
}

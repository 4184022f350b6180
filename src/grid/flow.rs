use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{ItemId, ItemLayout, Rect, Viewport};

use super::BaseGridLayout;

/// Padding around the items of a section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// Vertically scrolling flow grid of equally sized items.
///
/// Items fill lines left to right; a line holds as many items as fit the
/// container width with at least `interitem_spacing` between them, and any
/// leftover width is spread between the items of the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGridLayout {
    pub sections: Vec<usize>,
    pub item_size: Vec2,
    pub line_spacing: f32,
    pub interitem_spacing: f32,
    pub section_inset: EdgeInsets,
    pub container_width: f32,
}

impl FlowGridLayout {
    pub fn new(item_count: usize, item_size: Vec2) -> Self {
        Self {
            sections: vec![item_count],
            item_size,
            line_spacing: 10.0,
            interitem_spacing: 10.0,
            section_inset: EdgeInsets::default(),
            container_width: 0.0,
        }
    }

    pub fn with_sections(mut self, sections: Vec<usize>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_spacing(mut self, line_spacing: f32, interitem_spacing: f32) -> Self {
        self.line_spacing = line_spacing.max(0.0);
        self.interitem_spacing = interitem_spacing.max(0.0);
        self
    }

    pub fn with_section_inset(mut self, inset: EdgeInsets) -> Self {
        self.section_inset = inset;
        self
    }

    pub fn with_container_width(mut self, width: f32) -> Self {
        self.container_width = width;
        self
    }

    fn available_width(&self) -> f32 {
        (self.container_width - self.section_inset.left - self.section_inset.right).max(0.0)
    }

    /// Number of items on one line. Always at least one.
    pub fn columns(&self) -> usize {
        let item_width = self.item_size.x;
        if item_width <= 0.0 {
            return 1;
        }
        let fit = ((self.available_width() + self.interitem_spacing)
            / (item_width + self.interitem_spacing))
            .floor();
        (fit as usize).max(1)
    }

    fn column_step(&self, columns: usize) -> f32 {
        if columns <= 1 {
            return 0.0;
        }
        let leftover = self.available_width() - columns as f32 * self.item_size.x;
        let spacing = (leftover / (columns - 1) as f32).max(self.interitem_spacing);
        self.item_size.x + spacing
    }

    fn row_step(&self) -> f32 {
        self.item_size.y + self.line_spacing
    }

    fn rows_in_section(&self, count: usize, columns: usize) -> usize {
        count.div_ceil(columns)
    }

    fn section_height(&self, count: usize, columns: usize) -> f32 {
        let rows = self.rows_in_section(count, columns);
        let items = if rows == 0 {
            0.0
        } else {
            rows as f32 * self.item_size.y + (rows - 1) as f32 * self.line_spacing
        };
        self.section_inset.top + items + self.section_inset.bottom
    }

    fn frame_at(&self, section_top: f32, index: usize, columns: usize) -> Rect {
        let row = index / columns;
        let column = index % columns;
        Rect {
            origin: Vec2::new(
                self.section_inset.left + column as f32 * self.column_step(columns),
                section_top + self.section_inset.top + row as f32 * self.row_step(),
            ),
            size: self.item_size,
        }
    }
}

impl BaseGridLayout for FlowGridLayout {
    fn prepare(&mut self, viewport: &Viewport) {
        self.container_width = viewport.size.x;
    }

    fn layout_items_in_rect(&self, rect: Rect) -> Vec<ItemLayout> {
        let mut items = Vec::new();
        if rect.is_empty() {
            return items;
        }

        let columns = self.columns();
        let row_step = self.row_step();
        let mut section_top = 0.0;

        for (section, &count) in self.sections.iter().enumerate() {
            let height = self.section_height(count, columns);
            let section_bottom = section_top + height;
            if count == 0 || section_bottom <= rect.min().y || section_top >= rect.max().y {
                section_top = section_bottom;
                continue;
            }

            let rows = self.rows_in_section(count, columns);
            let content_top = section_top + self.section_inset.top;
            let first_row = if row_step > 0.0 {
                (((rect.min().y - content_top - self.item_size.y) / row_step).floor().max(0.0))
                    as usize
            } else {
                0
            };

            for row in first_row..rows {
                let row_top = content_top + row as f32 * row_step;
                if row_top >= rect.max().y {
                    break;
                }
                let start = row * columns;
                let end = (start + columns).min(count);
                for index in start..end {
                    let frame = self.frame_at(section_top, index, columns);
                    if frame.intersects(&rect) {
                        items.push(ItemLayout::new(ItemId::new(section, index), frame));
                    }
                }
            }

            section_top = section_bottom;
        }

        items
    }

    fn layout_item(&self, id: ItemId) -> Option<ItemLayout> {
        let count = *self.sections.get(id.section)?;
        if id.item >= count {
            return None;
        }
        let columns = self.columns();
        let section_top: f32 = self.sections[..id.section]
            .iter()
            .map(|&c| self.section_height(c, columns))
            .sum();
        Some(ItemLayout::new(id, self.frame_at(section_top, id.item, columns)))
    }

    fn content_size(&self) -> Vec2 {
        let columns = self.columns();
        let height = self
            .sections
            .iter()
            .map(|&count| self.section_height(count, columns))
            .sum();
        Vec2::new(self.container_width, height)
    }
}

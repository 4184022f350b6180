#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use bounce_layout::*;

/// Calls observed by a [`RecordingEngine`].
#[derive(Debug, Default)]
pub struct CallLog {
    pub attached: Vec<ItemId>,
    pub detached: Vec<ItemId>,
    pub refreshed: Vec<ItemId>,
    pub teardowns: usize,
}

/// Spring world that records every lifecycle call made on it.
pub struct RecordingEngine {
    pub world: SpringWorld,
    pub log: Rc<RefCell<CallLog>>,
}

impl RecordingEngine {
    pub fn new() -> (Self, Rc<RefCell<CallLog>>) {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let engine = Self {
            world: SpringWorld::default(),
            log: Rc::clone(&log),
        };
        (engine, log)
    }
}

impl DynamicsEngine for RecordingEngine {
    fn attach_constraint(&mut self, item: ItemLayout, anchor: Vec2, params: SpringParams) {
        self.log.borrow_mut().attached.push(item.id);
        self.world.attach_constraint(item, anchor, params);
    }

    fn detach_constraint(&mut self, id: ItemId) -> bool {
        self.log.borrow_mut().detached.push(id);
        self.world.detach_constraint(id)
    }

    fn refresh_constraint(&mut self, id: ItemId) {
        self.log.borrow_mut().refreshed.push(id);
        self.world.refresh_constraint(id);
    }

    fn displace_item(&mut self, id: ItemId, offset: Vec2) -> bool {
        self.world.displace_item(id, offset)
    }

    fn constraint(&self, id: ItemId) -> Option<AttachmentConstraint> {
        self.world.constraint(id)
    }

    fn constraint_ids(&self) -> Vec<ItemId> {
        self.world.constraint_ids()
    }

    fn query_item_state(&self, id: ItemId) -> Option<ItemLayout> {
        self.world.query_item_state(id)
    }

    fn query_items_in_rect(&self, rect: Rect) -> Vec<ItemLayout> {
        self.world.query_items_in_rect(rect)
    }

    fn step(&mut self, dt: f32) {
        self.world.step(dt);
    }

    fn is_running(&self) -> bool {
        self.world.is_running()
    }

    fn teardown_all(&mut self) -> usize {
        self.log.borrow_mut().teardowns += 1;
        self.world.teardown_all()
    }
}

/// 60 items of 100x100 with 10 point spacing: three columns in a 320 wide viewport.
pub fn grid() -> FlowGridLayout {
    FlowGridLayout::new(60, Vec2::new(100.0, 100.0)).with_spacing(10.0, 10.0)
}

pub fn phone_viewport() -> Viewport {
    Viewport::new(Vec2::ZERO, Vec2::new(320.0, 480.0))
}

pub fn item(index: usize, y: f32) -> ItemLayout {
    ItemLayout::new(ItemId::from_index(index), Rect::new(0.0, y, 100.0, 100.0))
}

pub fn ids(items: &[ItemLayout]) -> Vec<usize> {
    let mut ids: Vec<_> = items.iter().map(|item| item.id.item).collect();
    ids.sort_unstable();
    ids
}

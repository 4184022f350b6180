mod common;

use approx::assert_relative_eq;
use bounce_layout::*;
use common::{grid, ids, phone_viewport, RecordingEngine};

const DT: f32 = 1.0 / 60.0;

fn layout() -> BounceLayout<FlowGridLayout> {
    let mut layout = BounceLayout::new(grid());
    layout.attach_viewport(phone_viewport());
    layout
}

#[test]
fn prepare_without_viewport_is_a_noop() {
    let mut layout = BounceLayout::new(grid());
    let stats = layout.prepare_frame();
    assert!(stats.is_noop());
    assert!(layout.tracked().is_empty());
    assert_eq!(layout.simulation_window(), Rect::ZERO);
}

#[test]
fn prepare_tracks_items_in_the_simulation_window() {
    let mut layout = layout();
    let stats = layout.prepare_frame();

    // Window (0, -200, 320, 880) covers lines 0..=6.
    assert_eq!(stats.admitted, 21);
    assert_eq!(layout.tracked().len(), 21);
    assert_eq!(
        layout.tracked().sorted(),
        (0..21).map(ItemId::from_index).collect::<Vec<_>>()
    );
    assert_eq!(layout.dynamics().constraint_ids(), layout.tracked().sorted());
}

#[test]
fn resting_items_match_the_base_layout() {
    let mut layout = layout();
    layout.prepare_frame();

    let visible = layout.items_in_rect(Rect::new(0.0, 0.0, 320.0, 480.0));
    assert_eq!(ids(&visible), (0..15).collect::<Vec<_>>());
    for item in visible {
        assert_eq!(Some(item), layout.base().layout_item(item.id));
    }
}

#[test]
fn untracked_items_are_absent() {
    let mut layout = layout();
    layout.prepare_frame();
    assert!(layout.item_at(ItemId::from_index(40)).is_none());
    assert!(layout.item_at(ItemId::new(2, 0)).is_none());
    assert!(layout.item_at(ItemId::from_index(3)).is_some());
}

#[test]
fn scrolling_moves_the_window() {
    let mut layout = layout();
    layout.prepare_frame();

    layout.on_scroll_position_change(Vec2::new(0.0, 300.0), Vec2::ZERO);
    let stats = layout.prepare_frame();

    // Window (0, 100, 320, 880) spans y 100..980: line 0 leaves, lines 7 and 8 enter.
    assert_eq!(stats.evicted, 3);
    assert_eq!(stats.admitted, 6);
    assert_eq!(
        layout.tracked().sorted(),
        (3..27).map(ItemId::from_index).collect::<Vec<_>>()
    );
}

#[test]
fn items_entering_during_a_drag_start_mid_motion() {
    let mut layout = layout();
    layout.prepare_frame();
    layout.set_pointer_location(Vec2::new(160.0, 400.0));

    layout.on_scroll_position_change(Vec2::new(0.0, 300.0), Vec2::ZERO);
    layout.prepare_frame();

    // Item 24 rests at (50, 930), 110 + 530 points from the finger.
    let entered = layout.item_at(ItemId::from_index(24)).expect("tracked");
    assert_relative_eq!(entered.center().y, 930.0 + 300.0 * 640.0 / 1500.0, epsilon = 1e-2);
    assert_eq!(entered.center().x, 50.0);
    let anchor = layout
        .dynamics()
        .constraint(ItemId::from_index(24))
        .expect("attached")
        .anchor;
    assert_eq!(anchor, Vec2::new(50.0, 930.0));
}

#[test]
fn items_entering_after_the_touch_ends_start_at_rest() {
    let mut layout = layout();
    layout.prepare_frame();
    layout.set_pointer_location(Vec2::new(160.0, 400.0));
    layout.on_scroll_position_change(Vec2::new(0.0, 300.0), Vec2::ZERO);
    layout.end_touch();
    layout.prepare_frame();

    let entered = layout.item_at(ItemId::from_index(24)).expect("tracked");
    assert_eq!(entered.center(), Vec2::new(50.0, 930.0));
}

#[test]
fn springs_settle_back_onto_the_grid() {
    let mut layout = layout();
    layout.prepare_frame();
    layout.set_pointer_location(Vec2::new(160.0, 100.0));
    layout.on_scroll_position_change(Vec2::new(0.0, 40.0), Vec2::ZERO);
    assert!(layout.is_animating());

    layout.end_touch();
    for _ in 0..(60 * 15) {
        layout.step(DT);
        layout.prepare_frame();
    }

    assert!(!layout.is_animating());
    for id in layout.tracked().sorted() {
        let simulated = layout.item_at(id).expect("tracked");
        let rest = layout.base().layout_item(id).expect("in grid");
        assert_relative_eq!(simulated.center().y, rest.center().y, epsilon = 0.1);
        assert_relative_eq!(simulated.center().x, rest.center().x, epsilon = 0.1);
    }
}

#[test]
fn teardown_releases_everything() {
    let mut layout = layout();
    layout.prepare_frame();
    layout.set_pointer_location(Vec2::new(5.0, 5.0));
    layout.on_scroll_position_change(Vec2::new(0.0, 3.0), Vec2::ZERO);

    assert_eq!(layout.teardown(), 21);
    assert!(layout.tracked().is_empty());
    assert!(layout.dynamics().is_empty());
    assert_eq!(*layout.scroll_state(), ScrollState::default());
    assert_eq!(layout.teardown(), 0);
}

#[test]
fn dropping_the_layout_tears_down_the_engine() {
    let (engine, log) = RecordingEngine::new();
    {
        let mut layout = BounceLayout::with_dynamics(grid(), engine, LayoutConfig::default());
        layout.attach_viewport(phone_viewport());
        layout.prepare_frame();
    }
    assert_eq!(log.borrow().teardowns, 1);
}

#[test]
fn detaching_the_viewport_freezes_reconciliation() {
    let mut layout = layout();
    layout.prepare_frame();
    layout.detach_viewport();

    let stats = layout.prepare_frame();
    assert!(stats.is_noop());
    assert_eq!(layout.tracked().len(), 21);
}

#[test]
fn custom_margin_changes_the_window() {
    let config = LayoutConfig {
        window_margin: 0.0,
        ..LayoutConfig::default()
    };
    let mut layout = BounceLayout::with_config(grid(), config);
    assert_eq!(layout.config().window_margin, 0.0);
    layout.attach_viewport(phone_viewport());
    let stats = layout.prepare_frame();

    // Window (0, 0, 320, 480) covers lines 0..=4.
    assert_eq!(layout.tracked().len(), 15);
    assert_eq!(layout.last_stats(), stats);
    assert_eq!(layout.content_size(), Vec2::new(320.0, 20.0 * 110.0 - 10.0));
}

#[test]
fn items_in_rect_reports_positions_mid_bounce() {
    let mut layout = layout();
    layout.prepare_frame();
    layout.set_pointer_location(Vec2::new(50.0, 50.0));

    layout.on_scroll_position_change(Vec2::new(0.0, -30.0), Vec2::ZERO);

    let bouncing = layout.items_in_rect(Rect::new(0.0, -200.0, 320.0, 880.0));
    assert_eq!(ids(&bouncing), (0..21).collect::<Vec<_>>());
    for item in &bouncing {
        assert_eq!(Some(*item), layout.item_at(item.id));
    }

    let under_finger = bouncing
        .iter()
        .find(|item| item.id == ItemId::from_index(0))
        .expect("item 0 in rect");
    assert_eq!(under_finger.center(), Vec2::new(50.0, 50.0));

    // Item 20 rests at (270, 710), 880 points from the finger.
    let far = bouncing
        .iter()
        .find(|item| item.id == ItemId::from_index(20))
        .expect("item 20 in rect");
    let rest = layout.base().layout_item(far.id).expect("in grid");
    assert_relative_eq!(far.center().y, rest.center().y - 30.0 * 880.0 / 1500.0, epsilon = 1e-3);
    assert_ne!(far.frame, rest.frame);

    layout.step(DT);
    let stepped = layout.item_at(far.id).expect("tracked");
    assert_ne!(stepped.frame, far.frame);
    assert!(layout
        .items_in_rect(Rect::new(0.0, -200.0, 320.0, 880.0))
        .contains(&stepped));
}

#[test]
fn springs_settle_far_down_a_long_list() {
    // 36_000 lines of 110 points; the viewport sits 3.9M points down.
    let grid = FlowGridLayout::new(108_000, Vec2::new(100.0, 100.0)).with_spacing(10.0, 10.0);
    let mut layout = BounceLayout::new(grid);
    let origin = Vec2::new(0.0, 3_900_000.0);
    layout.attach_viewport(Viewport::new(origin, Vec2::new(320.0, 480.0)));
    layout.prepare_frame();
    assert!(!layout.tracked().is_empty());

    layout.set_pointer_location(origin + Vec2::new(160.0, 20.0));
    layout.on_scroll_position_change(origin + Vec2::new(0.0, 10.0), origin);
    layout.end_touch();
    for _ in 0..(60 * 30) {
        layout.step(DT);
        layout.prepare_frame();
    }

    assert!(!layout.is_animating());
    for id in layout.tracked().sorted() {
        let simulated = layout.item_at(id).expect("tracked");
        let rest = layout.base().layout_item(id).expect("in grid");
        assert_eq!(simulated.frame, rest.frame);
    }
}

#[test]
fn growing_the_base_grid_admits_new_items() {
    let mut layout = BounceLayout::new(grid().with_sections(vec![3]));
    layout.attach_viewport(phone_viewport());
    layout.prepare_frame();
    assert_eq!(layout.tracked().len(), 3);

    layout.base_mut().sections = vec![3, 6];
    let stats = layout.prepare_frame();

    assert_eq!(stats.admitted, 6);
    assert!(layout.item_at(ItemId::new(1, 5)).is_some());
}

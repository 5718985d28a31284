// Interactive resize sessions: compensation modes, clamping, persistence

mod common;

use col_reorder::ui::CursorStyle;
use col_reorder::{ColumnManager, PointerEvent, ReorderConfig};
use common::{five_column_model, MockHost};

fn manager(config: ReorderConfig) -> ColumnManager {
    ColumnManager::attach("t1", five_column_model(), config)
}

fn down(x: f64) -> PointerEvent {
    PointerEvent::Down { x, y: 5.0 }
}

fn mv(x: f64) -> PointerEvent {
    PointerEvent::Move { x, y: 5.0 }
}

fn up(x: f64) -> PointerEvent {
    PointerEvent::Up { x, y: 5.0 }
}

#[test]
fn neighbor_absorbs_the_delta_without_horizontal_scroll() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);

    // B's trailing edge is at x = 200; 198 is inside the 5 px zone
    m.handle_pointer(down(198.0), &mut host).unwrap();
    m.handle_pointer(mv(238.0), &mut host).unwrap();

    assert_eq!(host.widths[1], 140.0);
    assert_eq!(host.widths[2], 60.0);
    // the pair's total width is conserved
    assert_eq!(host.widths[1] + host.widths[2], 200.0);

    m.handle_pointer(up(238.0), &mut host).unwrap();
    assert_eq!(m.model().width_px(1), Some(140.0));
    assert_eq!(m.model().width_px(2), Some(60.0));
    assert_eq!(host.resize_events, vec![(1, 140.0)]);
}

#[test]
fn width_floor_clamps_and_conservation_still_holds() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);

    m.handle_pointer(down(198.0), &mut host).unwrap();
    // pull far past the floor
    m.handle_pointer(mv(0.0), &mut host).unwrap();

    assert_eq!(host.widths[1], 20.0);
    // the neighbor sees the clamped delta, not the raw pointer delta
    assert_eq!(host.widths[2], 180.0);
    assert_eq!(host.widths[1] + host.widths[2], 200.0);

    m.handle_pointer(up(0.0), &mut host).unwrap();
    assert_eq!(m.model().width_px(1), Some(20.0));
}

#[test]
fn horizontal_scroll_mode_adjusts_the_table_not_the_neighbor() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);
    host.scroll_x = true;

    m.handle_pointer(down(198.0), &mut host).unwrap();
    m.handle_pointer(mv(238.0), &mut host).unwrap();
    assert_eq!(host.table_width_delta, 40.0);
    m.handle_pointer(mv(258.0), &mut host).unwrap();
    // deltas are applied incrementally, never compounded
    assert_eq!(host.table_width_delta, 60.0);
    m.handle_pointer(mv(178.0), &mut host).unwrap();
    assert_eq!(host.table_width_delta, -20.0);

    // the visible neighbor is never touched in this mode
    assert_eq!(host.widths[2], 100.0);

    m.handle_pointer(up(178.0), &mut host).unwrap();
    assert_eq!(m.model().width_px(1), Some(80.0));
    assert_eq!(m.model().width_px(2), None);
}

#[test]
fn sortability_and_auto_width_are_suspended_for_the_session() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);

    assert!(m.model().columns[1].sortable);
    m.handle_pointer(down(198.0), &mut host).unwrap();
    assert!(!m.model().columns[1].sortable);
    assert!(!host.auto_width);

    m.handle_pointer(mv(238.0), &mut host).unwrap();
    m.handle_pointer(up(238.0), &mut host).unwrap();
    assert!(m.model().columns[1].sortable);
    assert!(host.auto_width);
}

#[test]
fn resizing_the_last_column_captures_preceding_widths() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);

    // E's trailing edge is at x = 500
    m.handle_pointer(down(498.0), &mut host).unwrap();
    m.handle_pointer(mv(538.0), &mut host).unwrap();
    m.handle_pointer(up(538.0), &mut host).unwrap();

    assert_eq!(m.model().width_px(4), Some(140.0));
    // with no neighbor to compensate, every preceding visible width is
    // persisted so the layout survives a restore
    for i in 0..4 {
        assert_eq!(m.model().width_px(i), Some(100.0));
    }
    assert_eq!(host.resize_events, vec![(4, 140.0)]);
}

#[test]
fn hover_affordances_track_the_pointer() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);

    m.handle_pointer(mv(199.0), &mut host).unwrap();
    assert_eq!(host.cursor, CursorStyle::ColResize);

    m.handle_pointer(mv(150.0), &mut host).unwrap();
    assert_eq!(host.cursor, CursorStyle::Move);

    m.handle_pointer(mv(620.0), &mut host).unwrap();
    assert_eq!(host.cursor, CursorStyle::Default);
}

#[test]
fn resize_zone_wins_over_drag() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);

    m.handle_pointer(down(198.0), &mut host).unwrap();
    m.handle_pointer(mv(320.0), &mut host).unwrap();

    assert!(!host.proxy_shown);
    assert!(!host.width_sets.is_empty());
    m.handle_pointer(up(320.0), &mut host).unwrap();
    assert!(host.reorder_events.is_empty());
}

#[test]
fn disabling_resize_leaves_the_zone_to_reordering() {
    let config = ReorderConfig {
        allow_resize: false,
        ..Default::default()
    };
    let mut m = manager(config);
    let mut host = MockHost::uniform(5, 100.0);

    // 198 lies within B's header, so the same press arms a drag instead
    m.handle_pointer(down(198.0), &mut host).unwrap();
    m.handle_pointer(PointerEvent::Move { x: 420.0, y: 5.0 }, &mut host)
        .unwrap();
    assert!(host.proxy_shown);
    m.handle_pointer(up(420.0), &mut host).unwrap();

    assert_eq!(m.model().column_names(), vec!["A", "C", "D", "B", "E"]);
}

#[test]
fn fixed_columns_cannot_be_resized() {
    let config = ReorderConfig {
        fixed_column_count: 1,
        ..Default::default()
    };
    let mut m = manager(config);
    let mut host = MockHost::uniform(5, 100.0);

    // A's trailing edge at x = 100 sits in its resize zone, but A is fixed
    m.handle_pointer(down(98.0), &mut host).unwrap();
    assert!(!m.has_active_session());
    m.handle_pointer(mv(140.0), &mut host).unwrap();
    m.handle_pointer(up(140.0), &mut host).unwrap();

    assert_eq!(host.widths, vec![100.0; 5]);
    assert!(host.resize_events.is_empty());
}

#[test]
fn pointer_down_during_resize_is_ignored() {
    let mut m = manager(ReorderConfig::default());
    let mut host = MockHost::uniform(5, 100.0);

    m.handle_pointer(down(198.0), &mut host).unwrap();
    // a second press must not arm a drag mid-resize
    m.handle_pointer(down(350.0), &mut host).unwrap();
    m.handle_pointer(mv(238.0), &mut host).unwrap();
    m.handle_pointer(up(238.0), &mut host).unwrap();

    assert_eq!(host.resize_events.len(), 1);
    assert!(host.reorder_events.is_empty());
    assert_eq!(m.model().column_names(), vec!["A", "B", "C", "D", "E"]);
}

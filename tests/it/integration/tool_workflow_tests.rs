//! Tool and Canvas Workflow Tests
//!
//! Gestures other than card drags: click-create, panning, deselect,
//! selection toggling, hit testing and listener bookkeeping.

use crate::helpers::{
    TestBoardBuilder, assert_item_count, drag_to, empty_app, event, item, position_of, press,
    press_with, release,
};
use std::time::Instant;
use stickyboard::{
    Gesture, GestureError, Modifiers, Point, PointerButton, PointerOutcome, PointerTarget, Position, Tool,
};

#[test]
fn test_create_tool_click_creates_card() {
    let (mut app, _) = TestBoardBuilder::new().with_tool(Tool::Create).build();
    let t0 = Instant::now();

    assert_eq!(
        press(&mut app, &PointerTarget::Canvas, 300.4, 199.6, t0),
        PointerOutcome::Started(Gesture::ClickCreate)
    );
    let PointerOutcome::Created { item: id } = release(&mut app, 301.0, 201.0, t0) else {
        panic!("expected a card to be created");
    };

    assert_item_count(&app, 1);
    assert_eq!(position_of(&app, &id), Position::new(300, 200));
    assert_eq!(app.board().selection().focused(), Some(id.as_str()));
}

#[test]
fn test_create_tool_drag_creates_nothing() {
    let (mut app, _) = TestBoardBuilder::new().with_tool(Tool::Create).build();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 0.0, 0.0, t0);
    drag_to(&mut app, 30.0, 0.0, t0);
    assert_eq!(release(&mut app, 0.0, 0.0, t0), PointerOutcome::Ended);
    assert_item_count(&app, 0);
}

#[test]
fn test_create_respects_pan_offset() {
    let (mut app, _) = TestBoardBuilder::new().with_tool(Tool::Create).build();
    let t0 = Instant::now();
    app.with_board(t0, |board| board.set_pan_offset(Point::new(50.0, -20.0)));

    press(&mut app, &PointerTarget::Canvas, 300.0, 200.0, t0);
    let PointerOutcome::Created { item: id } = release(&mut app, 300.0, 200.0, t0) else {
        panic!("expected a card to be created");
    };
    assert_eq!(position_of(&app, &id), Position::new(250, 220));
}

#[test]
fn test_create_tool_click_on_card_edits_it() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "Card", (0, 0))
        .with_tool(Tool::Create)
        .build();
    let t0 = Instant::now();

    assert_eq!(
        press(&mut app, &item("a"), 10.0, 10.0, t0),
        PointerOutcome::Started(Gesture::ItemClick { item: "a".into() })
    );
    assert_eq!(
        release(&mut app, 11.0, 10.0, t0),
        PointerOutcome::Clicked { item: "a".into() }
    );
    assert_item_count(&app, 1);
    assert_eq!(app.board().selection().focused(), Some("a"));
}

#[test]
fn test_create_tool_never_moves_cards() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "Card", (0, 0))
        .with_tool(Tool::Create)
        .build();
    let t0 = Instant::now();

    press(&mut app, &item("a"), 10.0, 10.0, t0);
    assert_eq!(drag_to(&mut app, 60.0, 10.0, t0), PointerOutcome::Holding);
    assert_eq!(release(&mut app, 60.0, 10.0, t0), PointerOutcome::Ended);
    assert_item_count(&app, 1);
    assert_eq!(position_of(&app, "a"), Position::new(0, 0));
    assert_eq!(app.board().selection().focused(), None);
}

#[test]
fn test_non_finite_release_aborts_create() {
    let (mut app, _) = TestBoardBuilder::new().with_tool(Tool::Create).build();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 10.0, 10.0, t0);
    assert_eq!(
        release(&mut app, f64::NAN, f64::NAN, t0),
        PointerOutcome::Aborted(GestureError::NonFinitePointer)
    );
    assert_item_count(&app, 0);
    assert!(app.input_state().is_idle());
}

#[test]
fn test_non_finite_release_keeps_selection() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_selected(&["a"])
        .with_tool(Tool::Move)
        .build();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 900.0, 900.0, t0);
    assert_eq!(
        release(&mut app, f64::NAN, 0.0, t0),
        PointerOutcome::Aborted(GestureError::NonFinitePointer)
    );
    assert!(app.board().selection().is_selected("a"));
    assert!(app.input_state().is_idle());
}

#[test]
fn test_non_finite_release_skips_clicks() {
    let (mut app, _) = TestBoardBuilder::new().with_item("a", "A", (0, 0)).build();
    let t0 = Instant::now();
    app.focus_item("a", t0).unwrap();

    // Pan click would clear focus
    press(&mut app, &PointerTarget::Canvas, 900.0, 900.0, t0);
    assert!(matches!(
        release(&mut app, f64::INFINITY, 900.0, t0),
        PointerOutcome::Aborted(_)
    ));
    assert_eq!(app.board().selection().focused(), Some("a"));

    // Card click would refocus; blur first so a click would be visible
    app.with_board(t0, |board| board.blur());
    press(&mut app, &item("a"), 10.0, 10.0, t0);
    assert!(matches!(
        release(&mut app, 10.0, f64::NAN, t0),
        PointerOutcome::Aborted(_)
    ));
    assert_eq!(app.board().selection().focused(), None);
    assert!(app.listeners().pointer_down && !app.listeners().pointer_up);
}

#[test]
fn test_create_limit_aborts_gesture() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "Card", (0, 0))
        .with_tool(Tool::Create)
        .with_settings(|s| s.max_items = 1)
        .build();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 500.0, 500.0, t0);
    assert!(matches!(
        release(&mut app, 500.0, 500.0, t0),
        PointerOutcome::Aborted(_)
    ));
    assert_item_count(&app, 1);
    assert!(app.input_state().is_idle());
}

#[test]
fn test_cursor_canvas_drag_pans() {
    let (mut app, _) = empty_app();
    let t0 = Instant::now();

    assert_eq!(
        press(&mut app, &PointerTarget::Canvas, 0.0, 0.0, t0),
        PointerOutcome::Started(Gesture::Pan)
    );
    assert_eq!(
        drag_to(&mut app, 30.0, 40.0, t0),
        PointerOutcome::Panned {
            offset: Point::new(30.0, 40.0)
        }
    );
    assert_eq!(
        release(&mut app, 35.0, 45.0, t0),
        PointerOutcome::Panned {
            offset: Point::new(35.0, 45.0)
        }
    );
    assert_eq!(app.board().pan_offset(), Point::new(35.0, 45.0));
}

#[test]
fn test_pan_click_leaves_view_alone() {
    let (mut app, _) = empty_app();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 100.0, 100.0, t0);
    assert_eq!(drag_to(&mut app, 103.0, 102.0, t0), PointerOutcome::Holding);
    assert_eq!(
        release(&mut app, 102.0, 103.0, t0),
        PointerOutcome::FocusCleared
    );
    assert_eq!(app.board().pan_offset(), Point::ZERO);
}

#[test]
fn test_pan_counts_from_press_once_past_threshold() {
    let (mut app, _) = empty_app();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 0.0, 0.0, t0);
    drag_to(&mut app, 2.0, 0.0, t0);
    assert_eq!(
        drag_to(&mut app, 10.0, 0.0, t0),
        PointerOutcome::Panned {
            offset: Point::new(10.0, 0.0)
        }
    );
    release(&mut app, 10.0, 0.0, t0);
    assert_eq!(app.board().pan_offset(), Point::new(10.0, 0.0));
}

#[test]
fn test_pan_is_not_saved() {
    let (mut app, storage) = empty_app();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 0.0, 0.0, t0);
    release(&mut app, 100.0, 0.0, t0);
    assert!(!app.tick(crate::helpers::after_ms(t0, 10_000)));
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn test_cursor_canvas_click_clears_focus() {
    let (mut app, _) = TestBoardBuilder::new().with_item("a", "Card", (0, 0)).build();
    let t0 = Instant::now();
    app.focus_item("a", t0).unwrap();

    press(&mut app, &PointerTarget::Canvas, 900.0, 900.0, t0);
    assert_eq!(
        release(&mut app, 901.0, 899.0, t0),
        PointerOutcome::FocusCleared
    );
    assert_eq!(app.board().selection().focused(), None);
}

#[test]
fn test_move_canvas_click_deselects() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_item("b", "B", (300, 0))
        .with_selected(&["a", "b"])
        .with_tool(Tool::Move)
        .build();
    let t0 = Instant::now();

    assert_eq!(
        press(&mut app, &PointerTarget::Canvas, 900.0, 900.0, t0),
        PointerOutcome::Started(Gesture::Deselect)
    );
    assert_eq!(release(&mut app, 900.0, 900.0, t0), PointerOutcome::Deselected);
    assert!(app.board().selection().is_empty());
}

#[test]
fn test_move_canvas_drag_keeps_selection() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_selected(&["a"])
        .with_tool(Tool::Move)
        .build();
    let t0 = Instant::now();

    press(&mut app, &PointerTarget::Canvas, 900.0, 900.0, t0);
    drag_to(&mut app, 950.0, 900.0, t0);
    assert_eq!(release(&mut app, 950.0, 900.0, t0), PointerOutcome::Ended);
    assert!(app.board().selection().is_selected("a"));
}

#[test]
fn test_modifier_click_toggles_selection() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_item("b", "B", (300, 0))
        .with_tool(Tool::Move)
        .build();
    let t0 = Instant::now();
    let primary = PointerButton::Primary;

    assert_eq!(
        press_with(&mut app, &item("a"), 0.0, 0.0, Modifiers::MULTI, primary, t0),
        PointerOutcome::SelectionToggled {
            item: "a".into(),
            selected: true
        }
    );
    assert_eq!(release(&mut app, 0.0, 0.0, t0), PointerOutcome::Ended);

    press_with(&mut app, &item("b"), 300.0, 0.0, Modifiers::MULTI, primary, t0);
    release(&mut app, 300.0, 0.0, t0);
    assert_eq!(app.board().selection().len(), 2);

    assert_eq!(
        press_with(&mut app, &item("a"), 0.0, 0.0, Modifiers::MULTI, primary, t0),
        PointerOutcome::SelectionToggled {
            item: "a".into(),
            selected: false
        }
    );
    release(&mut app, 0.0, 0.0, t0);
    assert_eq!(app.board().selection().selected_ids(), vec!["b".to_string()]);
}

#[test]
fn test_middle_button_pans_over_cards() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_tool(Tool::Move)
        .build();
    let t0 = Instant::now();

    assert_eq!(
        press_with(
            &mut app,
            &item("a"),
            10.0,
            10.0,
            Modifiers::NONE,
            PointerButton::Middle,
            t0
        ),
        PointerOutcome::Started(Gesture::Pan)
    );
    release(&mut app, 60.0, 10.0, t0);
    assert_eq!(app.board().pan_offset(), Point::new(50.0, 0.0));
    assert_eq!(position_of(&app, "a"), Position::new(0, 0));
}

#[test]
fn test_secondary_button_ignored() {
    let (mut app, _) = TestBoardBuilder::new().with_item("a", "A", (0, 0)).build();
    let t0 = Instant::now();
    let ev = event(0.0, 0.0, t0).with_button(PointerButton::Secondary);

    assert_eq!(app.pointer_down(&ev, &item("a")), PointerOutcome::Ignored);
    assert!(app.input_state().is_idle());
}

#[test]
fn test_leaving_move_tool_clears_selection() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_selected(&["a"])
        .with_tool(Tool::Move)
        .build();
    let t0 = Instant::now();

    app.set_tool(Tool::Cursor, t0);
    assert_eq!(app.tool(), Tool::Cursor);
    assert!(app.board().selection().is_empty());
}

#[test]
fn test_hit_testing_picks_topmost_card() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_item("b", "B", (100, 20))
        .build();

    assert_eq!(app.target_at(Point::new(150.0, 40.0)), item("b"));
    assert_eq!(app.target_at(Point::new(50.0, 10.0)), item("a"));
    assert_eq!(app.target_at(Point::new(1000.0, 1000.0)), PointerTarget::Canvas);
    assert_eq!(app.target_at(Point::new(f64::NAN, 0.0)), PointerTarget::Canvas);
}

#[test]
fn test_hit_testing_tracks_commits_and_pan() {
    let (mut app, _) = TestBoardBuilder::new().with_item("a", "A", (0, 0)).build();
    let t0 = Instant::now();
    assert_eq!(app.target_at(Point::new(10.0, 10.0)), item("a"));

    // Move the card away; the index follows the committed position
    press(&mut app, &item("a"), 10.0, 10.0, t0);
    release(&mut app, 510.0, 10.0, t0);
    assert_eq!(app.target_at(Point::new(10.0, 10.0)), PointerTarget::Canvas);
    assert_eq!(app.target_at(Point::new(510.0, 10.0)), item("a"));

    app.with_board(t0, |board| board.set_pan_offset(Point::new(-500.0, 0.0)));
    assert_eq!(app.target_at(Point::new(10.0, 10.0)), item("a"));
}

#[test]
fn test_pointer_down_at_hit_tests() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_item("b", "B", (100, 20))
        .build();
    let t0 = Instant::now();

    assert_eq!(
        app.pointer_down_at(&event(150.0, 40.0, t0)),
        PointerOutcome::Started(Gesture::ItemDrag {
            item: "b".into(),
            group: false
        })
    );
    release(&mut app, 150.0, 40.0, t0);
    assert_eq!(
        app.pointer_down_at(&event(2000.0, 2000.0, t0)),
        PointerOutcome::Started(Gesture::Pan)
    );
}

#[test]
fn test_listener_bookkeeping() {
    let (mut app, _) = TestBoardBuilder::new().with_item("a", "A", (0, 0)).build();
    let t0 = Instant::now();

    let idle = app.listeners();
    assert!(idle.pointer_down && !idle.pointer_move && !idle.pointer_up);

    press(&mut app, &item("a"), 0.0, 0.0, t0);
    let active = app.listeners();
    assert!(active.pointer_move && active.pointer_up);

    release(&mut app, 0.0, 0.0, t0);
    assert_eq!(app.listeners(), idle);

    app.unmount();
    assert!(app.listeners().is_empty());
    assert!(!app.is_mounted());
}

#[test]
fn test_move_without_gesture_is_ignored() {
    let (mut app, _) = empty_app();
    assert_eq!(
        drag_to(&mut app, 10.0, 10.0, Instant::now()),
        PointerOutcome::Ignored
    );
}

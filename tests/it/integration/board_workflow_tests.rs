//! Board Workflow Integration Tests
//!
//! Card editing and subtask management through `Stickyboard`.

use crate::helpers::{TestBoardBuilder, after_ms, assert_item_count, empty_app};
use std::time::Instant;
use stickyboard::board::EditOutcome;
use stickyboard::{BoardError, Point};

#[test]
fn test_finish_editing_empty_text_deletes_card() {
    let (mut app, _) = empty_app();
    let t0 = Instant::now();

    let id = app.create_item(Point::ZERO, t0).unwrap();
    assert_eq!(
        app.finish_editing(&id, " \n\t ", t0).unwrap(),
        EditOutcome::Deleted
    );
    assert_item_count(&app, 0);
    assert_eq!(app.board().selection().focused(), None);
}

#[test]
fn test_edit_text_is_normalized_and_bounded() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "Card", (0, 0))
        .with_settings(|s| s.max_text_len = 5)
        .build();
    let t0 = Instant::now();

    app.edit_text("a", "\u{7}  abcdefgh", t0).unwrap();
    assert_eq!(app.board().get_item("a").unwrap().text, "abcde");
}

#[test]
fn test_unknown_card_errors() {
    let (mut app, _) = empty_app();
    let t0 = Instant::now();

    assert_eq!(
        app.toggle_completed("nope", t0),
        Err(BoardError::UnknownItem("nope".into()))
    );
    assert!(app.delete_item("nope", t0).is_err());
    assert!(!app.tick(after_ms(t0, 10_000)));
}

#[test]
fn test_delete_removes_from_selection() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_item("b", "B", (300, 0))
        .with_selected(&["a", "b"])
        .build();
    let t0 = Instant::now();

    app.delete_item("a", t0).unwrap();
    assert_eq!(app.board().selection().selected_ids(), vec!["b".to_string()]);
}

#[test]
fn test_subtask_nesting_workflow() {
    let (mut app, _) = TestBoardBuilder::new().with_item("a", "Trip", (0, 0)).build();
    let t0 = Instant::now();

    let pack = app.add_subtask("a", None, 0, "Pack", t0).unwrap();
    let socks = app.add_subtask("a", Some(0), 1, "Socks", t0).unwrap();
    let shoes = app.add_subtask("a", Some(1), 1, "Shoes", t0).unwrap();

    // A subtask goes at most one level deeper than the one above it
    assert!(app.indent_subtask("a", &shoes, t0).unwrap());
    assert!(!app.indent_subtask("a", &shoes, t0).unwrap());
    assert!(!app.indent_subtask("a", &pack, t0).unwrap());

    assert!(app.outdent_subtask("a", &shoes, t0).unwrap());
    assert!(app.outdent_subtask("a", &socks, t0).unwrap());
    assert!(!app.outdent_subtask("a", &socks, t0).unwrap());

    app.toggle_subtask("a", &pack, t0).unwrap();
    let progress = app.progress("a").unwrap();
    assert_eq!((progress.completed, progress.total, progress.percentage), (1, 3, 33));

    app.remove_subtask("a", &socks, t0).unwrap();
    assert_eq!(app.progress("a").unwrap().percentage, 50);
    assert!(matches!(
        app.remove_subtask("a", &socks, t0),
        Err(BoardError::UnknownSubtask { .. })
    ));
}

#[test]
fn test_select_and_clear() {
    let (mut app, _) = TestBoardBuilder::new()
        .with_item("a", "A", (0, 0))
        .with_item("b", "B", (300, 0))
        .build();
    let t0 = Instant::now();

    app.select_items(&["a".to_string(), "ghost".to_string(), "b".to_string()], t0);
    assert_eq!(app.board().selection().len(), 2);

    app.focus_item("a", t0).unwrap();
    assert!(app.board().selection().is_empty());

    app.select_items(&["b".to_string()], t0);
    assert_eq!(app.board().selection().focused(), None);
    app.clear_selection(t0);
    assert!(app.board().selection().is_empty());
}

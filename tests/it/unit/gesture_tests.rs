//! Gesture classification table.

use stickyboard::input::classify;
use stickyboard::{Gesture, Modifiers, PointerButton, PointerTarget, Tool};

fn on_item() -> PointerTarget {
    PointerTarget::Item("card".into())
}

#[test]
fn test_classification_table() {
    let primary = PointerButton::Primary;
    let drag_alone = Some(Gesture::ItemDrag {
        item: "card".into(),
        group: false,
    });
    let drag_group = Some(Gesture::ItemDrag {
        item: "card".into(),
        group: true,
    });

    let table = [
        (Tool::Cursor, PointerTarget::Canvas, Modifiers::NONE, Some(Gesture::Pan)),
        (Tool::Cursor, on_item(), Modifiers::NONE, drag_alone.clone()),
        (Tool::Create, PointerTarget::Canvas, Modifiers::NONE, Some(Gesture::ClickCreate)),
        (
            Tool::Create,
            on_item(),
            Modifiers::NONE,
            Some(Gesture::ItemClick { item: "card".into() }),
        ),
        (
            Tool::Move,
            on_item(),
            Modifiers::MULTI,
            Some(Gesture::SelectionToggle { item: "card".into() }),
        ),
        (Tool::Move, on_item(), Modifiers::NONE, drag_group),
        (Tool::Move, PointerTarget::Canvas, Modifiers::NONE, Some(Gesture::Deselect)),
    ];

    for (tool, target, modifiers, expected) in table {
        assert_eq!(
            classify(tool, primary, modifiers, &target),
            expected,
            "{tool:?} on {target:?} with {modifiers:?}"
        );
    }
}

#[test]
fn test_every_multi_modifier_toggles() {
    let shift = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    let platform = Modifiers {
        platform: true,
        ..Modifiers::NONE
    };
    for modifiers in [shift, platform, Modifiers::MULTI] {
        assert!(matches!(
            classify(Tool::Move, PointerButton::Primary, modifiers, &on_item()),
            Some(Gesture::SelectionToggle { .. })
        ));
    }
}

#[test]
fn test_gesture_names() {
    assert_eq!(Gesture::Pan.name(), "pan");
    assert_eq!(Gesture::Deselect.name(), "deselect");
    assert_eq!(
        Gesture::SelectionToggle { item: "x".into() }.name(),
        "selection-toggle"
    );
}

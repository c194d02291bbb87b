use minesweeper::{Action, CellState, EndIndicator, GameEvent};
use serde_json::json;

#[test]
fn test_events_are_tagged_by_type() {
    let event = GameEvent::CellRevealed {
        row: 2,
        col: 3,
        neighbor_mines: 1,
    };
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({"type": "cell_revealed", "row": 2, "col": 3, "neighbor_mines": 1})
    );

    let event = GameEvent::CellMarkChanged {
        row: 0,
        col: 0,
        state: CellState::FlaggedAsMine,
    };
    assert_eq!(
        serde_json::to_value(&event).unwrap()["state"],
        json!("flagged_as_mine")
    );
}

#[test]
fn test_frozen_indicator_shape() {
    let event = GameEvent::CellFrozen {
        row: 1,
        col: 1,
        indicator: EndIndicator::Marked { mine: true },
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["indicator"], json!({"kind": "marked", "mine": true}));
    let back: GameEvent = serde_json::from_value(value).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_action_parses_from_json() {
    let action: Action = serde_json::from_str(r#"{"action":"mark","row":4,"col":7}"#).unwrap();
    assert_eq!(action, Action::Mark { row: 4, col: 7 });
}

use minesweeper::{Cell, CellState};

#[test]
fn test_mark_cycle_returns_to_hidden() {
    let mut cell = Cell::new(1, 2, false);
    assert_eq!(cell.cycle_mark(), Some(CellState::FlaggedAsMine));
    assert_eq!(cell.cycle_mark(), Some(CellState::FlaggedAsUnknown));
    assert_eq!(cell.cycle_mark(), Some(CellState::Hidden));
    assert_eq!(cell.state(), CellState::Hidden);
    assert_eq!((cell.row(), cell.col()), (1, 2));
}

#[test]
fn test_reveal_only_from_hidden() {
    let mut cell = Cell::new(0, 0, false);
    cell.mark_bomb();
    assert!(!cell.reveal());
    cell.mark_unknown();
    assert!(!cell.reveal());
    cell.clear_mark();
    assert!(cell.reveal());
    assert_eq!(cell.state(), CellState::Revealed);
    // second reveal is a no-op
    assert!(!cell.reveal());
}

#[test]
fn test_revealed_cell_cannot_be_marked() {
    let mut cell = Cell::new(0, 0, false);
    assert!(cell.reveal());
    assert_eq!(cell.cycle_mark(), None);
    cell.mark_bomb();
    assert_eq!(cell.state(), CellState::Revealed);
}

#[test]
fn test_visible_count_hidden_until_revealed() {
    let mut cell = Cell::new(0, 0, false);
    assert_eq!(cell.visible_count(), None);
    cell.reveal();
    assert_eq!(cell.visible_count(), Some(0));
    assert!(!cell.is_mine());
}

#[test]
fn test_mine_cell_never_reveals() {
    let mut cell = Cell::new(0, 0, true);
    assert!(!cell.reveal());
    assert_eq!(cell.state(), CellState::Hidden);
    assert_eq!(cell.visible_count(), None);
}

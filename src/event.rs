//! Notifications pushed from the core to a presentation layer.

use crate::cell::CellState;

/// How a cell is shown once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "kind", rename_all = "snake_case"))]
pub enum EndIndicator {
    /// The mine the player revealed.
    Detonated,
    /// A mine the player never marked.
    UnmarkedMine,
    /// A cell still carrying a mark; `mine` tells whether the mark was right.
    Marked { mine: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "snake_case"))]
pub enum GameEvent {
    /// A new board replaced the previous one.
    GameStarted {
        width: usize,
        height: usize,
        mine_count: usize,
    },
    CellRevealed {
        row: usize,
        col: usize,
        neighbor_mines: u8,
    },
    CellMarkChanged {
        row: usize,
        col: usize,
        state: CellState,
    },
    /// A cell was disabled at the end of the game.
    CellFrozen {
        row: usize,
        col: usize,
        indicator: EndIndicator,
    },
    BombsRemainingChanged { count: i32 },
    TimerChanged { seconds: u32 },
    GameEnded { won: bool, elapsed_seconds: u32 },
}

impl GameEvent {
    /// Forward the event to the matching observer callback.
    pub fn dispatch<O: Observer + ?Sized>(&self, observer: &mut O) {
        match *self {
            GameEvent::GameStarted {
                width,
                height,
                mine_count,
            } => observer.on_game_started(width, height, mine_count),
            GameEvent::CellRevealed {
                row,
                col,
                neighbor_mines,
            } => observer.on_cell_revealed(row, col, neighbor_mines),
            GameEvent::CellMarkChanged { row, col, state } => {
                observer.on_cell_mark_changed(row, col, state)
            }
            GameEvent::CellFrozen {
                row,
                col,
                indicator,
            } => observer.on_cell_frozen(row, col, indicator),
            GameEvent::BombsRemainingChanged { count } => {
                observer.on_bombs_remaining_changed(count)
            }
            GameEvent::TimerChanged { seconds } => observer.on_timer_changed(seconds),
            GameEvent::GameEnded {
                won,
                elapsed_seconds,
            } => observer.on_game_ended(won, elapsed_seconds),
        }
    }
}

/// Callback interface for a presentation layer. Every method defaults to a
/// no-op so implementors only handle what they render.
pub trait Observer {
    fn on_game_started(&mut self, _width: usize, _height: usize, _mine_count: usize) {}
    fn on_cell_revealed(&mut self, _row: usize, _col: usize, _neighbor_mines: u8) {}
    fn on_cell_mark_changed(&mut self, _row: usize, _col: usize, _state: CellState) {}
    fn on_cell_frozen(&mut self, _row: usize, _col: usize, _indicator: EndIndicator) {}
    fn on_bombs_remaining_changed(&mut self, _count: i32) {}
    fn on_timer_changed(&mut self, _seconds: u32) {}
    fn on_game_ended(&mut self, _won: bool, _elapsed_seconds: u32) {}
}

/// Dispatch a batch of events in order.
pub fn dispatch_all<O: Observer + ?Sized>(events: &[GameEvent], observer: &mut O) {
    for event in events {
        event.dispatch(observer);
    }
}

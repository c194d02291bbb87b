//! Commonly used types and utilities for ease of import.

pub use crate::{
    play_session, Action, AiPlayer, Board, BoardConfig, CellState, GameEvent, GameSession,
    Observer, Outcome, Player, SessionState,
};

#[cfg(feature = "std")]
pub use crate::ui::{render_board, EventPrinter};

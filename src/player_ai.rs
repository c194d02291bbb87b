use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    cell::CellState,
    player::{Action, Player},
};

/// Player that applies the two single-cell deductions and guesses a random
/// hidden cell when neither rule fires.
///
/// For a revealed cell showing `n` with `f` flagged and `h` unflagged hidden
/// neighbors: if `f == n` every unflagged neighbor is safe; if `f + h == n`
/// every unflagged neighbor is a mine.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }

    fn deduce(board: &Board) -> Option<Action> {
        for cell in board.cells() {
            let Some(count) = cell.visible_count() else {
                continue;
            };
            let mut flagged = 0;
            let mut unflagged = Vec::new();
            for (r, c) in board.neighbors_of(cell.row(), cell.col()) {
                match board.cell(r, c).map(|n| n.state()) {
                    Some(CellState::FlaggedAsMine) => flagged += 1,
                    Some(state @ (CellState::Hidden | CellState::FlaggedAsUnknown)) => {
                        unflagged.push((r, c, state))
                    }
                    _ => {}
                }
            }
            let Some(&(row, col, state)) = unflagged.first() else {
                continue;
            };
            if flagged == count as usize {
                // "?" blocks a reveal, so clear it first
                return Some(if state == CellState::FlaggedAsUnknown {
                    Action::Mark { row, col }
                } else {
                    Action::Reveal { row, col }
                });
            }
            if flagged + unflagged.len() == count as usize {
                // one mark step turns Hidden into a mine flag; "?" needs two
                return Some(Action::Mark { row, col });
            }
        }
        None
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_action(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Action> {
        if let Some(action) = Self::deduce(board) {
            return Some(action);
        }
        let hidden: Vec<(usize, usize)> = board
            .cells()
            .filter(|c| c.state() == CellState::Hidden)
            .map(|c| (c.row(), c.col()))
            .collect();
        if hidden.is_empty() {
            return None;
        }
        let (row, col) = hidden[rng.random_range(0..hidden.len())];
        Some(Action::Reveal { row, col })
    }
}

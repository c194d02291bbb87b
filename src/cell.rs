//! A single grid position.

/// Display state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum CellState {
    Hidden,
    /// Opened safe cell; never a mine.
    Revealed,
    FlaggedAsMine,
    FlaggedAsUnknown,
    /// The mine whose reveal ended the game.
    Detonated,
}

impl CellState {
    /// Whether the player has put either mark on the cell.
    pub fn is_marked(self) -> bool {
        matches!(self, CellState::FlaggedAsMine | CellState::FlaggedAsUnknown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    mine: bool,
    neighbor_mines: u8,
    state: CellState,
}

impl Cell {
    pub fn new(row: usize, col: usize, mine: bool) -> Self {
        Self {
            row,
            col,
            mine,
            neighbor_mines: 0,
            state: CellState::Hidden,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_mine(&self) -> bool {
        self.mine
    }

    /// Mines among the up to 8 adjacent cells. Only meaningful for safe cells.
    pub fn neighbor_mines(&self) -> u8 {
        self.neighbor_mines
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// The count a player is allowed to see: `Some` only once revealed.
    pub fn visible_count(&self) -> Option<u8> {
        (self.state == CellState::Revealed).then_some(self.neighbor_mines)
    }

    pub(crate) fn inc_neighbor_mines(&mut self) {
        self.neighbor_mines += 1;
    }

    /// Hidden -> Revealed for a safe cell. Returns false for any other
    /// starting state and for mines, which only ever detonate.
    pub fn reveal(&mut self) -> bool {
        if self.state != CellState::Hidden || self.mine {
            return false;
        }
        self.state = CellState::Revealed;
        true
    }

    pub(crate) fn detonate(&mut self) {
        self.state = CellState::Detonated;
    }

    pub fn mark_bomb(&mut self) {
        self.set_mark(CellState::FlaggedAsMine);
    }

    pub fn mark_unknown(&mut self) {
        self.set_mark(CellState::FlaggedAsUnknown);
    }

    pub fn clear_mark(&mut self) {
        self.set_mark(CellState::Hidden);
    }

    fn set_mark(&mut self, state: CellState) {
        if self.state == CellState::Hidden || self.state.is_marked() {
            self.state = state;
        }
    }

    /// Advance Hidden -> FlaggedAsMine -> FlaggedAsUnknown -> Hidden.
    /// Returns the new state, or `None` when the cell cannot be marked.
    pub fn cycle_mark(&mut self) -> Option<CellState> {
        match self.state {
            CellState::Hidden => self.mark_bomb(),
            CellState::FlaggedAsMine => self.mark_unknown(),
            CellState::FlaggedAsUnknown => self.clear_mark(),
            CellState::Revealed | CellState::Detonated => return None,
        }
        Some(self.state)
    }
}

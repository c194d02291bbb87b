//! Minefield grid: mine layout, neighbor counts, flood-fill reveal and marking.

use alloc::collections::BTreeSet;
use alloc::{vec, vec::Vec};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::{Cell, CellState};
use crate::common::{BoardError, ConfigError};
use crate::config::BoardConfig;
use crate::event::{EndIndicator, GameEvent};

/// Result of a primary action on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing changed: board frozen, or the cell already open or marked.
    Ignored,
    /// Cells opened by this reveal; the game goes on.
    Opened(usize),
    /// The target held a mine.
    MineHit,
    /// The last safe cell was opened.
    Won,
}

/// Result of a secondary action on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Ignored,
    /// `believed_delta` is what the believed-remaining counter must change by.
    Changed { state: CellState, believed_delta: i32 },
}

/// In-bounds Chebyshev neighbors of `(row, col)` on a `height` x `width` grid.
pub fn neighbors(
    row: usize,
    col: usize,
    height: usize,
    width: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let rows = row.saturating_sub(1)..=(row + 1).min(height.saturating_sub(1));
    rows.flat_map(move |r| {
        let cols = col.saturating_sub(1)..=(col + 1).min(width.saturating_sub(1));
        cols.map(move |c| (r, c))
    })
    .filter(move |&(r, c)| r < height && c < width && (r, c) != (row, col))
}

fn check_dimensions(width: usize, height: usize) -> Result<usize, ConfigError> {
    if width == 0 {
        return Err(ConfigError::ZeroWidth);
    }
    if height == 0 {
        return Err(ConfigError::ZeroHeight);
    }
    width
        .checked_mul(height)
        .ok_or(ConfigError::BoardTooLarge { width, height })
}

// at least one mine and one safe cell, and the count must fit the i32 counter
fn check_mine_count(mine_count: usize, cells: usize) -> Result<(), ConfigError> {
    if mine_count == 0 || mine_count >= cells {
        return Err(ConfigError::MineFractionOutOfRange(
            mine_count as f64 / cells as f64,
        ));
    }
    if i32::try_from(mine_count).is_err() {
        return Err(ConfigError::TooManyMines(mine_count));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    mine_fraction: f64,
    mine_count: usize,
    cells: Vec<Cell>,
    revealed_safe: usize,
    marked: BTreeSet<(usize, usize)>,
    interactive: bool,
}

impl Board {
    /// Generate a board with `floor(width * height * mine_fraction)` mines
    /// placed by a uniform shuffle drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self::shuffled(
            config.width,
            config.height,
            config.mine_fraction,
            config.mine_count(),
            rng,
        ))
    }

    /// Generate a board with exactly `mine_count` mines.
    ///
    /// The count must leave at least one mine and one safe cell.
    pub fn with_mine_count<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let cells = check_dimensions(width, height)?;
        check_mine_count(mine_count, cells)?;
        let fraction = mine_count as f64 / cells as f64;
        Ok(Self::shuffled(width, height, fraction, mine_count, rng))
    }

    fn shuffled<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        mine_fraction: f64,
        mine_count: usize,
        rng: &mut R,
    ) -> Self {
        let mut mines: Vec<bool> = (0..width * height).map(|i| i < mine_count).collect();
        mines.shuffle(rng);
        info!(
            "Generated {}x{} board with {} mines",
            width, height, mine_count
        );
        Self::build(width, height, mine_fraction, &mines)
    }

    /// Build a board from a fixed row-major mine layout.
    pub fn from_layout<L: AsRef<[bool]>>(rows: &[L]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyLayout.into());
        }
        let mut mines = Vec::with_capacity(width * height);
        for (row, cols) in rows.iter().enumerate() {
            let cols = cols.as_ref();
            if cols.len() != width {
                return Err(ConfigError::RaggedLayout {
                    row,
                    expected: width,
                    found: cols.len(),
                }
                .into());
            }
            mines.extend_from_slice(cols);
        }
        let mine_count = mines.iter().filter(|&&m| m).count();
        check_mine_count(mine_count, mines.len())?;
        let fraction = mine_count as f64 / mines.len() as f64;
        Ok(Self::build(width, height, fraction, &mines))
    }

    fn build(width: usize, height: usize, mine_fraction: f64, mines: &[bool]) -> Self {
        let mut cells: Vec<Cell> = mines
            .iter()
            .enumerate()
            .map(|(i, &mine)| Cell::new(i / width, i % width, mine))
            .collect();
        let mut mine_count = 0;
        for (i, &mine) in mines.iter().enumerate() {
            if !mine {
                continue;
            }
            mine_count += 1;
            for (r, c) in neighbors(i / width, i % width, height, width) {
                cells[r * width + c].inc_neighbor_mines();
            }
        }
        Board {
            width,
            height,
            mine_fraction,
            mine_count,
            cells,
            revealed_safe: 0,
            marked: BTreeSet::new(),
            interactive: true,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mine_fraction(&self) -> f64 {
        self.mine_fraction
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Number of non-mine cells.
    pub fn safe_cells(&self) -> usize {
        self.cells.len() - self.mine_count
    }

    /// Safe cells revealed so far.
    pub fn revealed_safe(&self) -> usize {
        self.revealed_safe
    }

    /// False once the end-of-game display has frozen the board.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn has_won(&self) -> bool {
        self.revealed_safe == self.safe_cells()
    }

    /// Coordinates of cells currently carrying either mark, in row-major order.
    pub fn marked_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.marked.iter().copied()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).ok().map(|i| &self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// In-bounds neighbors of a cell on this board.
    pub fn neighbors_of(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        neighbors(row, col, self.height, self.width)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.height || col >= self.width {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(row * self.width + col)
        }
    }

    /// Open a hidden, unmarked cell, cascading through zero-count cells.
    pub fn reveal(
        &mut self,
        row: usize,
        col: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<RevealOutcome, BoardError> {
        let idx = self.index(row, col)?;
        if !self.interactive {
            return Ok(RevealOutcome::Ignored);
        }
        let cell = &mut self.cells[idx];
        if cell.state() != CellState::Hidden {
            debug!(
                "Ignoring reveal on {:?} cell ({}, {})",
                cell.state(),
                row,
                col
            );
            return Ok(RevealOutcome::Ignored);
        }
        if cell.is_mine() {
            cell.detonate();
            info!("Mine hit at ({}, {})", row, col);
            return Ok(RevealOutcome::MineHit);
        }

        let opened = self.open_from(row, col, events);
        debug!("Reveal at ({}, {}) opened {} cells", row, col, opened);
        if self.has_won() {
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Opened(opened))
        }
    }

    fn open_from(&mut self, row: usize, col: usize, events: &mut Vec<GameEvent>) -> usize {
        let mut stack = vec![(row, col)];
        let mut visited = vec![false; self.cells.len()];
        let mut opened = 0;

        while let Some((r, c)) = stack.pop() {
            let idx = r * self.width + c;
            if core::mem::replace(&mut visited[idx], true) {
                continue;
            }
            let cell = &mut self.cells[idx];
            if cell.is_mine() || !cell.reveal() {
                continue;
            }
            let neighbor_mines = cell.neighbor_mines();
            self.revealed_safe += 1;
            opened += 1;
            events.push(GameEvent::CellRevealed {
                row: r,
                col: c,
                neighbor_mines,
            });

            // win is checked per cell, the remaining worklist is dropped
            if self.has_won() {
                break;
            }
            if neighbor_mines == 0 {
                stack.extend(neighbors(r, c, self.height, self.width));
            }
        }
        opened
    }

    /// Advance the mark on a hidden or marked cell.
    pub fn cycle_mark(
        &mut self,
        row: usize,
        col: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<MarkOutcome, BoardError> {
        let idx = self.index(row, col)?;
        if !self.interactive {
            return Ok(MarkOutcome::Ignored);
        }
        let cell = &mut self.cells[idx];
        let before = cell.state();
        let Some(state) = cell.cycle_mark() else {
            debug!("Ignoring mark on {:?} cell ({}, {})", before, row, col);
            return Ok(MarkOutcome::Ignored);
        };

        if state.is_marked() {
            self.marked.insert((row, col));
        } else {
            self.marked.remove(&(row, col));
        }
        let believed_delta = match (before, state) {
            (_, CellState::FlaggedAsMine) => -1,
            (CellState::FlaggedAsMine, _) => 1,
            _ => 0,
        };
        debug!("Cell ({}, {}) now {:?}", row, col, state);
        events.push(GameEvent::CellMarkChanged { row, col, state });
        Ok(MarkOutcome::Changed {
            state,
            believed_delta,
        })
    }

    /// Flag every mine that is not already flagged as a mine.
    pub fn mark_all_mines_on_win(&mut self, events: &mut Vec<GameEvent>) {
        for cell in self.cells.iter_mut().filter(|c| c.is_mine()) {
            if !matches!(
                cell.state(),
                CellState::Hidden | CellState::FlaggedAsUnknown
            ) {
                continue;
            }
            cell.mark_bomb();
            let (row, col) = (cell.row(), cell.col());
            self.marked.insert((row, col));
            events.push(GameEvent::CellMarkChanged {
                row,
                col,
                state: cell.state(),
            });
        }
    }

    /// Freeze every marked cell and every mine, then stop accepting input.
    pub fn disable_all_marked_and_mine_cells(&mut self, events: &mut Vec<GameEvent>) {
        self.interactive = false;
        for cell in &self.cells {
            let (row, col) = (cell.row(), cell.col());
            if !cell.is_mine() && !self.marked.contains(&(row, col)) {
                continue;
            }
            let indicator = match cell.state() {
                CellState::Detonated => EndIndicator::Detonated,
                state if state.is_marked() => EndIndicator::Marked {
                    mine: cell.is_mine(),
                },
                _ => EndIndicator::UnmarkedMine,
            };
            events.push(GameEvent::CellFrozen {
                row,
                col,
                indicator,
            });
        }
    }
}

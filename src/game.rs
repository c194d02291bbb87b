use alloc::vec::Vec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::{Board, MarkOutcome, RevealOutcome},
    common::{BoardError, ConfigError},
    config::BoardConfig,
    event::GameEvent,
};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Won,
    Lost,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Ended(Outcome),
}

/// One player's sequence of games on a fixed configuration.
///
/// Intents (`start`, `primary_action`, `secondary_action`, `tick`) return
/// the notifications they produced, in order. Intents that arrive while no
/// game is in progress are ignored and return no events.
pub struct GameSession<R: Rng = SmallRng> {
    config: BoardConfig,
    /// Exact mine count kept from a fixed layout, reused on restart.
    fixed_mine_count: Option<usize>,
    rng: R,
    board: Option<Board>,
    elapsed_seconds: u32,
    bombs_believed_remaining: i32,
    state: SessionState,
}

impl<R: Rng> GameSession<R> {
    /// Create an idle session; `start` generates the first board.
    pub fn new(config: BoardConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            fixed_mine_count: None,
            rng,
            board: None,
            elapsed_seconds: 0,
            bombs_believed_remaining: believed_count(config.mine_count()),
            state: SessionState::NotStarted,
        })
    }

    /// Create a session around a prepared board and start it immediately.
    /// Restarts keep the board's dimensions and exact mine count.
    pub fn with_board(board: Board, rng: R) -> (Self, Vec<GameEvent>) {
        let config = BoardConfig::new(board.width(), board.height(), board.mine_fraction());
        let mut session = Self {
            config,
            fixed_mine_count: Some(board.mine_count()),
            rng,
            board: None,
            elapsed_seconds: 0,
            bombs_believed_remaining: 0,
            state: SessionState::NotStarted,
        };
        let events = session.install(board);
        (session, events)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::InProgress
    }

    /// Board of the current or most recently finished game.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Mine count minus cells flagged as a mine; negative when over-flagged.
    pub fn bombs_believed_remaining(&self) -> i32 {
        self.bombs_believed_remaining
    }

    /// Discard any previous board and begin a new game.
    pub fn start(&mut self) -> Result<Vec<GameEvent>, BoardError> {
        let board = match self.fixed_mine_count {
            Some(mines) => {
                Board::with_mine_count(self.config.width, self.config.height, mines, &mut self.rng)?
            }
            None => Board::new(&self.config, &mut self.rng)?,
        };
        Ok(self.install(board))
    }

    /// Same as [`GameSession::start`]; valid in every state.
    pub fn restart(&mut self) -> Result<Vec<GameEvent>, BoardError> {
        self.start()
    }

    fn install(&mut self, board: Board) -> Vec<GameEvent> {
        info!(
            "Starting game: {}x{} with {} mines",
            board.width(),
            board.height(),
            board.mine_count()
        );
        let events = alloc::vec![
            GameEvent::GameStarted {
                width: board.width(),
                height: board.height(),
                mine_count: board.mine_count(),
            },
            GameEvent::BombsRemainingChanged {
                count: believed_count(board.mine_count()),
            },
            GameEvent::TimerChanged { seconds: 0 },
        ];
        self.elapsed_seconds = 0;
        self.bombs_believed_remaining = believed_count(board.mine_count());
        self.board = Some(board);
        self.state = SessionState::InProgress;
        events
    }

    /// One second of the external clock.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if !self.is_active() {
            return Vec::new();
        }
        self.elapsed_seconds += 1;
        alloc::vec![GameEvent::TimerChanged {
            seconds: self.elapsed_seconds,
        }]
    }

    /// Reveal the cell at (row, col).
    pub fn primary_action(&mut self, row: usize, col: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let Some(board) = self.active_board() else {
            debug!("Ignoring reveal at ({}, {}): no game in progress", row, col);
            return events;
        };
        match board.reveal(row, col, &mut events) {
            Ok(RevealOutcome::MineHit) => self.end_game(false, &mut events),
            Ok(RevealOutcome::Won) => self.end_game(true, &mut events),
            Ok(RevealOutcome::Opened(_)) | Ok(RevealOutcome::Ignored) => {}
            Err(e) => warn!("Invalid reveal: {}", e),
        }
        events
    }

    /// Cycle the mark on the cell at (row, col).
    pub fn secondary_action(&mut self, row: usize, col: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let Some(board) = self.active_board() else {
            debug!("Ignoring mark at ({}, {}): no game in progress", row, col);
            return events;
        };
        match board.cycle_mark(row, col, &mut events) {
            Ok(MarkOutcome::Changed { believed_delta, .. }) if believed_delta != 0 => {
                self.bombs_believed_remaining += believed_delta;
                events.push(GameEvent::BombsRemainingChanged {
                    count: self.bombs_believed_remaining,
                });
            }
            Ok(_) => {}
            Err(e) => warn!("Invalid mark: {}", e),
        }
        events
    }

    fn active_board(&mut self) -> Option<&mut Board> {
        if self.is_active() {
            self.board.as_mut()
        } else {
            None
        }
    }

    fn end_game(&mut self, won: bool, events: &mut Vec<GameEvent>) {
        let outcome = if won { Outcome::Won } else { Outcome::Lost };
        self.state = SessionState::Ended(outcome);
        if let Some(board) = self.board.as_mut() {
            if won {
                board.mark_all_mines_on_win(events);
            }
            board.disable_all_marked_and_mine_cells(events);
        }
        info!(
            "Game ended: {:?} after {} seconds",
            outcome, self.elapsed_seconds
        );
        events.push(GameEvent::GameEnded {
            won,
            elapsed_seconds: self.elapsed_seconds,
        });
    }
}

// board construction rejects counts above i32::MAX
fn believed_count(mine_count: usize) -> i32 {
    i32::try_from(mine_count).unwrap_or(i32::MAX)
}

#![cfg(feature = "std")]

//! Plain-text rendering for the terminal front end.

use std::fmt::Write as _;
use std::io::Write;

use crate::{
    board::Board,
    cell::{Cell, CellState},
    event::{EndIndicator, Observer},
};

fn cell_glyph(cell: &Cell, game_over: bool) -> char {
    match cell.state() {
        CellState::Revealed => match cell.neighbor_mines() {
            0 => '.',
            n => char::from(b'0' + n),
        },
        CellState::FlaggedAsMine => 'X',
        CellState::FlaggedAsUnknown => '?',
        CellState::Detonated => '*',
        CellState::Hidden if game_over && cell.is_mine() => 'B',
        CellState::Hidden => '#',
    }
}

/// Render the player's view of the board with row and column indices.
/// Unmarked mines are shown as `B` once the board is frozen.
pub fn render_board(board: &Board) -> String {
    let game_over = !board.is_interactive();
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..board.width() {
        let _ = write!(out, "{:>3}", c);
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:>3} ", r);
        for cell in row {
            let _ = write!(out, "{:>3}", cell_glyph(cell, game_over));
        }
        out.push('\n');
    }
    out
}

/// A line typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reveal { row: usize, col: usize },
    Mark { row: usize, col: usize },
    Quit,
}

fn parse_index(part: Option<&str>, what: &str) -> Result<usize, String> {
    let part = part.ok_or_else(|| format!("Missing {}", what))?;
    part.parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number", what, part))
}

/// Parse `start`, `quit`, `r <row> <col>` or `f <row> <col>`.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err("Empty input".to_string());
    };
    let verb = verb.to_ascii_lowercase();
    let reveal = match verb.as_str() {
        "start" | "restart" | "s" => return Ok(Command::Start),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "reveal" | "r" => true,
        "flag" | "mark" | "f" => false,
        other => return Err(format!("Unknown command '{}'", other)),
    };
    let row = parse_index(parts.next(), "row")?;
    let col = parse_index(parts.next(), "column")?;
    if parts.next().is_some() {
        return Err("Too many arguments - expected <row> <col>".to_string());
    }
    Ok(if reveal {
        Command::Reveal { row, col }
    } else {
        Command::Mark { row, col }
    })
}

/// Observer keeping the scoreboard and writing game messages to `out`.
pub struct EventPrinter<W: Write> {
    out: W,
    bombs_left: i32,
    elapsed_seconds: u32,
    wrong_marks: usize,
}

impl<W: Write> EventPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bombs_left: 0,
            elapsed_seconds: 0,
            wrong_marks: 0,
        }
    }

    /// `Bombs left: N    Time: S`
    pub fn status_line(&self) -> String {
        format!(
            "Bombs left: {}    Time: {}",
            self.bombs_left, self.elapsed_seconds
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for EventPrinter<W> {
    fn on_game_started(&mut self, width: usize, height: usize, mine_count: usize) {
        self.wrong_marks = 0;
        let _ = writeln!(
            self.out,
            "New game: {}x{} with {} bombs",
            width, height, mine_count
        );
    }

    fn on_cell_frozen(&mut self, _row: usize, _col: usize, indicator: EndIndicator) {
        if matches!(indicator, EndIndicator::Marked { mine: false }) {
            self.wrong_marks += 1;
        }
    }

    fn on_bombs_remaining_changed(&mut self, count: i32) {
        self.bombs_left = count;
    }

    // redrawn with the board, not on every tick
    fn on_timer_changed(&mut self, seconds: u32) {
        self.elapsed_seconds = seconds;
    }

    fn on_game_ended(&mut self, won: bool, elapsed_seconds: u32) {
        let _ = if won {
            writeln!(
                self.out,
                "Congratulations! It took you {} seconds to win!",
                elapsed_seconds
            )
        } else {
            writeln!(
                self.out,
                "Sorry, you lose! It took you {} seconds to lose! ({} cells marked wrongly)",
                elapsed_seconds, self.wrong_marks
            )
        };
    }
}

use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    event::GameEvent,
    game::{GameSession, Outcome, SessionState},
};

/// An intent a player can send to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "action", rename_all = "snake_case"))]
pub enum Action {
    Reveal { row: usize, col: usize },
    Mark { row: usize, col: usize },
}

/// Interface implemented by automatic players.
///
/// Implementations must only read what a human could see: cell states and
/// `Cell::visible_count`.
pub trait Player {
    /// Choose the next action, or `None` when there is nothing left to do.
    fn select_action(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Action>;

    /// Inform the player of the events its last action produced.
    fn handle_events(&mut self, _events: &[GameEvent]) {}
}

/// Summary of one automatically played game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayReport {
    /// `None` if the action budget ran out first.
    pub outcome: Option<Outcome>,
    pub actions: usize,
    pub elapsed_seconds: u32,
}

/// Drive an in-progress session with `player`, ticking the clock once per
/// action, until the game ends or `max_actions` is reached.
pub fn play_session<R: Rng, P: Player + ?Sized>(
    session: &mut GameSession<R>,
    player: &mut P,
    rng: &mut SmallRng,
    max_actions: usize,
) -> PlayReport {
    let mut actions = 0;
    while session.is_active() && actions < max_actions {
        let Some(action) = session.board().and_then(|b| player.select_action(rng, b)) else {
            break;
        };
        actions += 1;
        let mut events = match action {
            Action::Reveal { row, col } => session.primary_action(row, col),
            Action::Mark { row, col } => session.secondary_action(row, col),
        };
        events.extend(session.tick());
        player.handle_events(&events);
    }

    let outcome = match session.state() {
        SessionState::Ended(outcome) => Some(outcome),
        SessionState::NotStarted | SessionState::InProgress => None,
    };
    PlayReport {
        outcome,
        actions,
        elapsed_seconds: session.elapsed_seconds(),
    }
}

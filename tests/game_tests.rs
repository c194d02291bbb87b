use minesweeper::{
    dispatch_all, play_session, AiPlayer, Board, BoardConfig, CellState, ConfigError,
    EndIndicator, GameEvent, GameSession, Observer, Outcome, SessionState,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const M: bool = true;
const O: bool = false;

fn two_by_two() -> GameSession {
    let board = Board::from_layout(&[[M, O], [O, O]]).unwrap();
    let (session, _) = GameSession::with_board(board, SmallRng::seed_from_u64(1));
    session
}

fn game_ended(events: &[GameEvent]) -> Option<(bool, u32)> {
    events.iter().find_map(|e| match *e {
        GameEvent::GameEnded {
            won,
            elapsed_seconds,
        } => Some((won, elapsed_seconds)),
        _ => None,
    })
}

#[test]
fn test_new_session_is_idle() {
    let mut session = GameSession::new(BoardConfig::default(), SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(session.state(), SessionState::NotStarted);
    assert!(!session.is_active());
    assert!(session.board().is_none());
    assert!(session.tick().is_empty());
    assert!(session.primary_action(0, 0).is_empty());
    assert!(session.secondary_action(0, 0).is_empty());
    assert_eq!(session.elapsed_seconds(), 0);
}

#[test]
fn test_invalid_config_fails_fast() {
    let err = GameSession::new(BoardConfig::new(10, 10, 1.5), SmallRng::seed_from_u64(3))
        .err()
        .unwrap();
    assert_eq!(err, ConfigError::MineFractionOutOfRange(1.5));
}

#[test]
fn test_start_announces_new_game() {
    let mut session = GameSession::new(BoardConfig::default(), SmallRng::seed_from_u64(3)).unwrap();
    let events = session.start().unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::GameStarted {
                width: 20,
                height: 20,
                mine_count: 56
            },
            GameEvent::BombsRemainingChanged { count: 56 },
            GameEvent::TimerChanged { seconds: 0 },
        ]
    );
    assert!(session.is_active());
    assert_eq!(session.bombs_believed_remaining(), 56);
}

#[test]
fn test_win_ends_game_and_marks_mines() {
    let mut session = two_by_two();
    session.tick();
    session.tick();
    assert!(game_ended(&session.primary_action(0, 1)).is_none());
    assert!(game_ended(&session.primary_action(1, 0)).is_none());
    let events = session.primary_action(1, 1);

    assert_eq!(game_ended(&events), Some((true, 2)));
    assert_eq!(session.state(), SessionState::Ended(Outcome::Won));
    assert!(events.contains(&GameEvent::CellMarkChanged {
        row: 0,
        col: 0,
        state: CellState::FlaggedAsMine
    }));
    assert!(events.contains(&GameEvent::CellFrozen {
        row: 0,
        col: 0,
        indicator: EndIndicator::Marked { mine: true }
    }));
    assert_eq!(events.last(), Some(&GameEvent::GameEnded { won: true, elapsed_seconds: 2 }));
}

#[test]
fn test_mine_hit_ends_game_without_win() {
    let mut session = two_by_two();
    let events = session.primary_action(0, 0);
    assert_eq!(game_ended(&events), Some((false, 0)));
    assert_eq!(session.state(), SessionState::Ended(Outcome::Lost));
    assert!(events.contains(&GameEvent::CellFrozen {
        row: 0,
        col: 0,
        indicator: EndIndicator::Detonated
    }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::GameEnded { won: true, .. })));
}

#[test]
fn test_ended_session_ignores_intents() {
    let mut session = two_by_two();
    session.primary_action(0, 0);
    assert!(session.tick().is_empty());
    assert!(session.primary_action(1, 1).is_empty());
    assert!(session.secondary_action(1, 1).is_empty());
    assert_eq!(session.elapsed_seconds(), 0);
    assert_eq!(session.board().unwrap().revealed_safe(), 0);
}

#[test]
fn test_three_mark_steps_restore_counter() {
    let mut session = two_by_two();
    let first = session.secondary_action(1, 1);
    assert!(first.contains(&GameEvent::BombsRemainingChanged { count: 0 }));
    let second = session.secondary_action(1, 1);
    assert!(second.contains(&GameEvent::BombsRemainingChanged { count: 1 }));
    let third = session.secondary_action(1, 1);
    assert_eq!(
        third,
        vec![GameEvent::CellMarkChanged {
            row: 1,
            col: 1,
            state: CellState::Hidden
        }]
    );
    assert_eq!(session.bombs_believed_remaining(), 1);
    assert_eq!(
        session.board().unwrap().cell(1, 1).unwrap().state(),
        CellState::Hidden
    );
}

#[test]
fn test_over_flagging_goes_negative() {
    let mut session = two_by_two();
    for (r, c) in [(0, 0), (0, 1), (1, 0)] {
        session.secondary_action(r, c);
    }
    assert_eq!(session.bombs_believed_remaining(), -2);
}

#[test]
fn test_out_of_bounds_intents_are_ignored() {
    let mut session = two_by_two();
    assert!(session.primary_action(5, 5).is_empty());
    assert!(session.secondary_action(0, 9).is_empty());
    assert!(session.is_active());
}

#[test]
fn test_ticks_count_only_while_active() {
    let mut session = two_by_two();
    for _ in 0..3 {
        session.tick();
    }
    assert_eq!(session.tick(), vec![GameEvent::TimerChanged { seconds: 4 }]);
    session.primary_action(0, 0);
    for _ in 0..3 {
        session.tick();
    }
    assert_eq!(session.elapsed_seconds(), 4);
}

#[test]
fn test_restart_fully_resets() {
    let config = BoardConfig::new(8, 8, 0.15);
    let mut session = GameSession::new(config, SmallRng::seed_from_u64(11)).unwrap();
    session.start().unwrap();
    let mut ai_rng = SmallRng::seed_from_u64(12);
    let report = play_session(&mut session, &mut AiPlayer::new(), &mut ai_rng, 1_000);
    assert!(report.outcome.is_some());
    assert!(!session.is_active());

    session.restart().unwrap();
    let board = session.board().unwrap();
    assert_eq!(board.revealed_safe(), 0);
    assert!(board.is_interactive());
    assert!(board.cells().all(|c| c.state() == CellState::Hidden));
    assert_eq!(session.bombs_believed_remaining(), config.mine_count() as i32);
    assert_eq!(session.elapsed_seconds(), 0);
    assert_eq!(session.state(), SessionState::InProgress);
}

#[test]
fn test_restart_mid_game_replaces_board() {
    let mut session = two_by_two();
    session.secondary_action(1, 1);
    session.tick();
    session.restart().unwrap();
    assert_eq!(session.bombs_believed_remaining(), 1);
    assert_eq!(session.elapsed_seconds(), 0);
    assert_eq!(session.board().unwrap().marked_cells().count(), 0);
    assert_eq!(session.board().unwrap().mine_count(), 1);
}

#[test]
fn test_restart_keeps_layout_mine_count() {
    let mut layout = [[O; 7]; 7];
    layout[3][3] = M;
    let board = Board::from_layout(&layout).unwrap();
    let (mut session, _) = GameSession::with_board(board, SmallRng::seed_from_u64(9));
    for _ in 0..5 {
        let events = session.restart().unwrap();
        assert_eq!(
            events[0],
            GameEvent::GameStarted {
                width: 7,
                height: 7,
                mine_count: 1
            }
        );
        let board = session.board().unwrap();
        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.cells().filter(|c| c.is_mine()).count(), 1);
        assert_eq!(session.bombs_believed_remaining(), 1);
    }
}

#[derive(Default)]
struct Recorder {
    revealed: usize,
    marks: Vec<CellState>,
    bombs: Vec<i32>,
    ended: Option<(bool, u32)>,
}

impl Observer for Recorder {
    fn on_cell_revealed(&mut self, _row: usize, _col: usize, _neighbor_mines: u8) {
        self.revealed += 1;
    }

    fn on_cell_mark_changed(&mut self, _row: usize, _col: usize, state: CellState) {
        self.marks.push(state);
    }

    fn on_bombs_remaining_changed(&mut self, count: i32) {
        self.bombs.push(count);
    }

    fn on_game_ended(&mut self, won: bool, elapsed_seconds: u32) {
        self.ended = Some((won, elapsed_seconds));
    }
}

#[test]
fn test_events_reach_observer_callbacks() {
    let board = Board::from_layout(&[[M, O], [O, O]]).unwrap();
    let (mut session, started) = GameSession::with_board(board, SmallRng::seed_from_u64(1));
    let mut recorder = Recorder::default();
    dispatch_all(&started, &mut recorder);
    for events in [
        session.secondary_action(0, 0),
        session.primary_action(0, 1),
        session.primary_action(1, 0),
        session.primary_action(1, 1),
    ] {
        dispatch_all(&events, &mut recorder);
    }
    assert_eq!(recorder.revealed, 3);
    assert_eq!(recorder.marks, vec![CellState::FlaggedAsMine]);
    assert_eq!(recorder.bombs, vec![1, 0]);
    assert_eq!(recorder.ended, Some((true, 0)));
}

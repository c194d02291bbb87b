#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use minesweeper::{
    dispatch_all, init_logging, play_session,
    ui::{parse_command, render_board, Command, EventPrinter},
    AiPlayer, BoardConfig, GameEvent, GameSession, DEFAULT_HEIGHT, DEFAULT_MINE_FRACTION,
    DEFAULT_WIDTH,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::sync::mpsc;
#[cfg(feature = "std")]
use tokio::time::{interval, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    #[arg(long, default_value_t = DEFAULT_MINE_FRACTION)]
    mine_fraction: f64,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl BoardArgs {
    fn config(&self) -> BoardConfig {
        BoardConfig::new(self.width, self.height, self.mine_fraction)
    }

    fn rng(&self, stream: u64) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s.wrapping_add(stream)),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal, typing commands on stdin.
    Play {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, default_value_t = 1000, help = "Milliseconds per timer tick")]
        tick_ms: u64,
    },
    /// Let the AI play one game and print the final board.
    Auto {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, default_value_t = 10_000)]
        max_actions: usize,
    },
}

/// Everything the game loop reacts to, funneled through one queue.
#[cfg(feature = "std")]
enum Intent {
    Line(String),
    Tick,
    Quit,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { board, tick_ms } => {
            play(board, tick_ms).await?;
            // a pending stdin read would otherwise hold up runtime shutdown
            std::process::exit(0)
        }
        Commands::Auto { board, max_actions } => auto(board, max_actions),
    }
}

#[cfg(feature = "std")]
async fn play(args: BoardArgs, tick_ms: u64) -> anyhow::Result<()> {
    let mut session = GameSession::new(args.config(), args.rng(0))?;
    let (tx, mut rx) = mpsc::channel::<Intent>(64);

    let stdin_tx = tx.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if stdin_tx.send(Intent::Line(line)).await.is_err() {
                return;
            }
        }
        let _ = stdin_tx.send(Intent::Quit).await;
    });

    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(tick_ms.max(1)));
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tx.send(Intent::Tick).await.is_err() {
                return;
            }
        }
    });

    let mut printer = EventPrinter::new(std::io::stdout());
    println!("Commands: start | r <row> <col> | f <row> <col> | quit");

    while let Some(intent) = rx.recv().await {
        let events = match intent {
            Intent::Tick => session.tick(),
            Intent::Quit => break,
            Intent::Line(line) => match parse_command(&line) {
                Ok(Command::Start) => session.start()?,
                Ok(Command::Reveal { row, col }) => session.primary_action(row, col),
                Ok(Command::Mark { row, col }) => session.secondary_action(row, col),
                Ok(Command::Quit) => break,
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            },
        };
        dispatch_all(&events, &mut printer);

        let redraw = events
            .iter()
            .any(|e| !matches!(e, GameEvent::TimerChanged { .. }));
        if redraw {
            if let Some(board) = session.board() {
                print!("{}", render_board(board));
                println!("{}", printer.status_line());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn auto(args: BoardArgs, max_actions: usize) -> anyhow::Result<()> {
    let mut ai_rng = args.rng(1);
    let mut session = GameSession::new(args.config(), args.rng(0))?;
    let mut printer = EventPrinter::new(std::io::stdout());

    let events = session.start()?;
    dispatch_all(&events, &mut printer);
    let report = play_session(&mut session, &mut AiPlayer::new(), &mut ai_rng, max_actions);

    if let Some(board) = session.board() {
        print!("{}", render_board(board));
    }
    match report.outcome {
        Some(outcome) => println!(
            "{:?} after {} actions ({} seconds)",
            outcome, report.actions, report.elapsed_seconds
        ),
        None => println!("Stopped after {} actions", report.actions),
    }
    Ok(())
}

use minesweeper::{init_logging, play_session, AiPlayer, BoardConfig, GameSession, Outcome};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

const MAX_ACTIONS: usize = 10_000;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let config = BoardConfig::default();
    let mut ai_rng = SmallRng::seed_from_u64(seed.wrapping_add(u64::MAX / 2));
    let mut results = Vec::new();
    for game in 0..games {
        let mut session = GameSession::new(config, SmallRng::seed_from_u64(seed.wrapping_add(game)))?;
        session.start()?;
        let report = play_session(&mut session, &mut AiPlayer::new(), &mut ai_rng, MAX_ACTIONS);
        results.push(report);
    }

    let won = results
        .iter()
        .filter(|r| r.outcome == Some(Outcome::Won))
        .count();
    let lost = results
        .iter()
        .filter(|r| r.outcome == Some(Outcome::Lost))
        .count();
    let total_ticks: u64 = results.iter().map(|r| u64::from(r.elapsed_seconds)).sum();

    let summary = json!({
        "games": games,
        "won": won,
        "lost": lost,
        "total_ticks": total_ticks,
        "results": results,
    });

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Game, GameConfig};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::new(
        GameConfig::default(),
        SmallRng::seed_from_u64(seed),
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    )?;
    game.run()?;
    let summary = game
        .summary()
        .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))?;

    let result = json!({
        "seed": seed,
        "winner": summary.winner,
        "turns": summary.turns,
        "shots": {"first": summary.first_shots, "second": summary.second_shots},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

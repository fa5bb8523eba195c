use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, AiPlayer, AiStrategy, CliPlayer, Game, GameConfig, GameError, Side, BOARD_SIZE,
    PLACEMENT_ATTEMPTS,
};

#[derive(Parser)]
#[command(author, version, about = "Battleship against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Aim {
    /// Any cell, repeats included.
    Any,
    /// Only cells not fired upon yet.
    Untried,
}

impl From<Aim> for AiStrategy {
    fn from(aim: Aim) -> Self {
        match aim {
            Aim::Any => AiStrategy::AnyCell,
            Aim::Untried => AiStrategy::Untried,
        }
    }
}

#[derive(clap::Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, help = "Side length of the grid (6-11)")]
    size: usize,
    #[arg(long, help = "A hit lets the shooter fire again")]
    repeat_on_hit: bool,
    #[arg(long, value_enum, default_value_t = Aim::Any, help = "How the computer picks targets")]
    aim: Aim,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            board_size: self.size,
            placement_attempts: PLACEMENT_ATTEMPTS,
            repeat_on_hit: self.repeat_on_hit,
            ai_strategy: self.aim.into(),
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            }
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Watch the computer play against itself.
    Auto {
        #[command(flatten)]
        game: GameArgs,
    },
}

fn welcome(size: usize) {
    println!("Sea Battle");
    println!("Enter your move as two numbers separated by a space:");
    println!("  the first number is the row (1-{})", size);
    println!("  the second number is the column (1-{})", size);
    println!();
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game: args } => {
            let config = args.config();
            welcome(config.board_size);
            let computer = AiPlayer::with_strategy(config.ai_strategy);
            let mut game = Game::new(
                config,
                args.rng(),
                Box::new(CliPlayer::new()),
                Box::new(computer),
            )?;
            match game.run() {
                Ok(winner) => {
                    println!("\nYour board:\n{}", game.board(Side::First));
                    println!("\nComputer's board:\n{}", game.board(Side::Second));
                    match winner {
                        Side::First => println!("\nYou win!"),
                        Side::Second => println!("\nThe computer wins!"),
                    }
                }
                Err(GameError::InputClosed) => println!("\nInput closed, leaving the game."),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Auto { game: args } => {
            let config = args.config();
            let mut game = Game::new(
                config,
                args.rng(),
                Box::new(AiPlayer::with_strategy(config.ai_strategy)),
                Box::new(AiPlayer::with_strategy(config.ai_strategy)),
            )?;
            let winner = game.run()?;
            println!("First board:\n{}", game.board(Side::First));
            println!("\nSecond board:\n{}", game.board(Side::Second));
            println!("\n{:?} side wins after {} turns", winner, game.turns());
        }
    }
    Ok(())
}

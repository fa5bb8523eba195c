#![cfg(feature = "std")]

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, GameError, ShotOutcome};
use crate::coord::Coordinate;

use super::Player;

/// Parses a move typed as two one-indexed numbers, `row col`.
///
/// Range is not checked here; a zero or an oversized number comes back as
/// an off-board coordinate for the board to reject.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter 2 numbers".to_string());
    };
    if !is_number(row) || !is_number(col) {
        return Err("Enter numbers!".to_string());
    }
    let row: i32 = row
        .parse()
        .map_err(|_| format!("Row '{}' is too large", row))?;
    let col: i32 = col
        .parse()
        .map_err(|_| format!("Column '{}' is too large", col))?;
    Ok(Coordinate::new(row - 1, col - 1))
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Human player reading moves from a line-oriented input.
pub struct CliPlayer<R = StdinLock<'static>, W = Stdout> {
    input: R,
    output: W,
}

impl CliPlayer {
    /// Player on the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: impl Display) {
        if let Err(e) = writeln!(self.output, "{}", msg) {
            log::warn!("failed to write to console: {}", e);
        }
    }

    fn prompt(&mut self, size: usize) -> io::Result<()> {
        write!(self.output, "Your move (2 numbers from 1 to {}): ", size)?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, GameError> {
        loop {
            if let Err(e) = self.prompt(opponent.size()) {
                log::warn!("failed to write prompt: {}", e);
            }
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Err(GameError::InputClosed),
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read move: {}", e);
                    return Err(GameError::InputClosed);
                }
            }
            match parse_coord(&line) {
                Ok(coord) => return Ok(coord),
                Err(msg) => self.say(msg),
            }
        }
    }

    fn before_turn(&mut self, own: &Board, opponent: &Board) {
        self.say(format!("\nYour board:\n{}\n\nComputer's board:\n{}\n", own, opponent));
    }

    fn handle_shot_error(&mut self, _target: Coordinate, error: BoardError) {
        self.say(error);
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.say(format!("You fired at {}: {}", target, outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.say(format!("Computer fired at {}: {}", target, outcome));
    }
}

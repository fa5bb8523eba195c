//! Player trait, implementations and the shared turn routine.
//!
//! - AiPlayer: random shooter
//! - CliPlayer: interactive console player (std only)
//! - take_turn: asks a player for targets until the opponent's board
//!   accepts one

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, GameError, ShotOutcome};
use crate::coord::Coordinate;

/// Interface implemented by the different kinds of player.
///
/// Only target selection is required; the remaining hooks let a player
/// show what happened and default to doing nothing.
pub trait Player {
    /// Choose the next cell to fire at on `opponent`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, GameError>;

    /// Called before this player's turn with both boards.
    fn before_turn(&mut self, _own: &Board, _opponent: &Board) {}

    /// A chosen target was rejected; another will be requested.
    fn handle_shot_error(&mut self, _target: Coordinate, _error: BoardError) {}

    /// Outcome of this player's accepted shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Outcome of the opponent's shot at this player's board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

/// Whether the side that just fired keeps the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Turn passes to the opponent.
    Pass,
    /// The shot hit and repeat-on-hit is enabled.
    AgainOnHit,
}

/// What one completed turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    pub result: TurnResult,
    /// Targets the board rejected before this one.
    pub rejected: usize,
}

/// Plays one turn of `player` against `opponent`.
///
/// Off-board and repeated targets are reported back to the player and a new
/// target is requested until one is accepted.
pub fn take_turn(
    player: &mut dyn Player,
    opponent: &mut Board,
    rng: &mut SmallRng,
    repeat_on_hit: bool,
) -> Result<TurnReport, GameError> {
    let mut rejected = 0;
    loop {
        let target = player.select_target(rng, opponent)?;
        match opponent.resolve_shot(target) {
            Ok(outcome) => {
                player.handle_shot_result(target, outcome);
                let result = if repeat_on_hit && outcome.is_hit() {
                    TurnResult::AgainOnHit
                } else {
                    TurnResult::Pass
                };
                return Ok(TurnReport {
                    target,
                    outcome,
                    result,
                    rejected,
                });
            }
            Err(e) if e.is_retryable() => {
                log::trace!("target {} rejected: {}", target, e);
                rejected += 1;
                player.handle_shot_error(target, e);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coord, CliPlayer};

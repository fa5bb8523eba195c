use crate::common::BoardError;

/// Default side length of the square grid.
pub const BOARD_SIZE: usize = 6;
/// Largest grid the packed busy sets can hold (11 × 11 = 121 bits of `u128`).
pub const MAX_BOARD_SIZE: usize = 11;
/// Smallest grid the default fleet is known to fit on.
pub const MIN_BOARD_SIZE: usize = 6;
/// Ship lengths of the default fleet, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];
pub const NUM_SHIPS: usize = 7;
/// Placement attempts allowed for one full-fleet try before starting over.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// How the automated player picks its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiStrategy {
    /// Any cell on the board; repeats are rejected by the board and redrawn.
    #[default]
    AnyCell,
    /// Only cells that have not been fired upon yet.
    Untried,
}

/// Tunables for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub placement_attempts: usize,
    /// A hit or sink lets the same side shoot again.
    pub repeat_on_hit: bool,
    pub ai_strategy: AiStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            placement_attempts: PLACEMENT_ATTEMPTS,
            repeat_on_hit: false,
            ai_strategy: AiStrategy::AnyCell,
        }
    }
}

impl GameConfig {
    /// Rejects grids the fleet cannot reliably be placed on, and attempt
    /// budgets too small to ever place every ship.
    pub fn validate(&self) -> Result<(), BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(BoardError::InvalidSize(self.board_size));
        }
        if self.placement_attempts < NUM_SHIPS {
            return Err(BoardError::InvalidBudget(self.placement_attempts));
        }
        Ok(())
    }
}

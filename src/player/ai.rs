use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::AiStrategy;
use crate::coord::Coordinate;

use super::Player;

/// Computer player that fires at random cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPlayer {
    strategy: AiStrategy,
}

impl AiPlayer {
    /// Draws from the whole board, repeats included.
    pub fn new() -> Self {
        Self::with_strategy(AiStrategy::AnyCell)
    }

    /// Draws only among cells not fired upon yet.
    pub fn untried() -> Self {
        Self::with_strategy(AiStrategy::Untried)
    }

    pub fn with_strategy(strategy: AiStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> AiStrategy {
        self.strategy
    }
}

fn any_cell(rng: &mut SmallRng, size: usize) -> Coordinate {
    Coordinate::new(
        rng.random_range(0..size) as i32,
        rng.random_range(0..size) as i32,
    )
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, GameError> {
        let size = opponent.size();
        let target = match self.strategy {
            AiStrategy::AnyCell => any_cell(rng, size),
            AiStrategy::Untried => {
                let open = size * size - opponent.targeted_count();
                if open == 0 {
                    any_cell(rng, size)
                } else {
                    let pick = rng.random_range(0..open);
                    (0..size * size)
                        .map(|i| Coordinate::new((i / size) as i32, (i % size) as i32))
                        .filter(|c| !opponent.is_targeted(*c))
                        .nth(pick)
                        .unwrap_or_else(|| any_cell(rng, size))
                }
            }
        };
        log::debug!("computer fires at {}", target);
        Ok(target)
    }
}

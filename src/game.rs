#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{GameConfig, NUM_SHIPS};
use crate::fleet;
use crate::player::{take_turn, Player, TurnReport, TurnResult};

/// One of the two seats at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Setup,
    InProgress,
    Finished { winner: Side },
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub winner: Side,
    /// Accepted shots by both sides.
    pub turns: usize,
    pub first_shots: usize,
    pub second_shots: usize,
}

struct Seat {
    player: Box<dyn Player>,
    board: Board,
    shots: usize,
}

/// Two players, their boards, and whose turn it is.
pub struct Game {
    config: GameConfig,
    rng: SmallRng,
    seats: [Seat; 2],
    status: GameStatus,
    turn: Side,
    turns: usize,
}

impl Game {
    /// New game in the setup phase. `first` moves first.
    pub fn new(
        config: GameConfig,
        rng: SmallRng,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let seat = |player: Box<dyn Player>| -> Result<Seat, GameError> {
            Ok(Seat {
                player,
                board: Board::with_size(config.board_size)?,
                shots: 0,
            })
        };
        Ok(Game {
            config,
            rng,
            seats: [seat(first)?, seat(second)?],
            status: GameStatus::Setup,
            turn: Side::First,
            turns: 0,
        })
    }

    /// Lays out a random fleet for each side and starts play. The second
    /// side's board is hidden when rendered.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Setup {
            return Err(GameError::WrongPhase);
        }
        for seat in self.seats.iter_mut() {
            seat.board = fleet::random_board(&mut self.rng, &self.config)?;
        }
        self.seats[Side::Second.index()].board.set_hidden(true);
        self.status = GameStatus::InProgress;
        log::info!("fleets placed, game started");
        Ok(())
    }

    /// Plays one turn for the side to move.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::WrongPhase);
        }
        let side = self.turn;
        let [first, second] = &mut self.seats;
        let (active, passive) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        active.player.before_turn(&active.board, &passive.board);
        let report = take_turn(
            active.player.as_mut(),
            &mut passive.board,
            &mut self.rng,
            self.config.repeat_on_hit,
        )?;
        passive.player.handle_opponent_shot(report.target, report.outcome);
        active.shots += 1;
        self.turns += 1;
        log::debug!("{:?} fired at {}: {:?}", side, report.target, report.outcome);

        if let Some(winner) = self.winner() {
            log::info!("{:?} wins after {} turns", winner, self.turns);
            self.status = GameStatus::Finished { winner };
        } else if report.result == TurnResult::Pass {
            self.turn = side.opponent();
        }
        Ok(report)
    }

    /// Side whose opponent has lost the whole fleet, if any.
    fn winner(&self) -> Option<Side> {
        [Side::First, Side::Second]
            .into_iter()
            .find(|s| self.board(s.opponent()).destroyed_count() == NUM_SHIPS)
    }

    /// Runs setup if needed, then plays until one fleet is destroyed.
    pub fn run(&mut self) -> Result<Side, GameError> {
        if self.status == GameStatus::Setup {
            self.setup()?;
        }
        loop {
            if let GameStatus::Finished { winner } = self.status {
                return Ok(winner);
            }
            self.play_turn()?;
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move next.
    pub fn current_side(&self) -> Side {
        self.turn
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Summary once the game is finished.
    pub fn summary(&self) -> Option<GameSummary> {
        match self.status {
            GameStatus::Finished { winner } => Some(GameSummary {
                winner,
                turns: self.turns,
                first_shots: self.seats[0].shots,
                second_shots: self.seats[1].shots,
            }),
            _ => None,
        }
    }
}

//! Common types for the game: shot outcomes and error kinds.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::NUM_SHIPS;
use crate::coord::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship on the cell.
    Miss,
    /// A ship was damaged but is still afloat.
    Hit,
    /// The last healthy cell of a ship, carrying its length.
    Sunk { length: usize },
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss"),
            ShotOutcome::Hit => write!(f, "Hit! The ship is damaged"),
            ShotOutcome::Sunk { length } => write!(f, "Sunk a {}-deck ship", length),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot lands outside the grid.
    OutOfBounds(Coordinate),
    /// Cell was already fired upon or is known to be empty.
    AlreadyTargeted(Coordinate),
    /// Ship leaves the grid or touches another ship or its buffer.
    InvalidPlacement,
    /// Ships can no longer be placed once play has begun.
    PlacementClosed,
    /// Ships need at least one cell.
    EmptyShip,
    /// Board size outside `1..=MAX_BOARD_SIZE`.
    InvalidSize(usize),
    /// Placement attempt budget smaller than the fleet.
    InvalidBudget(usize),
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
}

impl BoardError {
    /// Errors a player can recover from by choosing another target.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_)
        )
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Shot at {} is off the board", c),
            BoardError::AlreadyTargeted(c) => write!(f, "Cell {} was already fired upon", c),
            BoardError::InvalidPlacement => write!(
                f,
                "Ship placement is out of bounds or too close to another ship"
            ),
            BoardError::PlacementClosed => write!(f, "Ships cannot be placed after play has begun"),
            BoardError::EmptyShip => write!(f, "Ship length must be at least 1"),
            BoardError::InvalidSize(n) => write!(f, "Board size {} is not supported", n),
            BoardError::InvalidBudget(n) => write!(
                f,
                "Placement budget {} is too small for a {}-ship fleet",
                n, NUM_SHIPS
            ),
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors that end a turn or a game instead of being retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board rejected an operation outside the retry path.
    Board(BoardError),
    /// The human's input stream ended.
    InputClosed,
    /// Setup or a turn was requested in the wrong phase of the game.
    WrongPhase,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::InputClosed => write!(f, "Input closed before the game finished"),
            GameError::WrongPhase => write!(f, "Operation is not valid in the current game phase"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

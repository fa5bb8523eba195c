//! Random fleet layout.
//!
//! A fleet is laid out ship by ship with random anchors and orientations.
//! Rejected draws are retried against a shared attempt budget; when the
//! budget runs out the half-built board is thrown away and the whole fleet
//! starts over on a fresh one.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{GameConfig, FLEET};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// Where a single fleet attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Placing `FLEET[next]`, with `attempts` draws spent so far.
    Placing { next: usize, attempts: usize },
    /// Every ship is on the board.
    Complete,
    /// Budget spent before the fleet was complete.
    Exhausted,
}

/// Draws a ship of `length` with a uniform anchor and orientation.
pub fn random_ship<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    length: usize,
) -> Result<Ship, BoardError> {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let anchor = Coordinate::new(
        rng.random_range(0..size) as i32,
        rng.random_range(0..size) as i32,
    );
    Ship::new(length, anchor, orientation)
}

/// One attempt at laying out `fleet` on a fresh board.
///
/// Returns `Ok(None)` when `budget` draws were not enough. The board is
/// returned still open for placement.
pub fn try_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
    budget: usize,
) -> Result<Option<Board>, BoardError> {
    let mut board = Board::with_size(size)?;
    let mut state = Layout::Placing {
        next: 0,
        attempts: 0,
    };
    loop {
        state = match state {
            Layout::Placing { next, .. } if next == fleet.len() => Layout::Complete,
            Layout::Placing { attempts, .. } if attempts >= budget => Layout::Exhausted,
            Layout::Placing { next, attempts } => {
                let ship = random_ship(rng, size, fleet[next])?;
                match board.place_ship(ship) {
                    Ok(()) => Layout::Placing {
                        next: next + 1,
                        attempts: attempts + 1,
                    },
                    Err(BoardError::InvalidPlacement) => Layout::Placing {
                        next,
                        attempts: attempts + 1,
                    },
                    Err(e) => return Err(e),
                }
            }
            Layout::Complete => return Ok(Some(board)),
            Layout::Exhausted => return Ok(None),
        };
    }
}

/// Lays out the default fleet, restarting until it fits, and opens the
/// board for play.
pub fn random_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Board, BoardError> {
    config.validate()?;
    let mut restarts = 0usize;
    loop {
        if let Some(mut board) =
            try_fleet(rng, config.board_size, &FLEET, config.placement_attempts)?
        {
            log::debug!("fleet placed after {} restart(s)", restarts);
            board.begin_play();
            return Ok(board);
        }
        restarts += 1;
        log::trace!("fleet attempt {} exhausted its budget, starting over", restarts);
    }
}

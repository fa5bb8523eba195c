//! Ship geometry and health.

use core::fmt;

use crate::common::BoardError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells run along a row (column grows).
    Horizontal,
    /// Cells run down a column (row grows).
    Vertical,
}

/// A straight ship anchored at one end.
///
/// The occupied cells are derived from `anchor`, `orientation` and `length`
/// and never change. Only `health` moves, and only the board moves it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// New undamaged ship. Fails with `EmptyShip` for a zero length.
    pub fn new(
        length: usize,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::EmptyShip);
        }
        Ok(Ship {
            length,
            anchor,
            orientation,
            health: length,
        })
    }

    /// Occupied cells, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let anchor = self.anchor;
        let orientation = self.orientation;
        (0..self.length as i32).map(move |i| anchor.step(orientation, i))
    }

    /// Whether `coord` is one of this ship's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Take one point of damage. Returns `true` if this sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Undamaged cells left.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, anchor: ({}, {}), orientation: {:?}, health: {} }}",
            self.length, self.anchor.row, self.anchor.col, self.orientation, self.health,
        )
    }
}

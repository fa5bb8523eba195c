//! Board positions.

use core::fmt;

use crate::ship::Orientation;

/// A zero-indexed `(row, col)` position.
///
/// Coordinates are plain values and may point anywhere, including negative
/// offsets next to the board edge; bounds are the board's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Position `distance` cells further along `orientation`.
    pub const fn step(self, orientation: Orientation, distance: i32) -> Self {
        match orientation {
            Orientation::Horizontal => self.offset(0, distance),
            Orientation::Vertical => self.offset(distance, 0),
        }
    }

    /// `(row, col)` as indices when both lie in `[0, size)`.
    pub fn to_index(self, size: usize) -> Option<(usize, usize)> {
        let r = usize::try_from(self.row).ok()?;
        let c = usize::try_from(self.col).ok()?;
        if r < size && c < size {
            Some((r, c))
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// One-indexed `row col`, the way players type it.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

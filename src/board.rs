//! Game board: ship placement with buffer zones, shot resolution and the
//! text rendering shown to players.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::coord::Coordinate;
use crate::ship::Ship;

type BB = BitBoard<u128, MAX_BOARD_SIZE>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    ShipPresent,
    Hit,
    Miss,
    /// Painted around a sunk ship; known to be empty.
    BufferMarker,
}

impl Cell {
    fn symbol(self, hidden: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::ShipPresent if hidden => 'O',
            Cell::ShipPresent => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::BufferMarker => '.',
        }
    }
}

/// One player's grid and fleet.
///
/// Two busy sets are tracked. `reserved` holds ship cells and their
/// surrounding ring while the fleet is being laid out; `targeted` holds every
/// cell fired upon plus the ring painted around each sunk ship. A cell can be
/// fired upon at most once.
#[derive(Clone)]
pub struct Board {
    size: usize,
    hidden: bool,
    placement_open: bool,
    grid: [[Cell; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
    reserved: BB,
    targeted: BB,
    ships: Vec<Ship>,
    destroyed: usize,
}

impl Board {
    /// Empty, visible board of the default size.
    pub fn new() -> Self {
        Board {
            size: BOARD_SIZE,
            hidden: false,
            placement_open: true,
            grid: [[Cell::Empty; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
            reserved: BB::new(),
            targeted: BB::new(),
            ships: Vec::new(),
            destroyed: 0,
        }
    }

    /// Empty board with `size × size` cells, `1 ≤ size ≤ MAX_BOARD_SIZE`.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        BB::try_new()?;
        Ok(Board {
            size,
            ..Board::new()
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Hidden boards render ship cells as empty water.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` once every placed ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.destroyed == self.ships.len()
    }

    /// Cell state, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        coord.to_index(self.size).map(|(r, c)| self.grid[r][c])
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.to_index(self.size).is_none()
    }

    /// Whether a shot at `coord` would be rejected as a repeat.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(coord)
    }

    /// Whether `coord` is reserved by placement or already targeted.
    pub fn is_busy(&self, coord: Coordinate) -> bool {
        self.reserved.contains(coord) || self.targeted.contains(coord)
    }

    /// All busy cells in row-major order.
    pub fn busy(&self) -> impl Iterator<Item = Coordinate> {
        (self.reserved | self.targeted).iter()
    }

    /// Number of cells fired upon or painted as known water.
    pub fn targeted_count(&self) -> usize {
        self.targeted.len()
    }

    /// Marks the 3×3 neighbourhood of every cell of `ship` as busy.
    ///
    /// Without `paint_visible` the ring is only reserved so later ships cannot
    /// be placed against this one. With it the ring joins the targeted set
    /// and is drawn as [`Cell::BufferMarker`], which is how a sunk ship gets
    /// outlined.
    pub fn mark_buffer(&mut self, ship: &Ship, paint_visible: bool) {
        for cell in ship.cells() {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let near = cell.offset(dr, dc);
                    let Some((r, c)) = near.to_index(self.size) else {
                        continue;
                    };
                    let set = if paint_visible {
                        &mut self.targeted
                    } else {
                        &mut self.reserved
                    };
                    if let Ok(true) = set.insert(near) {
                        if paint_visible {
                            self.grid[r][c] = Cell::BufferMarker;
                        }
                    }
                }
            }
        }
    }

    /// Adds `ship` to the fleet, reserving its cells and the ring around it.
    ///
    /// Cells already fired upon count as busy, so a ship can never land
    /// where it could no longer be hit.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if !self.placement_open {
            return Err(BoardError::PlacementClosed);
        }
        for cell in ship.cells() {
            if self.is_out_of_bounds(cell) || self.is_busy(cell) {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for cell in ship.cells() {
            if let Some((r, c)) = cell.to_index(self.size) {
                self.grid[r][c] = Cell::ShipPresent;
            }
            self.reserved.insert(cell)?;
        }
        self.mark_buffer(&ship, false);
        log::trace!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Ends setup: placement reservations are dropped and the fleet is fixed.
    pub fn begin_play(&mut self) {
        self.reserved.clear();
        self.placement_open = false;
    }

    /// Fires at `coord`.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        let (r, c) = coord
            .to_index(self.size)
            .ok_or(BoardError::OutOfBounds(coord))?;
        if self.targeted.contains(coord) {
            return Err(BoardError::AlreadyTargeted(coord));
        }
        self.targeted.insert(coord)?;

        let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(coord)) else {
            self.grid[r][c] = Cell::Miss;
            return Ok(ShotOutcome::Miss);
        };
        self.grid[r][c] = Cell::Hit;
        let ship = &mut self.ships[idx];
        if !ship.register_hit() {
            return Ok(ShotOutcome::Hit);
        }
        let ship = *ship;
        self.mark_buffer(&ship, true);
        self.destroyed += 1;
        log::debug!("ship {} sunk ({} destroyed)", idx, self.destroyed);
        Ok(ShotOutcome::Sunk {
            length: ship.length(),
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |")?;
        for c in 1..=self.size {
            write!(f, " {} |", c)?;
        }
        for (r, row) in self.grid.iter().take(self.size).enumerate() {
            write!(f, "\n{:>2} |", r + 1)?;
            for cell in row.iter().take(self.size) {
                write!(f, " {} |", cell.symbol(self.hidden))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("hidden", &self.hidden)
            .field("ships", &self.ships)
            .field("destroyed", &self.destroyed)
            .field("targeted", &self.targeted)
            .finish()
    }
}

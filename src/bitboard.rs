//! Packed cell sets backed by a single unsigned integer.
//!
//! A `BitBoard<T, N>` covers an `N×N` area; cell `(row, col)` lives at bit
//! `row * N + col`. Boards smaller than `N` simply leave the upper rows and
//! columns unused. The type is `Copy` and never allocates, so the board can
//! keep several of them around for its busy bookkeeping.

use core::fmt;
use core::ops::BitOr;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested area `N*N` exceeds the bit width of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate lies outside `[0, N)` on either axis.
    IndexOutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "{}x{} cells do not fit in {} bits", n, n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the bitboard", row, col)
            }
        }
    }
}

/// Set of cells on an `N×N` area packed into `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Empty set. Use [`BitBoard::try_new`] when `N` is not known to fit.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Empty set, or `SizeTooLarge` if `N*N` exceeds the width of `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = T::zero().count_zeros() as usize;
        if N * N > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    #[inline]
    fn index(coord: Coordinate) -> Result<usize, BitBoardError> {
        match coord.to_index(N) {
            Some((r, c)) => Ok(r * N + c),
            None => Err(BitBoardError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            }),
        }
    }

    /// Whether `coord` is a member. Coordinates outside the area never are.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coordinate) -> Result<bool, BitBoardError> {
        let bit = T::one() << Self::index(coord)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Removes every member.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Members in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

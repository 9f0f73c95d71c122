//! A set of board positions, packed into a `u128`.

use std::{fmt, ops};

use crate::position::Position;

const ALL_BITS: u128 = (1 << 81) - 1;

/// A set of cell positions, one bit per cell of the 9x9 board.
///
/// Peer lookups and house membership are answered from tables of these sets,
/// so the operations here have to stay branch-light. Iteration yields
/// positions in row-major order.
///
/// # Examples
///
/// ```
/// use cosmoku_core::{Position, PositionSet};
///
/// let mut set = PositionSet::EMPTY;
/// set.insert(Position::new(3, 5));
/// set.insert(Position::new(0, 0));
///
/// assert_eq!(set.len(), 2);
/// let first: Vec<_> = set.iter().collect();
/// assert_eq!(first[0], Position::new(0, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet {
    bits: u128,
}

impl PositionSet {
    /// The set containing no positions.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 positions.
    pub const FULL: Self = Self { bits: ALL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(pos: Position) -> u128 {
        1 << pos.index()
    }

    /// Returns `true` if `pos` is in the set.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns `true` if the set contains no positions.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Adds `pos` to the set.
    pub const fn insert(&mut self, pos: Position) {
        self.bits |= Self::bit(pos);
    }

    /// Removes `pos` from the set.
    pub const fn remove(&mut self, pos: Position) {
        self.bits &= !Self::bit(pos);
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|pos| (pos.x(), pos.y())))
            .finish()
    }
}

impl ops::BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl ops::BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl ops::BitAnd for PositionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl ops::BitAndAssign for PositionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl ops::Not for PositionSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & ALL_BITS,
        }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`], row-major.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl std::iter::FusedIterator for Iter {}

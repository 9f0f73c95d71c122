//! Per-cell state during play.

use cosmoku_core::{Digit, DigitSet};

/// The state of a single cell in a running game.
///
/// Given cells come from the puzzle and never change. Everything else is
/// player input: a filled digit, pencil-mark notes, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A clue fixed by the puzzle.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// Pencil-mark candidates entered by the player. Never empty.
    Notes(DigitSet),
    /// No digit and no notes.
    Empty,
}

impl CellState {
    /// Returns the digit this cell holds, whether given or player-filled.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Notes(_) | Self::Empty => None,
        }
    }

    /// Returns the cell's notes, or the empty set for non-notes cells.
    #[must_use]
    pub const fn notes(self) -> DigitSet {
        match self {
            Self::Notes(notes) => notes,
            Self::Given(_) | Self::Filled(_) | Self::Empty => DigitSet::EMPTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D1).as_digit(), Some(Digit::D1));
        assert_eq!(CellState::Filled(Digit::D9).as_digit(), Some(Digit::D9));
        assert_eq!(CellState::Notes(DigitSet::FULL).as_digit(), None);
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_notes() {
        let notes = DigitSet::from_iter([Digit::D2, Digit::D5]);
        assert_eq!(CellState::Notes(notes).notes(), notes);
        assert_eq!(CellState::Given(Digit::D1).notes(), DigitSet::EMPTY);
        assert_eq!(CellState::Filled(Digit::D1).notes(), DigitSet::EMPTY);
        assert_eq!(CellState::Empty.notes(), DigitSet::EMPTY);
    }

    #[test]
    fn test_variant_predicates() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(CellState::Notes(DigitSet::FULL).is_notes());
        assert!(CellState::Empty.is_empty());
        assert!(!CellState::Empty.is_given());
    }
}

//! The 9x9 grid and its validity predicates.
//!
//! [`Grid`] stores 81 optional digits and answers the questions the rest of
//! the engine asks continuously: can this digit go here, is this house
//! complete, is the whole grid complete, which digits remain possible at a
//! cell. All of them are cheap scans over [`Position::peers`] and house
//! tables; none of them allocate.
//!
//! Grids convert to and from an 81-character string, one character per cell
//! in row-major order: `'1'..='9'` for digits and `'.'`, `'_'`, or `'0'` for
//! empty cells. ASCII whitespace is ignored, so fixtures can be laid out one
//! row per line.
//!
//! # Examples
//!
//! ```
//! use cosmoku_core::{Digit, Grid, Position};
//!
//! let grid: Grid = format!("53{}", ".".repeat(79)).parse().unwrap();
//!
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! // 5 and 3 are taken by the first row; everything else is open.
//! assert!(!grid.is_valid_placement(Position::new(4, 0), Digit::D5));
//! assert!(grid.is_valid_placement(Position::new(4, 0), Digit::D7));
//! assert_eq!(grid.candidates(Position::new(2, 0)).len(), 7);
//! ```

use std::{
    fmt::{self, Display, Write as _},
    ops,
    str::FromStr,
};

use crate::{
    digit::Digit, digit_set::DigitSet, house::House, position::Position,
};

/// A 9x9 board of optional digits.
///
/// The grid itself enforces nothing: it will happily store conflicting
/// digits, since a game in progress contains player mistakes. The validity
/// predicates report on the current state instead of preventing it.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.index())]
    }

    /// Places `digit` at `pos`, overwriting any previous digit.
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[usize::from(pos.index())] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[usize::from(pos.index())] = None;
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns `true` if placing `digit` at `pos` conflicts with no other
    /// cell in the same row, column, or box.
    ///
    /// The content of `pos` itself is ignored: a cell already holding
    /// `digit` still reports `true` when no peer conflicts, which lets the
    /// completeness check below validate filled grids cell by cell.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        pos.peers().iter().all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns the set of digits that could be placed at `pos` without
    /// conflicting with any peer.
    ///
    /// The cell's own content is ignored, exactly as in
    /// [`is_valid_placement`](Self::is_valid_placement).
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.get(peer) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns `true` if every cell of `house` is filled and the nine
    /// digits form a permutation of 1-9.
    #[must_use]
    pub fn is_house_complete(&self, house: House) -> bool {
        let mut seen = DigitSet::EMPTY;
        for pos in house.positions() {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
        true
    }

    /// Returns `true` if row `y` is a filled permutation of 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn is_row_complete(&self, y: u8) -> bool {
        assert!(y < 9, "row index out of range");
        self.is_house_complete(House::Row { y })
    }

    /// Returns `true` if column `x` is a filled permutation of 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn is_column_complete(&self, x: u8) -> bool {
        assert!(x < 9, "column index out of range");
        self.is_house_complete(House::Column { x })
    }

    /// Returns `true` if box `index` is a filled permutation of 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub fn is_box_complete(&self, index: u8) -> bool {
        assert!(index < 9, "box index out of range");
        self.is_house_complete(House::Box { index })
    }

    /// Returns `true` if every cell is filled and every filled digit is a
    /// valid placement at its own cell.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL.into_iter().all(|pos| match self.get(pos) {
            Some(digit) => self.is_valid_placement(pos, digit),
            None => false,
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl ops::Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[usize::from(pos.index())]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => f.write_char(digit.to_char())?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({self})")
    }
}

/// Error parsing a [`Grid`] from its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string contained a character that is neither a digit, an empty
    /// cell marker, nor whitespace.
    #[display("invalid character {ch:?} in grid string")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The string did not contain exactly 81 cell characters.
    #[display("grid string has {count} cells, expected 81")]
    WrongCellCount {
        /// The number of cell characters found.
        count: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [None; 81];
        let mut count = 0_usize;
        for ch in s.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                _ => match Digit::from_char(ch) {
                    Some(digit) => Some(digit),
                    None => return Err(ParseGridError::InvalidChar { ch }),
                },
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    fn solved_grid() -> Grid {
        SOLVED.parse().unwrap()
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        proptest::collection::vec(proptest::option::of(1_u8..=9), 81).prop_map(|values| {
            let mut grid = Grid::empty();
            for (pos, value) in Position::ALL.into_iter().zip(values) {
                if let Some(value) = value {
                    grid.set(pos, Digit::new(value));
                }
            }
            grid
        })
    }

    #[test]
    fn test_get_set_clear() {
        let mut grid = Grid::empty();
        let pos = Position::new(2, 5);
        assert_eq!(grid.get(pos), None);

        grid.set(pos, Digit::D7);
        assert_eq!(grid.get(pos), Some(Digit::D7));
        assert_eq!(grid[pos], Some(Digit::D7));

        grid.set(pos, Digit::D1);
        assert_eq!(grid.get(pos), Some(Digit::D1));

        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_parse_with_whitespace_and_markers() {
        let grid: Grid = "1........\n.2_......\n..0......\n.........\n.........\n\
                          .........\n.........\n.........\n........9"
            .parse()
            .unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Digit::D2));
        assert_eq!(grid.get(Position::new(2, 2)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.empty_count(), 78);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(ParseGridError::InvalidChar { ch: 'x' })
        );
        assert_eq!(
            ".".repeat(80).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let grid = solved_grid();
        assert_eq!(grid.to_string(), SOLVED);

        let empty = Grid::empty();
        assert_eq!(empty.to_string(), ".".repeat(81));
    }

    #[test]
    fn test_valid_placement_checks_all_houses() {
        let grid: Grid = format!("5........{}4........", ".".repeat(63))
            .parse()
            .unwrap();
        // (0, 0) holds 5, (0, 8) holds 4.
        let pos = Position::new(4, 0);
        assert!(!grid.is_valid_placement(pos, Digit::D5), "row conflict");
        let pos = Position::new(0, 4);
        assert!(!grid.is_valid_placement(pos, Digit::D5), "column conflict");
        assert!(!grid.is_valid_placement(pos, Digit::D4), "column conflict");
        let pos = Position::new(2, 2);
        assert!(!grid.is_valid_placement(pos, Digit::D5), "box conflict");
        assert!(grid.is_valid_placement(pos, Digit::D4));
    }

    #[test]
    fn test_valid_placement_ignores_own_cell() {
        let mut grid = Grid::empty();
        let pos = Position::new(3, 3);
        grid.set(pos, Digit::D6);
        // The queried cell's own digit is not a conflict.
        assert!(grid.is_valid_placement(pos, Digit::D6));
        assert!(grid.is_valid_placement(pos, Digit::D2));
    }

    #[test]
    fn test_candidates() {
        let grid: Grid = format!("12{}", ".".repeat(79)).parse().unwrap();
        let candidates = grid.candidates(Position::new(8, 0));
        assert_eq!(candidates.len(), 7);
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));

        assert_eq!(Grid::empty().candidates(Position::new(4, 4)), DigitSet::FULL);
    }

    #[test]
    fn test_house_completion() {
        let grid = solved_grid();
        for y in 0..9 {
            assert!(grid.is_row_complete(y));
        }
        for x in 0..9 {
            assert!(grid.is_column_complete(x));
        }
        for index in 0..9 {
            assert!(grid.is_box_complete(index));
        }

        let mut partial = grid.clone();
        partial.clear(Position::new(4, 0));
        assert!(!partial.is_row_complete(0));
        assert!(!partial.is_column_complete(4));
        assert!(!partial.is_box_complete(1));
        assert!(partial.is_row_complete(8));
    }

    #[test]
    fn test_house_completion_rejects_duplicates() {
        let mut grid = solved_grid();
        // Make row 0 read 1, 1, 3, .. while keeping it fully filled.
        grid.set(Position::new(1, 0), Digit::D1);
        assert!(!grid.is_row_complete(0));
    }

    #[test]
    fn test_is_complete() {
        let grid = solved_grid();
        assert!(grid.is_complete());

        let mut missing = grid.clone();
        missing.clear(Position::new(8, 8));
        assert!(!missing.is_complete());

        let mut conflicted = grid.clone();
        conflicted.set(Position::new(0, 0), Digit::D9);
        assert!(!conflicted.is_complete());

        assert!(!Grid::empty().is_complete());
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = solved_grid();
        assert_eq!(grid.first_empty(), None);

        grid.clear(Position::new(0, 1));
        grid.clear(Position::new(5, 0));
        assert_eq!(grid.first_empty(), Some(Position::new(5, 0)));
    }

    proptest! {
        #[test]
        fn test_string_round_trip(grid in arb_grid()) {
            let reparsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, grid);
        }

        #[test]
        fn test_candidates_agree_with_valid_placement(grid in arb_grid(), index in 0_u8..81) {
            let pos = Position::from_index(index);
            let candidates = grid.candidates(pos);
            for digit in Digit::ALL {
                prop_assert_eq!(
                    candidates.contains(digit),
                    grid.is_valid_placement(pos, digit)
                );
            }
        }
    }
}

//! Board coordinates.

use std::fmt::{self, Display};

use crate::position_set::PositionSet;

/// A cell coordinate on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` the row (0-8, top to
/// bottom). Out-of-range coordinates are a caller bug and rejected at
/// construction.
///
/// # Examples
///
/// ```
/// use cosmoku_core::Position;
///
/// let pos = Position::new(4, 4);
/// assert_eq!(pos.box_index(), 4);
/// assert_eq!(pos.peers().len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order: (0,0), (1,0), .., (8,8).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self::from_index(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9, "x coordinate out of range");
        assert!(y < 9, "y coordinate out of range");
        Self { x, y }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self::new(index % 9, index / 9)
    }

    /// Creates a position from a box index and a cell index within the box.
    ///
    /// Boxes are numbered 0-8 left to right, top to bottom, and so are the
    /// cells within a box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9, "box index out of range");
        assert!(cell < 9, "box cell index out of range");
        Self::new(
            (box_index % 3) * 3 + cell % 3,
            (box_index / 3) * 3 + cell / 3,
        )
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the 20 cells related to this one: the other cells of its
    /// row, column, and box, deduplicated and excluding the position itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmoku_core::Position;
    ///
    /// let peers = Position::new(0, 0).peers();
    /// assert_eq!(peers.len(), 20);
    /// assert!(peers.contains(Position::new(8, 0)));
    /// assert!(peers.contains(Position::new(0, 8)));
    /// assert!(peers.contains(Position::new(2, 2)));
    /// assert!(!peers.contains(Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn peers(self) -> PositionSet {
        PEERS[usize::from(self.index())]
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

const PEERS: [PositionSet; 81] = {
    let mut peers = [PositionSet::EMPTY; 81];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 81 {
        let pos = Position::from_index(i as u8);
        let mut set = PositionSet::EMPTY;
        let mut k = 0;
        while k < 9 {
            set.insert(Position::new(k, pos.y()));
            set.insert(Position::new(pos.x(), k));
            set.insert(Position::from_box(pos.box_index(), k));
            k += 1;
        }
        set.remove(pos);
        peers[i] = set;
        i += 1;
    }
    peers
};

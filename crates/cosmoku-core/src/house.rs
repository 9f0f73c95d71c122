use std::fmt::{self, Display};

use crate::{position::Position, position_set::PositionSet};

/// A row, column, or 3x3 box.
///
/// Houses identify the units a completed cell can finish, so the same type
/// serves as the completion event reported after a placement: the event
/// "row 4 just became complete" is `House::Row { y: 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All nine rows, top to bottom.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// All nine columns, left to right.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// All nine boxes, left to right, top to bottom.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// All 27 houses: rows, then columns, then boxes.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Returns the three houses containing `pos`: its row, column, and box.
    #[must_use]
    pub const fn houses_of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Returns the set of the nine positions this house contains.
    #[must_use]
    pub fn positions(self) -> PositionSet {
        match self {
            Self::Row { y } => ROW_POSITIONS[usize::from(y)],
            Self::Column { x } => COLUMN_POSITIONS[usize::from(x)],
            Self::Box { index } => BOX_POSITIONS[usize::from(index)],
        }
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {y}"),
            Self::Column { x } => write!(f, "column {x}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}

const ROW_POSITIONS: [PositionSet; 9] = {
    let mut table = [PositionSet::EMPTY; 9];
    let mut y = 0;
    while y < 9 {
        let mut x = 0;
        while x < 9 {
            table[y as usize].insert(Position::new(x, y));
            x += 1;
        }
        y += 1;
    }
    table
};

const COLUMN_POSITIONS: [PositionSet; 9] = {
    let mut table = [PositionSet::EMPTY; 9];
    let mut x = 0;
    while x < 9 {
        let mut y = 0;
        while y < 9 {
            table[x as usize].insert(Position::new(x, y));
            y += 1;
        }
        x += 1;
    }
    table
};

const BOX_POSITIONS: [PositionSet; 9] = {
    let mut table = [PositionSet::EMPTY; 9];
    let mut index = 0;
    while index < 9 {
        let mut cell = 0;
        while cell < 9 {
            table[index as usize].insert(Position::from_box(index, cell));
            cell += 1;
        }
        index += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordering() {
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_every_house_has_nine_positions() {
        for house in House::ALL {
            assert_eq!(house.positions().len(), 9, "{house}");
        }
    }

    #[test]
    fn test_row_positions() {
        let row = House::Row { y: 3 }.positions();
        for x in 0..9 {
            assert!(row.contains(Position::new(x, 3)));
        }
    }

    #[test]
    fn test_box_positions() {
        let center = House::Box { index: 4 }.positions();
        for y in 3..6 {
            for x in 3..6 {
                assert!(center.contains(Position::new(x, y)));
            }
        }
        assert!(!center.contains(Position::new(2, 3)));
    }

    #[test]
    fn test_houses_of() {
        let pos = Position::new(7, 1);
        let [row, column, house_box] = House::houses_of(pos);
        assert_eq!(row, House::Row { y: 1 });
        assert_eq!(column, House::Column { x: 7 });
        assert_eq!(house_box, House::Box { index: 2 });
        for house in House::houses_of(pos) {
            assert!(house.positions().contains(pos));
        }
    }

    #[test]
    fn test_rows_cover_the_board() {
        let mut covered = PositionSet::EMPTY;
        for row in House::ROWS {
            covered |= row.positions();
        }
        assert_eq!(covered, PositionSet::FULL);
    }

    #[test]
    fn test_display() {
        assert_eq!(House::Row { y: 4 }.to_string(), "row 4");
        assert_eq!(House::Column { x: 0 }.to_string(), "column 0");
        assert_eq!(House::Box { index: 8 }.to_string(), "box 8");
    }
}

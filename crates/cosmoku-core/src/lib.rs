//! Core types for the Cosmoku puzzle engine.
//!
//! This crate models the 9x9 board and the validity rules every other
//! component leans on. It is deliberately small and allocation-free: the
//! generator, the carver, and the game session all query these predicates in
//! tight loops.
//!
//! # Overview
//!
//! - [`digit`]: the type-safe digit 1-9
//! - [`digit_set`]: a `u16` bitset of digits (candidates, notes, seen-sets)
//! - [`position`]: board coordinates and the 20-cell peer relation
//! - [`position_set`]: a `u128` bitset of board cells
//! - [`house`]: rows, columns, and boxes, which double as completion events
//! - [`grid`]: the board itself, with placement validity and completion
//!   predicates and an 81-character string form
//! - [`difficulty`]: difficulty levels and their carve targets
//!
//! # Examples
//!
//! ```
//! use cosmoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.set(Position::new(4, 4), Digit::D5);
//!
//! // 5 is now blocked for the 20 peers of (4, 4).
//! assert!(!grid.is_valid_placement(Position::new(4, 8), Digit::D5));
//! assert!(grid.is_valid_placement(Position::new(0, 0), Digit::D5));
//! ```

pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    difficulty::Difficulty,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
    position_set::PositionSet,
};

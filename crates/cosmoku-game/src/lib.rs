//! Game session layer for Cosmoku.
//!
//! [`Game`] wraps a generated puzzle with the state a playing surface needs:
//! given and player-filled cells, pencil-mark notes, scoring, a limited hint
//! budget, and undo/redo history. The [`progress`] module exposes the
//! underlying per-move queries as pure functions over explicit grids.
//!
//! # Examples
//!
//! ```
//! use cosmoku_core::Difficulty;
//! use cosmoku_game::Game;
//! use cosmoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let mut game = Game::new(generator.generate());
//!
//! // Place the correct digit into the first open cell.
//! let pos = game.board().first_empty().expect("puzzle has empty cells");
//! let digit = game.solution().get(pos).expect("solution is complete");
//! let outcome = game.place(pos, digit).expect("cell accepts a digit");
//!
//! assert!(outcome.validity.is_correct());
//! assert!(game.points() >= 10);
//! ```

mod cell_state;
mod game;
mod history;
pub mod progress;

pub use self::{
    cell_state::CellState,
    game::{Game, GameError, Hint, PlacementOutcome},
    history::{MoveKind, MoveRecord},
    progress::Validity,
};

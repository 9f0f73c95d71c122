//! Random puzzle generation for Cosmoku.
//!
//! A [`PuzzleGenerator`] builds a complete solution grid, then carves clues
//! out of it until the board reaches the requested difficulty. Generation is
//! driven entirely by a [`PuzzleSeed`], so any puzzle can be reproduced or
//! shared from its seed string.
//!
//! # Examples
//!
//! ```
//! use cosmoku_core::Difficulty;
//! use cosmoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Medium);
//! let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("crate docs"));
//!
//! assert!(puzzle.solution.is_complete());
//! assert!(puzzle.problem.empty_count() <= 50);
//!
//! // The seed round-trips through its display form.
//! let seed: PuzzleSeed = puzzle.seed.to_string().parse().unwrap();
//! assert_eq!(seed, puzzle.seed);
//! ```

mod generator;
mod seed;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

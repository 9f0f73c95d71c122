//! Solution construction and clue carving.

use cosmoku_core::{Difficulty, Digit, DigitSet, Grid, Position};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// Generates puzzles of a fixed difficulty.
///
/// # Examples
///
/// ```
/// use cosmoku_core::Difficulty;
/// use cosmoku_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("docs"));
/// assert!(puzzle.solution.is_complete());
/// assert!(puzzle.problem.empty_count() <= 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

/// A generated puzzle together with its solution and provenance.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The playable grid, with clues removed.
    pub problem: Grid,
    /// The complete grid the problem was carved from.
    pub solution: Grid,
    /// The difficulty the carver aimed for.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator aims for.
    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and difficulty always yield the same puzzle.
    ///
    /// # Panics
    ///
    /// Panics if the backtracking search cannot complete a grid. The
    /// diagonal box seeding always leaves a completable grid, so this
    /// indicates a bug rather than a property of the seed.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let solution = build_solution(&mut rng);
        let problem = carve_puzzle(&solution, self.difficulty.removal_target(), &mut rng);
        log::debug!(
            "generated {difficulty} puzzle from seed {seed}: {empty} empty cells",
            difficulty = self.difficulty,
            empty = problem.empty_count(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            difficulty: self.difficulty,
            seed,
        }
    }
}

/// Builds a random complete grid.
///
/// The three diagonal boxes are mutually independent, so each is filled with a
/// random permutation up front. Backtracking search then completes the rest.
fn build_solution(rng: &mut Pcg64) -> Grid {
    let mut grid = Grid::empty();
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (cell, digit) in (0..9).zip(digits) {
            grid.set(Position::from_box(box_index, cell), digit);
        }
    }
    let filled = fill_remaining(&mut grid, rng);
    assert!(filled, "diagonal box seeding left an uncompletable grid");
    grid
}

/// Completes `grid` by backtracking search, trying digits in random order.
///
/// Returns `false` if the grid cannot be completed, leaving it as it was.
fn fill_remaining(grid: &mut Grid, rng: &mut Pcg64) -> bool {
    let Some((pos, candidates)) = most_constrained_cell(grid) else {
        return true;
    };
    if candidates.is_empty() {
        return false;
    }

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if !candidates.contains(digit) {
            continue;
        }
        grid.set(pos, digit);
        if fill_remaining(grid, rng) {
            return true;
        }
        grid.clear(pos);
    }
    false
}

/// Finds the empty cell with the fewest candidates, or `None` on a full grid.
///
/// Cells with zero or one candidate end the scan early: the former is a dead
/// end and the latter a forced move, and neither can be beaten.
fn most_constrained_cell(grid: &Grid) -> Option<(Position, DigitSet)> {
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in Position::ALL {
        if grid.get(pos).is_some() {
            continue;
        }
        let candidates = grid.candidates(pos);
        match candidates.len() {
            0 | 1 => return Some((pos, candidates)),
            n => {
                if best.is_none_or(|(_, c)| n < c.len()) {
                    best = Some((pos, candidates));
                }
            }
        }
    }
    best
}

/// Removes up to `target` clues from a copy of `solution`.
///
/// Cells are visited in random order. A removal sticks only if the cleared
/// cell keeps between one and three candidates, which bounds how open the
/// board becomes; otherwise the clue is restored. The attempt budget is twice
/// the target, so a stubborn board may fall short of `target` removals.
fn carve_puzzle(solution: &Grid, target: usize, rng: &mut Pcg64) -> Grid {
    let mut grid = solution.clone();
    let mut coords = Position::ALL;
    coords.shuffle(rng);

    let budget = (target * 2).min(81);
    let mut removed = 0;
    for pos in coords.into_iter().take(budget) {
        if removed == target {
            break;
        }
        let Some(digit) = grid.get(pos) else {
            continue;
        };
        grid.clear(pos);
        if (1..=3).contains(&grid.candidates(pos).len()) {
            removed += 1;
        } else {
            grid.set(pos, digit);
        }
    }
    if removed < target {
        log::debug!("carving stopped at {removed} of {target} removals");
    }
    grid
}

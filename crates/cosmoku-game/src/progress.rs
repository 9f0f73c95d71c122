//! Pure per-move queries over explicit grid inputs.
//!
//! These functions answer the questions a UI asks after every move: was the
//! placement right, which cells now clash, and did a house just complete.
//! They hold no state; [`Game`](crate::Game) calls them with its own grids
//! and they can be used standalone the same way.

use cosmoku_core::{Digit, Grid, House, Position};

/// Whether a placed digit matches the puzzle's solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Validity {
    /// The digit matches the solution.
    Correct,
    /// The digit differs from the solution.
    Incorrect,
}

/// Checks a placement against the solution grid.
///
/// # Examples
///
/// ```
/// use cosmoku_core::{Digit, Grid, Position};
/// use cosmoku_game::progress;
///
/// let solution: Grid =
///     "123456789456789123789123456231564897564897231897231564312645978645978312978312645"
///         .parse()
///         .unwrap();
/// let pos = Position::new(0, 0);
/// assert!(progress::placement_validity(&solution, pos, Digit::D1).is_correct());
/// assert!(progress::placement_validity(&solution, pos, Digit::D2).is_incorrect());
/// ```
#[must_use]
pub fn placement_validity(solution: &Grid, pos: Position, digit: Digit) -> Validity {
    if solution.get(pos) == Some(digit) {
        Validity::Correct
    } else {
        Validity::Incorrect
    }
}

/// Returns the peers of `pos` that hold the same digit as `pos`.
///
/// The result is in row-major order. An empty cell has no duplicates.
#[must_use]
pub fn duplicates(grid: &Grid, pos: Position) -> Vec<Position> {
    let Some(digit) = grid.get(pos) else {
        return Vec::new();
    };
    pos.peers()
        .into_iter()
        .filter(|&peer| grid.get(peer) == Some(digit))
        .collect()
}

/// Returns the houses of `pos` that are complete, after a placement there.
///
/// At most three events fire at once: the cell's row, column, and box, in
/// that order. Completion is judged on the grid alone, so any digits forming
/// a permutation count, not just the generator's solution.
#[must_use]
pub fn completion_events(grid: &Grid, pos: Position) -> Vec<House> {
    House::houses_of(pos)
        .into_iter()
        .filter(|&house| grid.is_house_complete(house))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved_grid() -> Grid {
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645"
            .parse()
            .expect("valid solution grid")
    }

    #[test]
    fn test_placement_validity() {
        let solution = solved_grid();
        let pos = Position::new(4, 4);
        assert_eq!(
            placement_validity(&solution, pos, Digit::D9),
            Validity::Correct
        );
        assert_eq!(
            placement_validity(&solution, pos, Digit::D1),
            Validity::Incorrect
        );
    }

    #[test]
    fn test_duplicates_reports_matching_peers() {
        let grid: Grid = "\
            11.......\
            .........\
            .........\
            .........\
            .........\
            .........\
            .........\
            .........\
            1........"
            .parse()
            .expect("valid grid");

        // (0, 0) clashes with its row peer and its column peer.
        assert_eq!(
            duplicates(&grid, Position::new(0, 0)),
            vec![Position::new(1, 0), Position::new(0, 8)]
        );
        // (1, 0) shares a row and a box with (0, 0) but reports it once.
        assert_eq!(
            duplicates(&grid, Position::new(1, 0)),
            vec![Position::new(0, 0)]
        );
    }

    #[test]
    fn test_duplicates_of_empty_cell_is_empty() {
        let grid: Grid = format!("1{}", ".".repeat(80)).parse().expect("valid grid");
        assert_eq!(duplicates(&grid, Position::new(4, 4)), Vec::new());
    }

    #[test]
    fn test_completion_events_fire_per_house() {
        let row_only: Grid = format!("123456789{}", ".".repeat(72))
            .parse()
            .expect("valid grid");
        assert_eq!(
            completion_events(&row_only, Position::new(0, 0)),
            vec![House::Row { y: 0 }]
        );

        let box_only: Grid = "\
            123......\
            456......\
            789......\
            .........\
            .........\
            .........\
            .........\
            .........\
            ........."
            .parse()
            .expect("valid grid");
        assert_eq!(
            completion_events(&box_only, Position::new(0, 0)),
            vec![House::Box { index: 0 }]
        );
    }

    #[test]
    fn test_completion_events_all_three_houses() {
        let solution = solved_grid();
        for pos in [Position::new(0, 0), Position::new(8, 8)] {
            assert_eq!(completion_events(&solution, pos).len(), 3);
        }
    }

    #[test]
    fn test_completion_events_reject_duplicate_digits() {
        // Row 0 is full but repeats 1, so no event fires.
        let grid: Grid = format!("112345678{}", ".".repeat(72))
            .parse()
            .expect("valid grid");
        assert_eq!(completion_events(&grid, Position::new(0, 0)), Vec::new());
    }
}

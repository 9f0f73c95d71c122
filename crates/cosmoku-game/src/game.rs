//! The stateful game session.

use cosmoku_core::{Difficulty, Digit, DigitSet, Grid, House, Position};
use cosmoku_generator::GeneratedPuzzle;

use crate::{CellState, MoveKind, MoveRecord, Validity, progress};

/// Points for a correct placement into a cell that held no digit.
const CORRECT_PLACEMENT_POINTS: u32 = 10;
/// Bonus for completing a row.
const ROW_BONUS_POINTS: u32 = 50;
/// Bonus for completing a column.
const COLUMN_BONUS_POINTS: u32 = 50;
/// Bonus for completing a box.
const BOX_BONUS_POINTS: u32 = 100;
/// One-time bonus when the board completes.
const SOLVE_BONUS_POINTS: u32 = 500;
/// Flat bonus for auto-solving the rest of the board.
const AUTO_SOLVE_POINTS: u32 = 100;

/// Returns the bonus for completing `house`.
const fn completion_bonus(house: House) -> u32 {
    match house {
        House::Row { .. } => ROW_BONUS_POINTS,
        House::Column { .. } => COLUMN_BONUS_POINTS,
        House::Box { .. } => BOX_BONUS_POINTS,
    }
}

/// A Sudoku game session.
///
/// Wraps a puzzle with everything a playing surface needs: per-cell state
/// (givens, player digits, notes), scoring, a limited hint budget, and an
/// undo/redo history. Every mutating operation keeps the cell states and the
/// digit board in sync, so queries like [`duplicates`](Self::duplicates) stay
/// cheap.
///
/// # Examples
///
/// ```
/// use cosmoku_core::Difficulty;
/// use cosmoku_game::Game;
/// use cosmoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let game = Game::new(generator.generate());
///
/// assert!(!game.is_solved());
/// assert_eq!(game.points(), 0);
/// assert_eq!(game.hints_remaining(), Game::MAX_HINTS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    /// Digit view of `cells`: givens and filled digits, nothing else.
    board: Grid,
    solution: Grid,
    difficulty: Difficulty,
    notes_mode: bool,
    points: u32,
    hints_used: u8,
    undo_stack: Vec<MoveRecord>,
    redo_stack: Vec<MoveRecord>,
    solved: bool,
}

/// Everything a move reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Whether the placed digit matches the solution.
    pub validity: Validity,
    /// The houses this move completed, in row/column/box order.
    pub completed_houses: Vec<House>,
    /// Points this move earned.
    pub awarded_points: u32,
    /// Whether this move completed the board.
    pub solved: bool,
}

/// The result of a successful hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// The cell the hint filled.
    pub position: Position,
    /// The solution digit placed there.
    pub digit: Digit,
    /// The houses the hint completed, in row/column/box order.
    pub completed_houses: Vec<House>,
    /// Points the hint earned.
    pub awarded_points: u32,
    /// Whether the hint completed the board.
    pub solved: bool,
}

/// Why a game operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The target cell is a given clue.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// Notes can only go on empty or notes cells.
    #[display("cannot add a note to a filled cell")]
    CannotAddNoteToFilledCell,
    /// The target cell already holds its solution digit.
    #[display("the cell already holds its correct digit")]
    CellAlreadyCorrect,
    /// The session has ended; the board is complete.
    #[display("the puzzle is already solved")]
    AlreadySolved,
    /// The hint budget for this session is used up.
    #[display("no hints remaining")]
    HintsExhausted,
    /// A hint was requested but every cell holds a digit.
    #[display("no empty cells to hint")]
    NoEmptyCells,
}

impl Game {
    /// Maximum number of hints per session.
    pub const MAX_HINTS: u8 = 3;

    /// Creates a new game from a generated puzzle.
    ///
    /// Cells with digits in the puzzle's problem grid become given cells;
    /// the rest start empty.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed: _,
        } = puzzle;
        Self::from_grids(&problem, &solution, difficulty)
    }

    /// Creates a game directly from a problem grid and its solution.
    ///
    /// # Panics
    ///
    /// Panics if `solution` is not a complete valid grid, or if a clue in
    /// `problem` disagrees with `solution`.
    #[must_use]
    pub fn from_grids(problem: &Grid, solution: &Grid, difficulty: Difficulty) -> Self {
        assert!(solution.is_complete(), "solution grid must be complete");
        assert!(
            Position::ALL
                .into_iter()
                .all(|pos| problem.get(pos).is_none_or(|d| solution.get(pos) == Some(d))),
            "problem clues must agree with the solution"
        );

        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[usize::from(pos.index())] = CellState::Given(digit);
            }
        }
        let solved = problem.is_complete();
        Self {
            cells,
            board: problem.clone(),
            solution: solution.clone(),
            difficulty,
            notes_mode: false,
            points: 0,
            hints_used: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            solved,
        }
    }

    /// Places a digit in a cell.
    ///
    /// Clears the cell's notes, records the move for undo, and scores it:
    /// a correct digit entering a previously digit-free cell earns base
    /// points plus a bonus per house it completes, with boxes paying more
    /// than rows and columns. Incorrect digits and overwrites of the
    /// player's own digit are placed as-is but earn neither base nor house
    /// points. Any placement that completes the board earns a one-time
    /// solve bonus.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the board is complete,
    /// [`GameError::CannotModifyGivenCell`] for given cells, and
    /// [`GameError::CellAlreadyCorrect`] if the cell already holds its
    /// solution digit. A rejected placement records nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmoku_core::Difficulty;
    /// use cosmoku_game::Game;
    /// use cosmoku_generator::PuzzleGenerator;
    ///
    /// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
    /// let solution = puzzle.solution.clone();
    /// let mut game = Game::new(puzzle);
    ///
    /// let pos = game.board().first_empty().expect("puzzle has empty cells");
    /// let digit = solution.get(pos).expect("solution is complete");
    /// let outcome = game.place(pos, digit).expect("cell accepts a digit");
    /// assert!(outcome.validity.is_correct());
    /// assert!(outcome.awarded_points >= 10);
    /// ```
    pub fn place(&mut self, pos: Position, digit: Digit) -> Result<PlacementOutcome, GameError> {
        if self.solved {
            return Err(GameError::AlreadySolved);
        }
        let previous = self.cell(pos);
        if previous.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        if previous.as_digit() == self.solution.get(pos) {
            return Err(GameError::CellAlreadyCorrect);
        }

        let record = MoveRecord {
            position: pos,
            kind: MoveKind::Number,
            previous_digit: previous.as_digit(),
            new_digit: Some(digit),
            previous_notes: previous.notes(),
            new_notes: DigitSet::EMPTY,
        };
        self.set_cell(pos, CellState::Filled(digit));
        self.push_move(record);

        let validity = progress::placement_validity(&self.solution, pos, digit);
        let completed_houses = progress::completion_events(&self.board, pos);
        let solved = self.board.is_complete();
        let correct_into_empty = validity.is_correct() && record.previous_digit.is_none();
        let awarded_points = self.award(correct_into_empty, &completed_houses, solved);

        Ok(PlacementOutcome {
            validity,
            completed_houses,
            awarded_points,
            solved,
        })
    }

    /// Erases a player-filled digit or the notes of a cell.
    ///
    /// Erasing an empty cell is a no-op and records nothing. A cell already
    /// holding its solution digit is locked and rejected, the same as
    /// [`Self::place`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the board is complete,
    /// [`GameError::CannotModifyGivenCell`] for given cells, and
    /// [`GameError::CellAlreadyCorrect`] if the cell already holds its
    /// solution digit.
    pub fn erase(&mut self, pos: Position) -> Result<(), GameError> {
        if self.solved {
            return Err(GameError::AlreadySolved);
        }
        let previous = self.cell(pos);
        match previous {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Empty => return Ok(()),
            CellState::Filled(_) | CellState::Notes(_) => {}
        }
        if previous.as_digit() == self.solution.get(pos) {
            return Err(GameError::CellAlreadyCorrect);
        }

        let kind = if previous.is_filled() {
            MoveKind::Number
        } else {
            MoveKind::Notes
        };
        let record = MoveRecord {
            position: pos,
            kind,
            previous_digit: previous.as_digit(),
            new_digit: None,
            previous_notes: previous.notes(),
            new_notes: DigitSet::EMPTY,
        };
        self.set_cell(pos, CellState::Empty);
        self.push_move(record);
        Ok(())
    }

    /// Toggles a pencil-mark note in a cell.
    ///
    /// Removing the last note turns the cell back to empty. Each toggle is
    /// recorded as its own move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the board is complete,
    /// [`GameError::CannotModifyGivenCell`] for given cells, and
    /// [`GameError::CannotAddNoteToFilledCell`] for cells holding a player
    /// digit.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.solved {
            return Err(GameError::AlreadySolved);
        }
        let previous = self.cell(pos);
        match previous {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => return Err(GameError::CannotAddNoteToFilledCell),
            CellState::Notes(_) | CellState::Empty => {}
        }

        let mut notes = previous.notes();
        notes.toggle(digit);
        let state = if notes.is_empty() {
            CellState::Empty
        } else {
            CellState::Notes(notes)
        };
        let record = MoveRecord {
            position: pos,
            kind: MoveKind::Notes,
            previous_digit: None,
            new_digit: None,
            previous_notes: previous.notes(),
            new_notes: notes,
        };
        self.set_cell(pos, state);
        self.push_move(record);
        Ok(())
    }

    /// Undoes the most recent move, returning its record.
    ///
    /// Undo restores cell state only. Points already earned and hints
    /// already spent stay as they are, and a solved game cannot be
    /// reopened, so this returns `None` once the board is complete.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        if self.solved {
            return None;
        }
        let record = self.undo_stack.pop()?;
        self.restore(record.position, record.previous_digit, record.previous_notes);
        self.redo_stack.push(record);
        Some(record)
    }

    /// Reapplies the most recently undone move, returning its record.
    ///
    /// Like [`undo`](Self::undo) this is pure state restoration; no points
    /// are re-awarded.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        if self.solved {
            return None;
        }
        let record = self.redo_stack.pop()?;
        self.restore(record.position, record.new_digit, record.new_notes);
        self.undo_stack.push(record);
        Some(record)
    }

    /// Fills the first empty cell with its solution digit.
    ///
    /// "First" is row-major order. The hint is recorded as a normal move
    /// (and so can be undone), consumes one unit of the hint budget, and
    /// scores exactly like [`Self::place`]: the revealed digit is always a
    /// correct fill of an empty cell, so it earns at least the base points.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the board is complete,
    /// [`GameError::HintsExhausted`] once [`MAX_HINTS`](Self::MAX_HINTS)
    /// hints have been used, and [`GameError::NoEmptyCells`] if every cell
    /// holds a digit. A failed hint never consumes budget.
    pub fn use_hint(&mut self) -> Result<Hint, GameError> {
        if self.solved {
            return Err(GameError::AlreadySolved);
        }
        if self.hints_used >= Self::MAX_HINTS {
            return Err(GameError::HintsExhausted);
        }
        let Some(pos) = self.board.first_empty() else {
            return Err(GameError::NoEmptyCells);
        };
        let Some(digit) = self.solution.get(pos) else {
            unreachable!("solution grid is complete");
        };

        let previous = self.cell(pos);
        let record = MoveRecord {
            position: pos,
            kind: MoveKind::Number,
            previous_digit: None,
            new_digit: Some(digit),
            previous_notes: previous.notes(),
            new_notes: DigitSet::EMPTY,
        };
        self.set_cell(pos, CellState::Filled(digit));
        self.push_move(record);
        self.hints_used += 1;

        let completed_houses = progress::completion_events(&self.board, pos);
        let solved = self.board.is_complete();
        let awarded_points = self.award(true, &completed_houses, solved);
        Ok(Hint {
            position: pos,
            digit,
            completed_houses,
            awarded_points,
            solved,
        })
    }

    /// Clears all player input, returning the board to its givens.
    ///
    /// Points, hints, history, and the solved flag reset too. The notes
    /// mode flag is an input preference and survives.
    pub fn reset(&mut self) {
        for pos in Position::ALL {
            if !self.cell(pos).is_given() {
                self.set_cell(pos, CellState::Empty);
            }
        }
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.points = 0;
        self.hints_used = 0;
        self.solved = false;
    }

    /// Fills every non-given cell from the solution and ends the session.
    ///
    /// Awards a flat bonus and clears the history. Does nothing once the
    /// board is already solved.
    pub fn auto_solve(&mut self) {
        if self.solved {
            return;
        }
        for pos in Position::ALL {
            if self.cell(pos).is_given() {
                continue;
            }
            let Some(digit) = self.solution.get(pos) else {
                unreachable!("solution grid is complete");
            };
            self.set_cell(pos, CellState::Filled(digit));
        }
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.points += AUTO_SOLVE_POINTS;
        self.solved = true;
    }

    /// Switches between digit entry and note entry.
    ///
    /// The flag is advisory: the caller reads it to decide whether an input
    /// should go through [`place`](Self::place) or
    /// [`toggle_note`](Self::toggle_note).
    pub fn toggle_notes_mode(&mut self) {
        self.notes_mode = !self.notes_mode;
    }

    /// Returns whether note entry mode is active.
    #[must_use]
    pub const fn is_notes_mode(&self) -> bool {
        self.notes_mode
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[usize::from(pos.index())]
    }

    /// Returns the digit view of the board: givens plus player digits.
    #[must_use]
    pub const fn board(&self) -> &Grid {
        &self.board
    }

    /// Returns the stored solution grid.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the puzzle's difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the points earned so far.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns how many hints have been used.
    #[must_use]
    pub const fn hints_used(&self) -> u8 {
        self.hints_used
    }

    /// Returns how many hints are left.
    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        Self::MAX_HINTS - self.hints_used
    }

    /// Returns whether the board is complete.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns whether [`undo`](Self::undo) would undo a move.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.solved && !self.undo_stack.is_empty()
    }

    /// Returns whether [`redo`](Self::redo) would reapply a move.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.solved && !self.redo_stack.is_empty()
    }

    /// Returns all applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.undo_stack
    }

    /// Returns the peers of `pos` holding the same digit as `pos`.
    #[must_use]
    pub fn duplicates(&self, pos: Position) -> Vec<Position> {
        progress::duplicates(&self.board, pos)
    }

    /// Checks a player-filled cell against the solution.
    ///
    /// Givens, notes, and empty cells return `None`: only player digits
    /// have a validity to report.
    #[must_use]
    pub fn validity(&self, pos: Position) -> Option<Validity> {
        match self.cell(pos) {
            CellState::Filled(digit) => {
                Some(progress::placement_validity(&self.solution, pos, digit))
            }
            CellState::Given(_) | CellState::Notes(_) | CellState::Empty => None,
        }
    }

    /// Writes a cell state, keeping the digit board in sync.
    fn set_cell(&mut self, pos: Position, state: CellState) {
        self.cells[usize::from(pos.index())] = state;
        match state.as_digit() {
            Some(digit) => self.board.set(pos, digit),
            None => self.board.clear(pos),
        }
    }

    fn restore(&mut self, pos: Position, digit: Option<Digit>, notes: DigitSet) {
        let state = match digit {
            Some(digit) => CellState::Filled(digit),
            None if notes.is_empty() => CellState::Empty,
            None => CellState::Notes(notes),
        };
        self.set_cell(pos, state);
    }

    fn push_move(&mut self, record: MoveRecord) {
        self.undo_stack.push(record);
        self.redo_stack.clear();
    }

    /// Scores a placement and latches the solved flag.
    ///
    /// Base points and house bonuses require a correct digit in a
    /// previously digit-free cell; the solve bonus fires on any placement
    /// that completes the board.
    fn award(&mut self, correct_into_empty: bool, completed_houses: &[House], solved: bool) -> u32 {
        let mut points = 0;
        if correct_into_empty {
            points += CORRECT_PLACEMENT_POINTS;
            for &house in completed_houses {
                points += completion_bonus(house);
            }
        }
        if solved {
            points += SOLVE_BONUS_POINTS;
            self.solved = true;
        }
        self.points += points;
        points
    }
}

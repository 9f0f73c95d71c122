//! Move records for undo and redo.

use cosmoku_core::{Digit, DigitSet, Position};

/// Which kind of edit a move made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// A digit was placed or erased.
    Number,
    /// Notes were toggled or erased.
    Notes,
}

/// A recorded edit of one cell, carrying both sides of the change.
///
/// The `previous_*` fields restore the cell on undo and the `new_*` fields
/// reapply it on redo. Digits and notes are recorded separately because a
/// placement can overwrite notes, and undoing it must bring them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The edited cell.
    pub position: Position,
    /// Whether the edit changed a digit or notes.
    pub kind: MoveKind,
    /// The digit the cell held before the edit, if any.
    pub previous_digit: Option<Digit>,
    /// The digit the cell holds after the edit, if any.
    pub new_digit: Option<Digit>,
    /// The notes the cell held before the edit.
    pub previous_notes: DigitSet,
    /// The notes the cell holds after the edit.
    pub new_notes: DigitSet,
}

//! Difficulty levels and their carve targets.

use std::fmt::{self, Display};

/// How aggressively a puzzle is carved from its solution.
///
/// The level fixes how many cells the carver tries to remove. Removal can
/// fall short when the attempt budget runs out, so the target is an upper
/// bound on the empty cells of a generated puzzle, not a guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Up to 40 cells removed.
    Easy,
    /// Up to 50 cells removed.
    #[default]
    Medium,
    /// Up to 60 cells removed.
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells the carver attempts to remove.
    #[must_use]
    pub const fn removal_target(self) -> usize {
        match self {
            Self::Easy => 40,
            Self::Medium => 50,
            Self::Hard => 60,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_increase_with_difficulty() {
        assert_eq!(Difficulty::Easy.removal_target(), 40);
        assert_eq!(Difficulty::Medium.removal_target(), 50);
        assert_eq!(Difficulty::Hard.removal_target(), 60);
        assert!(Difficulty::ALL.is_sorted_by_key(|level| level.removal_target()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}

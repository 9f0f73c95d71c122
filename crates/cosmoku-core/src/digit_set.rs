//! A set of digits, packed into a `u16`.
//!
//! [`DigitSet`] backs the hot validity paths: candidate computation, the
//! house completion seen-set, and per-cell pencil notes. Bits 0-8 represent
//! digits 1-9.
//!
//! # Examples
//!
//! ```
//! use cosmoku_core::{Digit, DigitSet};
//!
//! let mut notes = DigitSet::EMPTY;
//! notes.insert(Digit::D2);
//! notes.insert(Digit::D7);
//!
//! assert_eq!(notes.len(), 2);
//! assert!(notes.contains(Digit::D7));
//!
//! // Set operations work through the bit operators.
//! let odd = DigitSet::from_iter([Digit::D1, Digit::D3, Digit::D5, Digit::D7, Digit::D9]);
//! assert_eq!((notes & odd).len(), 1);
//! ```

use std::{fmt, ops};

use crate::digit::Digit;

const ALL_BITS: u16 = 0x1ff;

/// A set of digits 1-9, represented as nine bits of a `u16`.
///
/// Iteration yields digits in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self { bits: ALL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Adds `digit` to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes `digit` from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Adds `digit` if absent, removes it if present.
    ///
    /// This is the pencil-note operation: toggling twice restores the set.
    pub const fn toggle(&mut self, digit: Digit) {
        self.bits ^= Self::bit(digit);
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl ops::BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl ops::BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl ops::BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl ops::BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl ops::Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & ALL_BITS,
        }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl Extend<Digit> for DigitSet {
    fn extend<I: IntoIterator<Item = Digit>>(&mut self, iter: I) {
        for digit in iter {
            self.insert(digit);
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u8 + 1;
        Some(Digit::new(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl std::iter::FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn set_from_bits(bits: u16) -> DigitSet {
        Digit::ALL
            .into_iter()
            .filter(|digit| bits & (1 << (digit.value() - 1)) != 0)
            .collect()
    }

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(Digit::D4);
        set.insert(Digit::D4);
        set.insert(Digit::D8);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Digit::D4));
        assert!(!set.contains(Digit::D1));

        set.remove(Digit::D4);
        assert!(!set.contains(Digit::D4));
        assert!(set.contains(Digit::D8));
    }

    #[test]
    fn test_toggle() {
        let mut set = DigitSet::new();
        set.toggle(Digit::D5);
        assert!(set.contains(Digit::D5));
        set.toggle(Digit::D5);
        assert!(set.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5]);
        let digits: Vec<_> = set.iter().collect();
        assert_eq!(digits, vec![Digit::D1, Digit::D5, Digit::D9]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_operators() {
        let low = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        let mid = DigitSet::from_iter([Digit::D3, Digit::D4]);

        assert_eq!((low | mid).len(), 4);
        assert_eq!(low & mid, DigitSet::from_iter([Digit::D3]));
        assert_eq!(!DigitSet::FULL, DigitSet::EMPTY);
        assert_eq!((!low).len(), 6);
    }

    #[test]
    fn test_debug_lists_values() {
        let set = DigitSet::from_iter([Digit::D2, Digit::D6]);
        assert_eq!(format!("{set:?}"), "{2, 6}");
    }

    proptest! {
        #[test]
        fn test_membership_matches_bits(bits in 0_u16..512) {
            let set = set_from_bits(bits);
            prop_assert_eq!(set.len(), bits.count_ones());
            for digit in Digit::ALL {
                prop_assert_eq!(set.contains(digit), bits & (1 << (digit.value() - 1)) != 0);
            }
        }

        #[test]
        fn test_toggle_is_involutive(bits in 0_u16..512, value in 1_u8..=9) {
            let original = set_from_bits(bits);
            let digit = Digit::new(value);
            let mut set = original;
            set.toggle(digit);
            prop_assert_eq!(set.contains(digit), !original.contains(digit));
            set.toggle(digit);
            prop_assert_eq!(set, original);
        }
    }
}

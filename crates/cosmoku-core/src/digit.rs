//! The digit type for 9x9 puzzles.

use std::fmt::{self, Display};

/// A puzzle digit in the range 1-9.
///
/// Digits are a fieldless enum rather than a raw `u8`, so a cell can never
/// hold an out-of-range value. Conversions from untrusted numbers go through
/// [`Digit::try_new`]; [`Digit::new`] is for values already known to be valid
/// and panics otherwise.
///
/// # Examples
///
/// ```
/// use cosmoku_core::Digit;
///
/// assert_eq!(Digit::new(3), Digit::D3);
/// assert_eq!(Digit::D7.value(), 7);
/// assert_eq!(Digit::try_new(0), None);
///
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmoku_core::Digit;
    ///
    /// assert_eq!(Digit::new(5), Digit::D5);
    /// ```
    ///
    /// ```should_panic
    /// use cosmoku_core::Digit;
    ///
    /// let _ = Digit::new(10);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Self {
        match Self::try_new(value) {
            Some(digit) => digit,
            None => panic!("digit value out of range"),
        }
    }

    /// Creates a digit from a value, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmoku_core::Digit;
    ///
    /// assert_eq!(Digit::try_new(9), Some(Digit::D9));
    /// assert_eq!(Digit::try_new(42), None);
    /// ```
    #[must_use]
    pub const fn try_new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from the characters `'1'..='9'`.
    ///
    /// Returns `None` for every other character. Used by the grid string
    /// format.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let value = u8::try_from(ch.to_digit(10)?).ok()?;
        Self::try_new(value)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the character `'1'..='9'` for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::new(digit.value()), digit);
            assert_eq!(Digit::try_new(digit.value()), Some(digit));
        }
    }

    #[test]
    fn test_all_is_ascending() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in (1..).zip(Digit::ALL) {
            assert_eq!(digit.value(), i);
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(Digit::try_new(0), None);
        assert_eq!(Digit::try_new(10), None);
        assert_eq!(Digit::try_new(255), None);
    }

    #[test]
    #[should_panic(expected = "digit value out of range")]
    fn test_new_zero_panics() {
        let _ = Digit::new(0);
    }

    #[test]
    fn test_char_conversions() {
        assert_eq!(Digit::from_char('1'), Some(Digit::D1));
        assert_eq!(Digit::from_char('9'), Some(Digit::D9));
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('a'), None);

        for digit in Digit::ALL {
            assert_eq!(Digit::from_char(digit.to_char()), Some(digit));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Digit::D4.to_string(), "4");
        let value: u8 = Digit::D4.into();
        assert_eq!(value, 4);
    }
}

//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// A 32-byte seed fixing every random choice of puzzle generation.
///
/// The same seed always produces the same puzzle, which keeps benchmarks
/// stable and lets players share puzzles as a string. Seeds display as 64
/// lowercase hex characters and parse from the same format.
///
/// # Examples
///
/// ```
/// use cosmoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily 2024-07-01");
/// let restored: PuzzleSeed = seed.to_string().parse().unwrap();
/// assert_eq!(restored, seed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// Useful for daily puzzles and other human-memorable seeds: the same
    /// phrase always maps to the same puzzle.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

/// Error parsing a [`PuzzleSeed`] from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    WrongLength {
        /// The length of the rejected string.
        len: usize,
    },
    /// The string contained a non-hex character.
    #[display("invalid character {ch:?} in seed")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        if s.len() != 64 {
            return Err(ParseSeedError::WrongLength { len: s.len() });
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = hex_value(pair[0])? << 4 | hex_value(pair[1])?;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> Result<u8, ParseSeedError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ParseSeedError::InvalidChar {
            ch: char::from(byte),
        }),
    }
}

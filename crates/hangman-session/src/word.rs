//! The fixed word list and checked indexes into it.

use std::fmt;

use rand::Rng;

/// Every word a session can be asked to guess. Tokens store positions in
/// this list, so its order is part of the token format.
pub const WORDS: [&str; 9] = [
    "FINESSE", "WHITMAN", "TACONY", "VECCHIO", "PALMYRA", "GOLDEN", "BRIDGE",
    "NARROWS", "BIFROST",
];

/// Number of entries in [`WORDS`].
pub const WORD_COUNT: usize = WORDS.len();

/// A position in [`WORDS`], guaranteed in range.
///
/// Same newtype idea as an id type: a bare `u8` could be anything, a
/// `WordIndex` always names a word. Its `Display` form is the single
/// digit the token layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordIndex(u8);

impl WordIndex {
    /// Returns the index if `index` names a word.
    pub fn new(index: u8) -> Option<Self> {
        (usize::from(index) < WORD_COUNT).then_some(Self(index))
    }

    /// Parses one token digit.
    pub fn from_digit(digit: char) -> Option<Self> {
        let value = digit.to_digit(10)?;
        Self::new(u8::try_from(value).ok()?)
    }

    /// Picks any word uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..WORD_COUNT as u8))
    }

    /// Every index in list order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..WORD_COUNT as u8).map(Self)
    }

    /// The raw position.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The word this index names.
    pub fn word(self) -> &'static str {
        WORDS[usize::from(self.0)]
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

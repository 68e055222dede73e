//! The server's secret key.

use std::fmt;
use std::str::FromStr;

use crate::{CodecError, symbol_index};

/// A validated cipher key.
///
/// The key is read once at startup and then passed explicitly to every
/// encode and decode call. Construction checks that every character is
/// in the alphabet, so the cipher itself never has to deal with a bad
/// key symbol.
///
/// Only the per-position shift values are kept. `Debug` prints the
/// length, never the key.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    shifts: Vec<usize>,
}

impl SecretKey {
    /// Validates `key` and builds a `SecretKey` from it.
    ///
    /// # Errors
    /// - [`CodecError::EmptyKey`] if `key` is empty.
    /// - [`CodecError::InvalidSymbol`] for the first character outside
    ///   the alphabet.
    pub fn new(key: &str) -> Result<Self, CodecError> {
        if key.is_empty() {
            return Err(CodecError::EmptyKey);
        }

        let shifts = key
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                symbol_index(symbol)
                    .ok_or(CodecError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { shifts })
    }

    /// Number of symbols in the key, which is also the longest data
    /// string it can encode.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always `false` for a constructed key; present for API symmetry
    /// with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub(crate) fn shifts(&self) -> &[usize] {
        &self.shifts
    }
}

impl FromStr for SecretKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} symbols)", self.shifts.len())
    }
}

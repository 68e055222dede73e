//! The three-field layout a session is flattened into before encoding.
//!
//! ```text
//! <previous word digits>-<current word index>-<guess>,<guess>,...
//!         "25"          -        "7"         -   "E,T,BRIDGE"
//! ```
//!
//! This module only splits and joins strings. Interpreting the fields
//! (parsing digits, classifying guesses) belongs to the session layer.

use crate::{CodecError, SecretKey, cipher};

/// Separates the three top-level fields.
pub const FIELD_SEPARATOR: char = '-';

/// Separates individual guesses inside the third field.
pub const GUESS_SEPARATOR: char = ',';

/// A session's data string split into its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFields {
    /// Previously played word indexes, one digit each, oldest first.
    pub previous: String,

    /// The active word index, or empty before the first word is chosen.
    pub current: String,

    /// Guesses in the order they were entered.
    pub guesses: Vec<String>,
}

impl TokenFields {
    /// Joins the fields into the plain data string.
    pub fn to_data_string(&self) -> String {
        format!(
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.previous,
            self.current,
            self.guesses.join(GUESS_SEPARATOR.to_string().as_str()),
        )
    }

    /// Splits a plain data string into fields.
    ///
    /// An empty third field means no guesses, not one empty guess.
    ///
    /// # Errors
    /// [`CodecError::FieldCount`] unless there are exactly three fields.
    pub fn parse(data: &str) -> Result<Self, CodecError> {
        let parts: Vec<&str> = data.split(FIELD_SEPARATOR).collect();
        let [previous, current, guesses] = parts.as_slice() else {
            return Err(CodecError::FieldCount(parts.len()));
        };

        let guesses = if guesses.is_empty() {
            Vec::new()
        } else {
            guesses.split(GUESS_SEPARATOR).map(str::to_owned).collect()
        };

        Ok(Self {
            previous: (*previous).to_owned(),
            current: (*current).to_owned(),
            guesses,
        })
    }

    /// Joins and encodes the fields into a token.
    pub fn encode(&self, key: &SecretKey) -> Result<String, CodecError> {
        cipher::encode(&self.to_data_string(), key)
    }

    /// Decodes a token and splits it into fields.
    pub fn decode(token: &str, key: &SecretKey) -> Result<Self, CodecError> {
        Self::parse(&cipher::decode(token, key)?)
    }
}

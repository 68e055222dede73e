//! Error types for the codec layer.

/// Errors that can occur while encoding or decoding a token.
///
/// None of these are retried: the codec is pure, so the same input will
/// fail the same way every time. The session layer wraps them and the
/// HTTP layer turns them into an "invalid session" response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A character outside the 38-symbol alphabet was found in a key,
    /// a token, or a data string.
    #[error("symbol {symbol:?} at position {position} is not in the token alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    /// The input is longer than the key. Every input position needs its
    /// own key position; the key is never repeated.
    #[error("key covers {available} symbols but {needed} are required")]
    KeyTooShort { needed: usize, available: usize },

    /// A decoded data string did not split into exactly three fields.
    #[error("expected 3 token fields, found {0}")]
    FieldCount(usize),

    /// The secret key has no symbols at all.
    #[error("secret key must not be empty")]
    EmptyKey,
}

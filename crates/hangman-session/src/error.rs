//! Error types for the session layer.

use hangman_codec::CodecError;

use crate::InvalidGuess;

/// Reasons a token cannot be turned into a [`GameSession`](crate::GameSession)
/// (or a session into a token).
///
/// Rejected player input is not an error here. Duplicate word guesses and
/// malformed guesses become messages in `GameSession::errors` and the
/// request carries on.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The cipher or the field layout failed.
    ///
    /// `#[from]` lets `?` lift a `CodecError` straight into this variant.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A word index field held something other than digits 0–8.
    #[error("invalid word index {0:?}")]
    InvalidIndex(String),

    /// A guess stored in the token is not a letter or a word.
    #[error("invalid guess {guess:?} in token: {reason}")]
    InvalidGuess {
        guess: String,
        #[source]
        reason: InvalidGuess,
    },
}

//! The session record and its token conversion.
//!
//! A session is only ever as old as the request handling it:
//!
//! ```text
//!   token ──decode──→ GameSession ──(one operation)──→ GameSession ──encode──→ token
//! ```
//!
//! Only the history, the current word, and the guesses travel in the
//! token. Errors, the word display, and the end-of-game flags are
//! recomputed by every request.

use hangman_codec::{SecretKey, TokenFields};

use crate::play::STARTING_GUESSES;
use crate::{Guess, RenderContext, SessionError, WordIndex};

/// One player's hangman session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Words already played this session, oldest first.
    pub previous_word_indexes: Vec<WordIndex>,

    /// The word being guessed. `None` until the first word is picked.
    pub current_word_index: Option<WordIndex>,

    /// Every accepted guess, in the order it was made.
    pub guesses: Vec<Guess>,

    /// Messages for the player produced by this request. Never encoded.
    pub errors: Vec<String>,

    /// One cell per letter of the current word; filled by
    /// [`update_word_display`](Self::update_word_display).
    pub word_display: Vec<char>,

    /// Filled by [`check_game_end`](Self::check_game_end).
    pub guesses_left: i32,

    /// Filled by [`check_game_end`](Self::check_game_end).
    pub victory: bool,

    /// Filled by [`check_game_end`](Self::check_game_end).
    pub defeat: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            previous_word_indexes: Vec::new(),
            current_word_index: None,
            guesses: Vec::new(),
            errors: Vec::new(),
            word_display: Vec::new(),
            guesses_left: STARTING_GUESSES,
            victory: false,
            defeat: false,
        }
    }
}

impl GameSession {
    /// An empty session with no word chosen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from a token.
    ///
    /// # Errors
    /// - [`SessionError::Codec`] for foreign symbols, a token longer than
    ///   the key, or a field count other than three.
    /// - [`SessionError::InvalidIndex`] when a word index is not a single
    ///   digit in 0–8.
    /// - [`SessionError::InvalidGuess`] when a stored guess is empty or
    ///   contains anything but letters.
    pub fn decode(token: &str, key: &SecretKey) -> Result<Self, SessionError> {
        let fields = TokenFields::decode(token, key)?;
        Self::from_fields(fields)
    }

    /// Encodes the persistent part of the session into a token.
    ///
    /// # Errors
    /// [`SessionError::Codec`] with `KeyTooShort` once the session has
    /// grown longer than the key.
    pub fn encode(&self, key: &SecretKey) -> Result<String, SessionError> {
        Ok(self.to_fields().encode(key)?)
    }

    /// The word being guessed, if one has been picked.
    pub fn current_word(&self) -> Option<&'static str> {
        self.current_word_index.map(WordIndex::word)
    }

    /// The letter guesses, in order, repeats included.
    pub fn letters_guessed(&self) -> Vec<char> {
        self.guesses.iter().filter_map(Guess::as_letter).collect()
    }

    /// The first whole-word guess.
    ///
    /// `add_guess` never accepts a second one, but a hand-made token can
    /// hold several. Only the first counts.
    pub fn word_guessed(&self) -> Option<&str> {
        self.guesses.iter().find_map(Guess::as_word)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Flattens the session for rendering. `url` is the token the page
    /// should link back to.
    pub fn render_context(&self, url: &str) -> RenderContext {
        RenderContext {
            url: url.to_owned(),
            errors: self.errors.join(" "),
            word_display: join_cells(&self.word_display),
            guesses: self
                .guesses
                .iter()
                .map(Guess::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            guesses_left: self.guesses_left,
            victory: self.victory,
            defeat: self.defeat,
            prev_word_count: self.previous_word_indexes.len(),
        }
    }

    fn to_fields(&self) -> TokenFields {
        TokenFields {
            previous: self
                .previous_word_indexes
                .iter()
                .map(WordIndex::to_string)
                .collect(),
            current: self
                .current_word_index
                .map(|index| index.to_string())
                .unwrap_or_default(),
            guesses: self.guesses.iter().map(Guess::to_string).collect(),
        }
    }

    fn from_fields(fields: TokenFields) -> Result<Self, SessionError> {
        let previous_word_indexes = fields
            .previous
            .chars()
            .map(WordIndex::from_digit)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SessionError::InvalidIndex(fields.previous.clone()))?;

        let current_word_index = if fields.current.is_empty() {
            None
        } else {
            let mut digits = fields.current.chars();
            let index = match (digits.next(), digits.next()) {
                (Some(digit), None) => WordIndex::from_digit(digit),
                _ => None,
            }
            .ok_or_else(|| SessionError::InvalidIndex(fields.current.clone()))?;
            Some(index)
        };

        let guesses = fields
            .guesses
            .into_iter()
            .map(|raw| {
                Guess::parse(&raw)
                    .map_err(|reason| SessionError::InvalidGuess { guess: raw, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            previous_word_indexes,
            current_word_index,
            guesses,
            ..Self::default()
        })
    }
}

fn join_cells(cells: &[char]) -> String {
    cells
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use hangman_codec::{CodecError, encode};

    use super::*;

    fn key() -> SecretKey {
        SecretKey::new("Q7W-E,R4TYU1IOP9ASDFGHJKLZXCVBNM0-2358,6QWERTYUIOPLKJHGFDSAZXCVBNM")
            .expect("valid test key")
    }

    fn idx(i: u8) -> WordIndex {
        WordIndex::new(i).expect("index in range")
    }

    fn letter(c: char) -> Guess {
        Guess::Letter(c)
    }

    fn word(w: &str) -> Guess {
        Guess::Word(w.into())
    }

    #[test]
    fn test_decode_reverses_encode() {
        let session = GameSession {
            previous_word_indexes: vec![idx(2), idx(5)],
            current_word_index: Some(idx(7)),
            guesses: vec![
                letter('E'),
                letter('T'),
                letter('A'),
                letter('O'),
                word("BRIDGE"),
                letter('I'),
            ],
            ..GameSession::default()
        };

        let token = session.encode(&key()).expect("encode");
        let decoded = GameSession::decode(&token, &key()).expect("decode");

        assert_eq!(decoded, session);
        assert_eq!(decoded.current_word(), Some("NARROWS"));
        assert_eq!(decoded.letters_guessed(), vec!['E', 'T', 'A', 'O', 'I']);
        assert_eq!(decoded.word_guessed(), Some("BRIDGE"));
    }

    #[test]
    fn test_encode_after_decode_reproduces_token() {
        let token = encode("0134-6-Z,Q,GOLDEN", &key()).unwrap();
        let session = GameSession::decode(&token, &key()).unwrap();
        assert_eq!(session.encode(&key()).unwrap(), token);
    }

    #[test]
    fn test_encode_keeps_index_zero() {
        let session = GameSession {
            previous_word_indexes: vec![idx(0)],
            current_word_index: Some(idx(0)),
            ..GameSession::default()
        };
        let token = session.encode(&key()).unwrap();
        let decoded = GameSession::decode(&token, &key()).unwrap();
        assert_eq!(decoded.current_word(), Some("FINESSE"));
        assert_eq!(decoded.previous_word_indexes, vec![idx(0)]);
    }

    #[test]
    fn test_decode_empty_current_field_is_no_word() {
        let token = encode("--", &key()).unwrap();
        let session = GameSession::decode(&token, &key()).unwrap();
        assert_eq!(session, GameSession::new());
        assert_eq!(session.current_word(), None);
    }

    #[test]
    fn test_decode_keeps_first_of_several_word_guesses() {
        let token = encode("-3-E,BRIDGE,VECCHIO", &key()).unwrap();
        let session = GameSession::decode(&token, &key()).unwrap();
        assert_eq!(session.word_guessed(), Some("BRIDGE"));
        assert_eq!(session.guesses.len(), 3);
    }

    #[test]
    fn test_decode_wrong_field_count_returns_codec_error() {
        let token = encode("12-3", &key()).unwrap();
        let result = GameSession::decode(&token, &key());
        assert!(matches!(
            result,
            Err(SessionError::Codec(CodecError::FieldCount(2)))
        ));
    }

    #[test]
    fn test_decode_foreign_symbol_returns_codec_error() {
        let result = GameSession::decode("abc", &key());
        assert!(matches!(
            result,
            Err(SessionError::Codec(CodecError::InvalidSymbol { .. }))
        ));
    }

    #[test]
    fn test_decode_non_numeric_current_returns_invalid_index() {
        let token = encode("1-X-", &key()).unwrap();
        let result = GameSession::decode(&token, &key());
        assert!(matches!(result, Err(SessionError::InvalidIndex(f)) if f == "X"));
    }

    #[test]
    fn test_decode_out_of_range_index_returns_invalid_index() {
        let current = encode("1-9-", &key()).unwrap();
        assert!(matches!(
            GameSession::decode(&current, &key()),
            Err(SessionError::InvalidIndex(_))
        ));

        let padded = encode("1-07-", &key()).unwrap();
        assert!(matches!(
            GameSession::decode(&padded, &key()),
            Err(SessionError::InvalidIndex(f)) if f == "07"
        ));

        let previous = encode("19-2-", &key()).unwrap();
        assert!(matches!(
            GameSession::decode(&previous, &key()),
            Err(SessionError::InvalidIndex(f)) if f == "19"
        ));
    }

    #[test]
    fn test_decode_empty_guess_entry_returns_invalid_guess() {
        let token = encode("-1-A,,B", &key()).unwrap();
        let result = GameSession::decode(&token, &key());
        assert!(matches!(
            result,
            Err(SessionError::InvalidGuess { ref guess, .. }) if guess.is_empty()
        ));
    }

    #[test]
    fn test_render_context_joins_with_spaces() {
        let session = GameSession {
            previous_word_indexes: vec![idx(1), idx(4)],
            current_word_index: Some(idx(2)),
            guesses: vec![letter('T'), letter('A'), word("TACKLE")],
            errors: vec!["first.".into(), "second.".into()],
            word_display: vec!['T', 'A', '_'],
            guesses_left: 7,
            ..GameSession::default()
        };

        let ctx = session.render_context("TOKEN");

        assert_eq!(ctx.url, "TOKEN");
        assert_eq!(ctx.errors, "first. second.");
        assert_eq!(ctx.word_display, "T A _");
        assert_eq!(ctx.guesses, "T A TACKLE");
        assert_eq!(ctx.guesses_left, 7);
        assert_eq!(ctx.prev_word_count, 2);
        assert!(!ctx.victory);
        assert!(!ctx.defeat);
    }
}

//! Letter and word guesses.

use std::fmt;

/// One player submission.
///
/// Whether a guess is a letter or a word is decided once, when it is
/// parsed, instead of by checking its length wherever it is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A single uppercase letter.
    Letter(char),

    /// Two or more uppercase letters, guessed as the whole word.
    Word(String),
}

/// Why raw input is not a valid guess.
///
/// The messages are shown to the player as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGuess {
    #[error("Please enter a letter or a word.")]
    Empty,

    #[error("Guesses may only contain letters.")]
    NotLetters,
}

impl Guess {
    /// Normalizes `raw` (trim, uppercase) and classifies it.
    ///
    /// # Errors
    /// - [`InvalidGuess::Empty`] if nothing is left after trimming.
    /// - [`InvalidGuess::NotLetters`] if any character is not `A`–`Z`
    ///   after uppercasing. Digits, `-` and `,` are rejected here so they
    ///   can never break the token's field layout.
    pub fn parse(raw: &str) -> Result<Self, InvalidGuess> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(InvalidGuess::Empty);
        }
        if !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(InvalidGuess::NotLetters);
        }

        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(Self::Letter(letter)),
            _ => Ok(Self::Word(normalized)),
        }
    }

    /// The letter, if this is a letter guess.
    pub fn as_letter(&self) -> Option<char> {
        match self {
            Self::Letter(letter) => Some(*letter),
            Self::Word(_) => None,
        }
    }

    /// The word, if this is a whole-word guess.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Letter(_) => None,
            Self::Word(word) => Some(word),
        }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{letter}"),
            Self::Word(word) => f.write_str(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_character_is_letter() {
        assert_eq!(Guess::parse("e"), Ok(Guess::Letter('E')));
        assert_eq!(Guess::parse("  Q "), Ok(Guess::Letter('Q')));
    }

    #[test]
    fn test_parse_several_characters_is_word() {
        assert_eq!(Guess::parse("Bridge"), Ok(Guess::Word("BRIDGE".into())));
        assert_eq!(Guess::parse("OX"), Ok(Guess::Word("OX".into())));
    }

    #[test]
    fn test_parse_blank_returns_empty() {
        assert_eq!(Guess::parse(""), Err(InvalidGuess::Empty));
        assert_eq!(Guess::parse("   "), Err(InvalidGuess::Empty));
    }

    #[test]
    fn test_parse_separator_or_digit_returns_not_letters() {
        for raw in ["-", ",", "7", "A,B", "GOLD-EN", "NEW YORK", "é"] {
            assert_eq!(Guess::parse(raw), Err(InvalidGuess::NotLetters), "{raw:?}");
        }
    }

    #[test]
    fn test_display_matches_token_form() {
        assert_eq!(Guess::Letter('T').to_string(), "T");
        assert_eq!(Guess::Word("TACONY".into()).to_string(), "TACONY");
    }

    #[test]
    fn test_accessors_split_variants() {
        let letter = Guess::Letter('A');
        let word = Guess::Word("GOLDEN".into());
        assert_eq!(letter.as_letter(), Some('A'));
        assert_eq!(letter.as_word(), None);
        assert_eq!(word.as_letter(), None);
        assert_eq!(word.as_word(), Some("GOLDEN"));
    }

    #[test]
    fn test_invalid_guess_messages() {
        assert_eq!(
            InvalidGuess::Empty.to_string(),
            "Please enter a letter or a word."
        );
        assert_eq!(
            InvalidGuess::NotLetters.to_string(),
            "Guesses may only contain letters."
        );
    }
}

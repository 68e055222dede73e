//! Positional shift cipher over [`ALPHABET`].
//!
//! Position `i` of the input is shifted by the value of key position `i`:
//!
//! ```text
//! encode: out[i] = ALPHABET[(value(data[i])  + value(key[i])) mod 38]
//! decode: out[i] = ALPHABET[(value(token[i]) - value(key[i])) mod 38]
//! ```
//!
//! The two are exact inverses for the same key. The key is never wrapped
//! around; inputs longer than the key are rejected.

use crate::{ALPHABET, ALPHABET_LEN, CodecError, SecretKey, symbol_index};

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Shifts every symbol of `data` forward by the matching key symbol.
///
/// # Errors
/// - [`CodecError::KeyTooShort`] if `data` has more symbols than `key`.
/// - [`CodecError::InvalidSymbol`] if `data` contains a symbol outside
///   the alphabet.
///
/// # Example
///
/// ```rust
/// use hangman_codec::{SecretKey, decode, encode};
///
/// let key = SecretKey::new("HANGMANKEY").unwrap();
/// let token = encode("25-7-E,T", &key).unwrap();
/// assert_eq!(decode(&token, &key).unwrap(), "25-7-E,T");
/// ```
pub fn encode(data: &str, key: &SecretKey) -> Result<String, CodecError> {
    shift(data, key, Direction::Forward)
}

/// Shifts every symbol of `token` back by the matching key symbol.
///
/// # Errors
/// Same conditions as [`encode`], applied to the token.
pub fn decode(token: &str, key: &SecretKey) -> Result<String, CodecError> {
    shift(token, key, Direction::Backward)
}

fn shift(
    input: &str,
    key: &SecretKey,
    direction: Direction,
) -> Result<String, CodecError> {
    let needed = input.chars().count();
    if needed > key.len() {
        return Err(CodecError::KeyTooShort {
            needed,
            available: key.len(),
        });
    }

    input
        .chars()
        .zip(key.shifts())
        .enumerate()
        .map(|(position, (symbol, &offset))| {
            let value = symbol_index(symbol)
                .ok_or(CodecError::InvalidSymbol { symbol, position })?;
            let shifted = match direction {
                Direction::Forward => (value + offset) % ALPHABET_LEN,
                Direction::Backward => {
                    (value + ALPHABET_LEN - offset) % ALPHABET_LEN
                }
            };
            Ok(ALPHABET[shifted])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> SecretKey {
        SecretKey::new(s).expect("valid test key")
    }

    #[test]
    fn test_encode_zero_key_is_identity() {
        // 'A' has value 0, so a key of all 'A's shifts nothing.
        let token = encode("12-3-E,BRIDGE", &key(&"A".repeat(20))).unwrap();
        assert_eq!(token, "12-3-E,BRIDGE");
    }

    #[test]
    fn test_encode_wraps_modulo_alphabet() {
        // ',' (37) + 'B' (1) = 38 → 0 → 'A'
        // '9' (35) + 'D' (3) = 38 → 0 → 'A'
        // 'Z' (25) + 'B' (1) = 26 → '0'
        assert_eq!(encode(",9Z", &key("BDB")).unwrap(), "AA0");
    }

    #[test]
    fn test_decode_wraps_below_zero() {
        // 'A' (0) - 'B' (1) = -1 → 37 → ','
        assert_eq!(decode("A", &key("B")).unwrap(), ",");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let key = key("THEQUICKBROWNFOX-JUMPS,OVER9THE0LAZYDOG");
        let data = "0123456-8-E,T,A,O,NARROWS,I";
        let token = encode(data, &key).unwrap();
        assert_ne!(token, data);
        assert_eq!(decode(&token, &key).unwrap(), data);
    }

    #[test]
    fn test_encode_uses_only_key_prefix() {
        let short = encode("ABC", &key("XYZ")).unwrap();
        let long = encode("ABC", &key("XYZ123456")).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_encode_data_longer_than_key_returns_key_too_short() {
        let result = encode("1-2-ABC", &key("KEY"));
        assert_eq!(
            result,
            Err(CodecError::KeyTooShort {
                needed: 7,
                available: 3
            })
        );
    }

    #[test]
    fn test_encode_foreign_symbol_returns_invalid_symbol() {
        let result = encode("1-2-a", &key("KEYKEYKEY"));
        assert_eq!(
            result,
            Err(CodecError::InvalidSymbol {
                symbol: 'a',
                position: 4
            })
        );
    }

    #[test]
    fn test_decode_foreign_symbol_returns_invalid_symbol() {
        let result = decode("AB/", &key("KEYKEY"));
        assert!(matches!(
            result,
            Err(CodecError::InvalidSymbol { symbol: '/', position: 2 })
        ));
    }

    #[test]
    fn test_encode_empty_input_is_empty_token() {
        assert_eq!(encode("", &key("KEY")).unwrap(), "");
    }
}

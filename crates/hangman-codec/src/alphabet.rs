//! The fixed token alphabet.

/// Every symbol that may appear in a key, a token, or a decoded data
/// string, in cipher order. Position in this array is the symbol's value.
pub const ALPHABET: [char; 38] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3',
    '4', '5', '6', '7', '8', '9', '-', ',',
];

/// Number of symbols in [`ALPHABET`]; the cipher's modulus.
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Returns the value of `symbol` (its position in [`ALPHABET`]), or
/// `None` when the symbol is not part of the alphabet.
///
/// Lowercase letters are foreign symbols. Callers normalize case before
/// anything reaches the codec.
pub fn symbol_index(symbol: char) -> Option<usize> {
    match symbol {
        'A'..='Z' => Some(symbol as usize - 'A' as usize),
        '0'..='9' => Some(26 + (symbol as usize - '0' as usize)),
        '-' => Some(36),
        ',' => Some(37),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_index_matches_alphabet_position() {
        for (position, symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_index(*symbol), Some(position), "{symbol}");
        }
    }

    #[test]
    fn test_symbol_index_foreign_symbols_return_none() {
        for symbol in ['a', 'z', ' ', '_', '/', 'É', '?'] {
            assert_eq!(symbol_index(symbol), None, "{symbol:?}");
        }
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let mut seen = ALPHABET.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ALPHABET_LEN);
    }
}

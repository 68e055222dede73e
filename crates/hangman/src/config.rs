//! Server configuration read from the environment.

use hangman_codec::{CodecError, SecretKey};

/// Environment variable holding the token key. Required.
pub const KEY_VAR: &str = "HANGMAN_KEY";

/// Environment variable holding the listen address. Optional.
pub const BIND_VAR: &str = "HANGMAN_BIND";

/// Listen address used when [`BIND_VAR`] is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Configuration problems found at startup. Any of these stops the
/// process before it accepts a request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No key was configured. Tokens cannot be read or written without one.
    #[error("HANGMAN_KEY is not set")]
    MissingKey,

    /// The configured key is empty or contains a symbol outside the
    /// token alphabet.
    #[error("HANGMAN_KEY is not a valid key: {0}")]
    InvalidKey(#[source] CodecError),
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on, e.g. `"0.0.0.0:8080"`.
    pub bind_addr: String,

    /// Key for every token this server issues or accepts. Also bounds
    /// how long a session can grow.
    pub key: SecretKey,
}

impl ServerConfig {
    /// Reads [`KEY_VAR`] and [`BIND_VAR`] from the process environment.
    ///
    /// # Errors
    /// [`ConfigError::MissingKey`] or [`ConfigError::InvalidKey`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw_key = lookup(KEY_VAR).ok_or(ConfigError::MissingKey)?;
        let key = SecretKey::new(raw_key.trim()).map_err(ConfigError::InvalidKey)?;

        let bind_addr = lookup(BIND_VAR)
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self { bind_addr, key })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_missing_key_returns_error() {
        let result = ServerConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::MissingKey)));
    }

    #[test]
    fn test_from_lookup_invalid_key_returns_error() {
        let result = ServerConfig::from_lookup(lookup(&[(KEY_VAR, "not valid")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidKey(CodecError::InvalidSymbol { .. }))
        ));
    }

    #[test]
    fn test_from_lookup_empty_key_returns_error() {
        let result = ServerConfig::from_lookup(lookup(&[(KEY_VAR, "  ")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidKey(CodecError::EmptyKey))
        ));
    }

    #[test]
    fn test_from_lookup_defaults_bind_addr() {
        let config =
            ServerConfig::from_lookup(lookup(&[(KEY_VAR, "ABC123")])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.key.len(), 6);
    }

    #[test]
    fn test_from_lookup_reads_bind_addr_and_trims_key() {
        let config = ServerConfig::from_lookup(lookup(&[
            (KEY_VAR, "ABC123\n"),
            (BIND_VAR, "0.0.0.0:9000"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.key, SecretKey::new("ABC123").unwrap());
    }
}

//! Token codec for stateless hangman sessions.
//!
//! A hangman session never lives on the server. Instead, the whole game
//! record is flattened into a short data string, shifted symbol by symbol
//! against a server-held key, and handed to the client as a URL path
//! segment. This crate owns that transform:
//!
//! - **Alphabet** ([`ALPHABET`], [`symbol_index`]): the 38 symbols every
//!   token, key, and data string is made of.
//! - **Key** ([`SecretKey`]): the validated server secret.
//! - **Cipher** ([`encode`], [`decode`]): the positional shift in both
//!   directions.
//! - **Layout** ([`TokenFields`]): the three `-`-separated fields a
//!   session is flattened into.
//! - **Errors** ([`CodecError`]).
//!
//! # Not encryption
//!
//! The cipher is a Vigenère-style substitution. Anyone holding a few
//! tokens can recover the key with pencil and paper. It keeps casual
//! players from reading the answer out of the URL and nothing more.
//!
//! ```text
//! GameSession (above)  ← builds TokenFields, calls encode/decode
//!     ↕
//! Codec (this crate)   ← alphabet arithmetic, no game knowledge
//! ```

mod alphabet;
mod cipher;
mod error;
mod fields;
mod key;

pub use alphabet::{ALPHABET, ALPHABET_LEN, symbol_index};
pub use cipher::{decode, encode};
pub use error::CodecError;
pub use fields::{FIELD_SEPARATOR, GUESS_SEPARATOR, TokenFields};
pub use key::SecretKey;

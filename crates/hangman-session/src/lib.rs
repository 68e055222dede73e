//! Hangman session state and rules.
//!
//! A [`GameSession`] is rebuilt from a token at the start of every
//! request, changed by exactly one operation, and encoded back into a
//! token. Nothing outlives the request.
//!
//! # Key types
//!
//! - [`GameSession`]: the session record and every game operation
//! - [`Guess`]: a letter or a whole-word guess
//! - [`WordIndex`]: a checked position in the fixed [`WORDS`] list
//! - [`RenderContext`]: the flattened view handed to templates
//! - [`SessionError`]: why a token could not become a session
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP layer (above)     ← picks the operation from the route
//!     ↕
//! Session layer (this)   ← game rules, token ⇄ session
//!     ↕
//! Codec layer (below)    ← alphabet cipher and field layout
//! ```
//!
//! Operations that pick words take any [`rand::Rng`], so tests can pass a
//! seeded generator and servers a shared one.

mod context;
mod error;
mod guess;
mod play;
mod session;
mod word;

pub use context::RenderContext;
pub use error::SessionError;
pub use guess::{Guess, InvalidGuess};
pub use play::{DUPLICATE_WORD_GUESS, HIDDEN_LETTER, STARTING_GUESSES};
pub use session::GameSession;
pub use word::{WORD_COUNT, WORDS, WordIndex};

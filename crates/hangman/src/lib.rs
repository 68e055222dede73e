//! # Hangman
//!
//! An HTTP hangman server that keeps no sessions.
//!
//! Each game lives in its URL: `/session/{token}`, where the token is the
//! whole session run through the keyed cipher in [`hangman_codec`]. Every
//! request decodes the token, applies one rule from [`hangman_session`],
//! and redirects to the new token.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hangman::prelude::*;
//!
//! # async fn start() -> Result<(), HangmanError> {
//! let config = ServerConfig::from_env()?;
//! let server = HangmanServerBuilder::from_config(config).build().await?;
//! server.run().await
//! # }
//! ```
//!
//! ## Routes
//!
//! | Route | Effect |
//! |---|---|
//! | `GET /` | new session, redirect |
//! | `GET /session/{token}` | game page |
//! | `POST /session/{token}/guesses` | add the `guess` form field |
//! | `POST /session/{token}/undo` | undo one step |
//! | `POST /session/{token}/games` | next word |
//! | `GET /api/session/{token}` | page data as JSON |

mod config;
mod error;
mod handler;
mod render;
mod server;

pub use config::{BIND_VAR, ConfigError, DEFAULT_BIND_ADDR, KEY_VAR, ServerConfig};
pub use error::HangmanError;
pub use handler::SESSION_FULL;
pub use server::{HangmanServer, HangmanServerBuilder};

/// Everything needed to configure and run a server.
pub mod prelude {
    pub use crate::{
        ConfigError, HangmanError, HangmanServer, HangmanServerBuilder,
        ServerConfig,
    };
    pub use hangman_codec::SecretKey;
    pub use hangman_session::{GameSession, RenderContext};
}

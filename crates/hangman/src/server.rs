//! `HangmanServer` builder and server loop.
//!
//! The server holds no sessions. Its only shared state is the key and
//! the random source used to pick words.

use std::sync::Arc;

use axum::Router;
use hangman_codec::SecretKey;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::config::DEFAULT_BIND_ADDR;
use crate::handler::routes;
use crate::{ConfigError, HangmanError, ServerConfig};

/// Shared state passed to every request handler.
///
/// Wrapped in `Arc` so axum can clone it cheaply per request. The key is
/// read-only; the random source sits behind a `Mutex` because drawing a
/// word advances it.
pub(crate) struct AppState {
    pub(crate) key: SecretKey,
    pub(crate) rng: Mutex<StdRng>,
}

/// Builder for configuring and starting a hangman server.
///
/// # Example
///
/// ```rust,no_run
/// use hangman::prelude::*;
///
/// # async fn start() -> Result<(), HangmanError> {
/// let server = HangmanServerBuilder::new()
///     .bind("0.0.0.0:8080")
///     .key(SecretKey::new("MYSECRETKEY0123456789").unwrap())
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct HangmanServerBuilder {
    bind_addr: String,
    key: Option<SecretKey>,
    rng_seed: Option<u64>,
}

impl HangmanServerBuilder {
    /// Creates a new builder with default settings and no key.
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            key: None,
            rng_seed: None,
        }
    }

    /// Creates a builder from a loaded [`ServerConfig`].
    pub fn from_config(config: ServerConfig) -> Self {
        Self::new().bind(&config.bind_addr).key(config.key)
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the token key.
    pub fn key(mut self, key: SecretKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Seeds word selection so a run is reproducible. Without a seed the
    /// generator is seeded from the OS.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Builds the request router without binding a socket.
    ///
    /// # Errors
    /// [`ConfigError::MissingKey`] if no key was set.
    pub fn router(self) -> Result<Router, HangmanError> {
        let key = self.key.ok_or(ConfigError::MissingKey)?;
        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        tracing::debug!(key_len = key.len(), "router configured");
        Ok(routes(Arc::new(AppState {
            key,
            rng: Mutex::new(rng),
        })))
    }

    /// Binds the listener and returns a server ready to [`run`](HangmanServer::run).
    ///
    /// # Errors
    /// - [`HangmanError::Config`] if no key was set.
    /// - [`HangmanError::Io`] if the address cannot be bound.
    pub async fn build(self) -> Result<HangmanServer, HangmanError> {
        let bind_addr = self.bind_addr.clone();
        let router = self.router()?;
        let listener = TcpListener::bind(&bind_addr).await?;

        Ok(HangmanServer { listener, router })
    }
}

impl Default for HangmanServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound hangman server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct HangmanServer {
    listener: TcpListener,
    router: Router,
}

impl HangmanServer {
    /// Creates a new builder.
    pub fn builder() -> HangmanServerBuilder {
        HangmanServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), HangmanError> {
        tracing::info!(addr = ?self.listener.local_addr().ok(), "hangman server running");
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}

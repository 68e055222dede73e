//! Unified error type for the hangman server.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use hangman_session::SessionError;

use crate::ConfigError;
use crate::render;

/// Top-level error that wraps everything the server can fail with.
///
/// Session errors are split by direction: a token that will not decode
/// is a client error (400), a session that will not encode is a server
/// error (500). Both wrap `SessionError`, so neither variant uses
/// `#[from]` and handlers pick one with `map_err`.
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    /// Startup configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The token in the request path is not a valid session.
    #[error("invalid session: {0}")]
    InvalidSession(#[source] SessionError),

    /// A session could not be turned back into a token.
    #[error("could not encode session: {0}")]
    Encode(#[source] SessionError),

    /// Binding or serving the listener failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for HangmanError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSession(_) => {
                (StatusCode::BAD_REQUEST, Html(render::invalid_session_page()))
                    .into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                    .into_response()
            }
        }
    }
}

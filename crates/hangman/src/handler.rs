//! Request handlers: one game operation per route.
//!
//! Every handler follows the same shape:
//!   1. Decode the token from the path (or start an empty session)
//!   2. Apply exactly one operation
//!   3. Encode the session and redirect to its page, or render it
//!
//! Redirecting after each POST keeps the address bar on the new token,
//! so reloading or sharing the URL shows the current game.

use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use hangman_codec::CodecError;
use hangman_session::{GameSession, RenderContext, SessionError};
use serde::Deserialize;

use crate::HangmanError;
use crate::render;
use crate::server::AppState;

/// Shown when a guess would make the session longer than the key can encode.
pub const SESSION_FULL: &str = "This session is too long to record another guess.";

type SharedState = State<Arc<AppState>>;

pub(crate) fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/session/{token}", get(load_game))
        .route("/session/{token}/games", post(new_word))
        .route("/session/{token}/guesses", post(guess))
        .route("/session/{token}/undo", post(undo))
        .route("/api/session/{token}", get(session_context))
        .with_state(state)
}

/// Form body of `POST /session/{token}/guesses`.
#[derive(Debug, Deserialize)]
struct GuessForm {
    guess: String,
}

/// `GET /` starts a fresh session on a random word.
async fn home(State(state): SharedState) -> Result<Redirect, HangmanError> {
    let mut session = GameSession::new();
    {
        let mut rng = state.rng.lock().await;
        session.select_new_word(&mut *rng);
    }
    tracing::info!("new session started");
    redirect_to(&state, &session)
}

/// `POST /session/{token}/games` moves on to an unplayed word.
async fn new_word(
    State(state): SharedState,
    Path(token): Path<String>,
) -> Result<Redirect, HangmanError> {
    let mut session = decode(&state, &token)?;
    {
        let mut rng = state.rng.lock().await;
        session.select_new_word(&mut *rng);
    }
    redirect_to(&state, &session)
}

/// `POST /session/{token}/guesses` records one guess.
///
/// Rejected guesses re-render the unchanged session with the messages
/// instead of redirecting, since the messages are not part of the token.
async fn guess(
    State(state): SharedState,
    Path(token): Path<String>,
    Form(form): Form<GuessForm>,
) -> Result<Response, HangmanError> {
    let mut session = decode(&state, &token)?;
    session.add_guess(&form.guess);

    let next = match session.encode(&state.key) {
        Ok(next) => next,
        Err(SessionError::Codec(CodecError::KeyTooShort { needed, available })) => {
            tracing::debug!(needed, available, "session outgrew key");
            session = decode(&state, &token)?;
            session.errors.push(SESSION_FULL.to_owned());
            token.clone()
        }
        Err(e) => return Err(HangmanError::Encode(e)),
    };

    if session.has_errors() {
        let ctx = page_context(&mut session, &next);
        return Ok(Html(render::session_page(&ctx)).into_response());
    }

    Ok(Redirect::to(&session_path(&next)).into_response())
}

/// `POST /session/{token}/undo` steps back one guess or one word.
async fn undo(
    State(state): SharedState,
    Path(token): Path<String>,
) -> Result<Redirect, HangmanError> {
    let mut session = decode(&state, &token)?;
    {
        let mut rng = state.rng.lock().await;
        session.undo(&mut *rng);
    }
    redirect_to(&state, &session)
}

/// `GET /session/{token}` renders the game page.
async fn load_game(
    State(state): SharedState,
    Path(token): Path<String>,
) -> Result<Html<String>, HangmanError> {
    let ctx = load(&state, &token)?;
    Ok(Html(render::session_page(&ctx)))
}

/// `GET /api/session/{token}` returns the same view as JSON.
async fn session_context(
    State(state): SharedState,
    Path(token): Path<String>,
) -> Result<Json<RenderContext>, HangmanError> {
    Ok(Json(load(&state, &token)?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn decode(state: &AppState, token: &str) -> Result<GameSession, HangmanError> {
    GameSession::decode(token, &state.key).map_err(|e| {
        tracing::debug!(%token, error = %e, "rejected session token");
        HangmanError::InvalidSession(e)
    })
}

fn encode(state: &AppState, session: &GameSession) -> Result<String, HangmanError> {
    session.encode(&state.key).map_err(HangmanError::Encode)
}

fn load(state: &AppState, token: &str) -> Result<RenderContext, HangmanError> {
    let mut session = decode(state, token)?;
    let token = encode(state, &session)?;
    Ok(page_context(&mut session, &token))
}

fn page_context(session: &mut GameSession, token: &str) -> RenderContext {
    session.update_word_display();
    session.check_game_end();
    session.render_context(token)
}

fn redirect_to(state: &AppState, session: &GameSession) -> Result<Redirect, HangmanError> {
    let token = encode(state, session)?;
    Ok(Redirect::to(&session_path(&token)))
}

fn session_path(token: &str) -> String {
    format!("/session/{token}")
}

//! The flattened view of a session handed to the page template.

use serde::Serialize;

/// Everything a page needs to draw a session, already joined into
/// display strings.
///
/// Built by [`GameSession::render_context`](crate::GameSession::render_context)
/// after `update_word_display` and `check_game_end` have run. Serializes
/// to JSON with these exact field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    /// Token the page links back to.
    pub url: String,

    /// This request's messages, space-joined.
    pub errors: String,

    /// Word cells (`_` for hidden letters), space-joined.
    pub word_display: String,

    /// Guesses in order, space-joined.
    pub guesses: String,

    pub guesses_left: i32,
    pub victory: bool,
    pub defeat: bool,

    /// How many words were played before the current one.
    pub prev_word_count: usize,
}

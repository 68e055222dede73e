//! HTML pages.
//!
//! Two pages, built with `format!`: the game page for a session and the
//! page for a token that does not decode. Dynamic values are escaped.

use hangman_session::{RenderContext, WORD_COUNT};

/// Renders the game page for a session.
pub(crate) fn session_page(ctx: &RenderContext) -> String {
    let url = escape(&ctx.url);
    let mut body = String::new();

    if !ctx.errors.is_empty() {
        body.push_str(&format!(
            "<p class=\"errors\">{}</p>\n",
            escape(&ctx.errors)
        ));
    }

    body.push_str(&format!(
        "<p class=\"word\">{}</p>\n",
        escape(&ctx.word_display)
    ));
    body.push_str(&format!(
        "<p class=\"guesses\">Guesses: {}</p>\n",
        escape(&ctx.guesses)
    ));

    if ctx.victory {
        body.push_str("<p class=\"result\">You win!</p>\n");
    } else if ctx.defeat {
        body.push_str("<p class=\"result\">You lose.</p>\n");
    } else {
        body.push_str(&format!(
            "<p class=\"left\">Guesses left: {}</p>\n",
            ctx.guesses_left
        ));
        body.push_str(&format!(
            "<form method=\"post\" action=\"/session/{url}/guesses\">\
             <input name=\"guess\" autocomplete=\"off\" autofocus>\
             <button type=\"submit\">Guess</button></form>\n"
        ));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"/session/{url}/undo\">\
         <button type=\"submit\">Undo</button></form>\n"
    ));

    if offers_new_word(ctx) {
        body.push_str(&format!(
            "<form method=\"post\" action=\"/session/{url}/games\">\
             <button type=\"submit\">New word</button></form>\n"
        ));
    }

    body.push_str(&format!(
        "<p class=\"played\">Words played: {}</p>\n",
        ctx.prev_word_count
    ));

    layout(&body)
}

/// A new word is offered once the current game is over, unless it was
/// the last unplayed word.
fn offers_new_word(ctx: &RenderContext) -> bool {
    (ctx.victory || ctx.defeat) && ctx.prev_word_count < WORD_COUNT - 1
}

/// Renders the page shown for a token that does not decode.
pub(crate) fn invalid_session_page() -> String {
    layout(
        "<p class=\"errors\">This game link is invalid.</p>\n\
         <p><a href=\"/\">Start a new game</a></p>\n",
    )
}

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\">\
         <title>Hangman</title></head>\n<body>\n<h1>Hangman</h1>\n{body}</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

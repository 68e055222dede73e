//! Game rules: picking words, taking guesses, undo, and scoring.
//!
//! Every operation mutates the session in place through `&mut self`.
//! The ones that need chance take the random source as an argument, so
//! the caller decides whether it is seeded (tests) or shared (server).

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::{GameSession, Guess, WordIndex};

/// Wrong guesses a player may make before losing.
pub const STARTING_GUESSES: i32 = 8;

/// Display cell for a letter that has not been guessed yet.
pub const HIDDEN_LETTER: char = '_';

/// Shown when a second whole-word guess is attempted in one game.
pub const DUPLICATE_WORD_GUESS: &str =
    "You have already guessed a word in this game.";

impl GameSession {
    /// Starts a new game inside this session.
    ///
    /// The guesses are cleared and the current word (if any) joins the
    /// history. The new word is drawn uniformly from the words not yet
    /// played. Once all nine have been played the history is cleared and
    /// the draw covers every word except the one just finished.
    ///
    /// Returns the chosen index.
    pub fn select_new_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WordIndex {
        self.guesses.clear();
        let finished = self.current_word_index.take();
        if let Some(index) = finished {
            self.previous_word_indexes.push(index);
        }

        let mut candidates: Vec<WordIndex> = WordIndex::all()
            .filter(|index| !self.previous_word_indexes.contains(index))
            .collect();

        if candidates.is_empty() {
            tracing::info!(
                played = self.previous_word_indexes.len(),
                "word pool exhausted, starting a new cycle"
            );
            self.previous_word_indexes.clear();
            candidates = WordIndex::all()
                .filter(|index| Some(*index) != finished)
                .collect();
        }

        // The recycled pool keeps at least eight words, so the fallback
        // draw only covers an empty list.
        let index = candidates
            .choose(rng)
            .copied()
            .unwrap_or_else(|| WordIndex::random(rng));

        tracing::debug!(%index, previous = self.previous_word_indexes.len(), "selected new word");
        self.current_word_index = Some(index);
        index
    }

    /// Records a guess.
    ///
    /// Input is trimmed and uppercased first. Rejected input adds a
    /// message to [`errors`](GameSession::errors) and leaves the game
    /// untouched:
    ///
    /// - blank input, or anything other than letters
    /// - a second whole-word guess ([`DUPLICATE_WORD_GUESS`])
    ///
    /// Letters are never deduplicated. Guessing a wrong letter twice costs
    /// two guesses.
    pub fn add_guess(&mut self, raw: &str) {
        match Guess::parse(raw) {
            Err(reason) => {
                tracing::debug!(%reason, "guess rejected");
                self.errors.push(reason.to_string());
            }
            Ok(Guess::Word(_)) if self.word_guessed().is_some() => {
                tracing::debug!("second word guess rejected");
                self.errors.push(DUPLICATE_WORD_GUESS.to_owned());
            }
            Ok(guess) => self.guesses.push(guess),
        }
    }

    /// Steps back once.
    ///
    /// 1. With guesses: drop the latest one.
    /// 2. Without guesses but with history: go back to the previous word
    ///    (it leaves the history and becomes current again).
    /// 3. With neither: pick any word at random.
    pub fn undo<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.guesses.pop().is_some() {
            return;
        }

        let index = match self.previous_word_indexes.pop() {
            Some(previous) => previous,
            None => WordIndex::random(rng),
        };
        tracing::debug!(%index, "undo returned to word");
        self.current_word_index = Some(index);
    }

    /// Rebuilds [`word_display`](GameSession::word_display).
    ///
    /// A correct word guess reveals everything. Otherwise each letter of
    /// the word shows if it was guessed as a letter, and
    /// [`HIDDEN_LETTER`] if not.
    pub fn update_word_display(&mut self) {
        let Some(word) = self.current_word() else {
            self.word_display.clear();
            return;
        };

        if self.word_guessed() == Some(word) {
            self.word_display = word.chars().collect();
            return;
        }

        let letters = self.letters_guessed();
        self.word_display = word
            .chars()
            .map(|c| if letters.contains(&c) { c } else { HIDDEN_LETTER })
            .collect();
    }

    /// Recomputes `guesses_left`, `victory` and `defeat`.
    ///
    /// Each letter guess not in the word costs one guess, repeats
    /// included. A wrong word guess costs one more. Victory (the word was
    /// guessed, or all its distinct letters were) is checked before
    /// defeat (`guesses_left <= 0`), so at most one flag is set.
    pub fn check_game_end(&mut self) {
        let mut guesses_left = STARTING_GUESSES;
        let mut victory = false;

        if let Some(word) = self.current_word() {
            let target: BTreeSet<char> = word.chars().collect();
            let mut matched = BTreeSet::new();
            for letter in self.letters_guessed() {
                if target.contains(&letter) {
                    matched.insert(letter);
                } else {
                    guesses_left -= 1;
                }
            }

            let word_guess = self.word_guessed();
            if word_guess.is_some_and(|guess| guess != word) {
                guesses_left -= 1;
            }

            victory = word_guess == Some(word) || matched == target;
        }

        self.guesses_left = guesses_left;
        self.victory = victory;
        self.defeat = !victory && guesses_left <= 0;
    }
}

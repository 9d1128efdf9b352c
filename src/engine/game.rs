//! Game-state machine
//!
//! Owns all mutable state for one day's session: the in-progress input, the
//! submitted guesses, win/loss status, and the aggregated keyboard hints.
//! All input, whether from physical keys or an on-screen keyboard widget,
//! funnels through [`GameEngine::handle_input`] so both sources share one
//! set of semantics.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::KeyboardHints;
use crate::core::{Guess, LetterStatus, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::store::{SavedSession, StateStore};
use crate::words::WordProvider;

/// Lifecycle of one day's game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A raw input signal, identical for physical keys and widget clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// An alphabetic character was entered
    Letter(char),
    /// The last character of the in-progress guess should be removed
    Delete,
    /// The in-progress guess should be submitted
    Submit,
}

/// One display row of the guess grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    /// Letters padded with spaces to the full word length
    pub word: String,
    pub statuses: [LetterStatus; WORD_LENGTH],
}

impl BoardRow {
    fn empty() -> Self {
        Self {
            word: " ".repeat(WORD_LENGTH),
            statuses: [LetterStatus::Unused; WORD_LENGTH],
        }
    }

    fn in_progress(input: &str) -> Self {
        let mut word = input.to_string();
        while word.len() < WORD_LENGTH {
            word.push(' ');
        }
        Self {
            word,
            statuses: [LetterStatus::Unused; WORD_LENGTH],
        }
    }
}

impl From<&Guess> for BoardRow {
    fn from(guess: &Guess) -> Self {
        Self {
            word: guess.word().text().to_string(),
            statuses: *guess.statuses(),
        }
    }
}

/// The engine for one day's session
///
/// Created via [`GameEngine::start`], which restores any progress saved
/// earlier the same day. The secret word is always recomputed from the date,
/// never restored from storage.
pub struct GameEngine {
    secret: Word,
    date: NaiveDate,
    current_input: String,
    history: Vec<Guess>,
    status: GameStatus,
    hints: KeyboardHints,
    last_error: Option<String>,
    store: Box<dyn StateStore>,
}

impl GameEngine {
    /// Start a session for `today`
    ///
    /// Saved state is restored only when its date matches `today`; anything
    /// older (or malformed) is discarded and the session starts fresh.
    pub fn start(provider: &dyn WordProvider, store: Box<dyn StateStore>, today: NaiveDate) -> Self {
        let secret = provider.word_for_date(today);

        let mut engine = Self {
            secret,
            date: today,
            current_input: String::with_capacity(WORD_LENGTH),
            history: Vec::new(),
            status: GameStatus::Playing,
            hints: KeyboardHints::new(),
            last_error: None,
            store,
        };

        if let Some(saved) = engine.store.load()
            && saved.date == today
        {
            engine.history = saved.history;
            engine.status = saved.status;
            engine.hints = saved.hints;
        }

        engine
    }

    /// Route a raw input signal to the matching operation
    ///
    /// # Errors
    /// Returns an error only when a submission cannot be persisted.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Letter(ch) => {
                self.append_letter(ch);
                Ok(())
            }
            InputEvent::Delete => {
                self.delete_letter();
                Ok(())
            }
            InputEvent::Submit => self.submit_guess(),
        }
    }

    /// Append an alphabetic character to the in-progress guess
    ///
    /// No-op once the game is over, for non-alphabetic input, or when the
    /// input is already full.
    pub fn append_letter(&mut self, ch: char) {
        if self.status != GameStatus::Playing
            || !ch.is_ascii_alphabetic()
            || self.current_input.len() == WORD_LENGTH
        {
            return;
        }
        self.current_input.push(ch.to_ascii_uppercase());
        self.last_error = None;
    }

    /// Remove the last character of the in-progress guess
    pub fn delete_letter(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.current_input.pop();
        self.last_error = None;
    }

    /// Submit the in-progress guess
    ///
    /// A short input sets a transient error and changes nothing else. A full
    /// input is evaluated, appended to history, folded into the keyboard
    /// hints, and persisted; the game ends when the guess matches the secret
    /// or the attempt limit is reached.
    ///
    /// # Errors
    /// Returns an error only when the session cannot be persisted.
    pub fn submit_guess(&mut self) -> Result<()> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        if self.current_input.len() != WORD_LENGTH {
            self.last_error = Some(format!("Word must be {WORD_LENGTH} letters"));
            return Ok(());
        }

        // Input is built one validated letter at a time, so this cannot fail
        let Ok(word) = Word::new(self.current_input.as_str()) else {
            return Ok(());
        };

        let won = word == self.secret;
        let guess = Guess::evaluate(word, &self.secret);
        self.hints.observe(&guess);
        self.history.push(guess);
        self.current_input.clear();
        self.last_error = None;

        if won {
            self.status = GameStatus::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&SavedSession {
            history: self.history.clone(),
            status: self.status,
            hints: self.hints.clone(),
            date: self.date,
        })
    }

    /// The full grid for display: submitted guesses, then the in-progress
    /// row when non-empty, then blank rows, always `MAX_ATTEMPTS` in total.
    #[must_use]
    pub fn board_rows(&self) -> Vec<BoardRow> {
        let mut rows: Vec<BoardRow> = self.history.iter().map(BoardRow::from).collect();

        if !self.current_input.is_empty() && rows.len() < MAX_ATTEMPTS {
            rows.push(BoardRow::in_progress(&self.current_input));
        }

        while rows.len() < MAX_ATTEMPTS {
            rows.push(BoardRow::empty());
        }

        rows.truncate(MAX_ATTEMPTS);
        rows
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The day's secret word, revealed on loss
    #[must_use]
    pub fn secret_word(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::words::DailyWordList;

    /// Provider that always serves the same word, for pinning the secret
    struct FixedWord(Word);

    impl WordProvider for FixedWord {
        fn word_for_date(&self, _date: NaiveDate) -> Word {
            self.0.clone()
        }

        fn is_valid_word(&self, candidate: &str) -> bool {
            Word::new(candidate).is_ok_and(|w| w == self.0)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 30).unwrap()
    }

    fn engine_with(secret: &str) -> (GameEngine, MemoryStore) {
        let store = MemoryStore::new();
        let provider = FixedWord(Word::new(secret).unwrap());
        let engine = GameEngine::start(&provider, Box::new(store.clone()), today());
        (engine, store)
    }

    fn type_word(engine: &mut GameEngine, word: &str) {
        for ch in word.chars() {
            engine.append_letter(ch);
        }
    }

    fn submit_word(engine: &mut GameEngine, word: &str) {
        type_word(engine, word);
        engine.submit_guess().unwrap();
    }

    #[test]
    fn fresh_session_starts_playing() {
        let (engine, store) = engine_with("CRANE");
        assert_eq!(engine.status(), GameStatus::Playing);
        assert!(engine.history().is_empty());
        assert!(engine.current_input().is_empty());
        assert!(engine.last_error().is_none());
        assert!(!store.is_saved());
    }

    #[test]
    fn letters_are_uppercased_and_capped() {
        let (mut engine, _) = engine_with("CRANE");
        type_word(&mut engine, "slatey");
        assert_eq!(engine.current_input(), "SLATE");
    }

    #[test]
    fn non_alphabetic_input_ignored() {
        let (mut engine, _) = engine_with("CRANE");
        engine.append_letter('3');
        engine.append_letter(' ');
        engine.append_letter('!');
        assert_eq!(engine.current_input(), "");
    }

    #[test]
    fn delete_on_empty_input_is_noop() {
        let (mut engine, _) = engine_with("CRANE");
        engine.delete_letter();
        assert_eq!(engine.current_input(), "");

        type_word(&mut engine, "SL");
        engine.delete_letter();
        assert_eq!(engine.current_input(), "S");
    }

    #[test]
    fn short_submission_sets_transient_error() {
        let (mut engine, store) = engine_with("CRANE");
        type_word(&mut engine, "SLA");
        engine.submit_guess().unwrap();

        assert_eq!(engine.last_error(), Some("Word must be 5 letters"));
        assert_eq!(engine.current_input(), "SLA");
        assert!(engine.history().is_empty());
        // Rejected submissions are not persisted
        assert!(!store.is_saved());

        // Cleared by the next successful edit
        engine.append_letter('T');
        assert!(engine.last_error().is_none());
    }

    #[test]
    fn winning_guess_ends_game() {
        let (mut engine, _) = engine_with("CRANE");
        submit_word(&mut engine, "CRANE");

        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.current_input(), "");
        assert_eq!(engine.history().len(), 1);
        assert!(engine.history()[0].is_winning());
    }

    #[test]
    fn win_possible_before_last_attempt() {
        let (mut engine, _) = engine_with("CRANE");
        submit_word(&mut engine, "SLATE");
        submit_word(&mut engine, "CRANE");
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn six_misses_lose_the_game() {
        let (mut engine, _) = engine_with("CRANE");
        for word in ["SLATE", "MUSIC", "TOWER", "GLOBE", "HOUSE", "FANCY"] {
            submit_word(&mut engine, word);
        }
        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn terminal_state_ignores_all_input() {
        let (mut engine, _) = engine_with("CRANE");
        submit_word(&mut engine, "CRANE");

        engine.append_letter('S');
        assert_eq!(engine.current_input(), "");

        engine.delete_letter();
        engine.submit_guess().unwrap();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn handle_input_routes_all_three_operations() {
        let (mut engine, _) = engine_with("CRANE");
        for ch in "CRANX".chars() {
            engine.handle_input(InputEvent::Letter(ch)).unwrap();
        }
        engine.handle_input(InputEvent::Delete).unwrap();
        engine.handle_input(InputEvent::Letter('E')).unwrap();
        engine.handle_input(InputEvent::Submit).unwrap();

        assert_eq!(engine.status(), GameStatus::Won);
    }

    #[test]
    fn submission_persists_session() {
        let (mut engine, store) = engine_with("CRANE");
        submit_word(&mut engine, "SLATE");

        let saved = store.load().unwrap();
        assert_eq!(saved.date, today());
        assert_eq!(saved.status, GameStatus::Playing);
        assert_eq!(saved.history.len(), 1);
        assert_eq!(saved.history[0].word().text(), "SLATE");
    }

    #[test]
    fn input_edits_do_not_persist() {
        let (mut engine, store) = engine_with("CRANE");
        type_word(&mut engine, "SLATE");
        engine.delete_letter();
        assert!(!store.is_saved());
    }

    #[test]
    fn same_day_session_is_restored() {
        let (mut engine, store) = engine_with("CRANE");
        submit_word(&mut engine, "SLATE");
        submit_word(&mut engine, "CRANE");

        let provider = FixedWord(Word::new("CRANE").unwrap());
        let restored = GameEngine::start(&provider, Box::new(store.clone()), today());

        assert_eq!(restored.status(), GameStatus::Won);
        assert_eq!(restored.history().len(), 2);
        assert_eq!(restored.hints().hint('A'), LetterStatus::Correct);
        // The secret comes from the provider, not from storage
        assert_eq!(restored.secret_word().text(), "CRANE");
    }

    #[test]
    fn stale_day_session_is_discarded() {
        let (mut engine, store) = engine_with("CRANE");
        submit_word(&mut engine, "CRANE");
        assert_eq!(engine.status(), GameStatus::Won);

        let tomorrow = today().succ_opt().unwrap();
        let provider = FixedWord(Word::new("CRANE").unwrap());
        let fresh = GameEngine::start(&provider, Box::new(store.clone()), tomorrow);

        assert_eq!(fresh.status(), GameStatus::Playing);
        assert!(fresh.history().is_empty());
        assert_eq!(fresh.hints().hint('C'), LetterStatus::Unused);
    }

    #[test]
    fn board_rows_always_fill_the_grid() {
        let (mut engine, _) = engine_with("CRANE");
        let rows = engine.board_rows();
        assert_eq!(rows.len(), MAX_ATTEMPTS);
        assert!(rows.iter().all(|r| r.word == "     "));

        submit_word(&mut engine, "SLATE");
        type_word(&mut engine, "CR");

        let rows = engine.board_rows();
        assert_eq!(rows.len(), MAX_ATTEMPTS);
        assert_eq!(rows[0].word, "SLATE");
        assert_eq!(rows[1].word, "CR   ");
        assert_eq!(rows[1].statuses, [LetterStatus::Unused; WORD_LENGTH]);
        assert_eq!(rows[2].word, "     ");
    }

    #[test]
    fn any_full_word_is_accepted_even_off_list() {
        // Submission deliberately skips dictionary validation
        let list = DailyWordList::from_slice(&["CRANE"]).unwrap();
        let store = MemoryStore::new();
        let mut engine = GameEngine::start(&list, Box::new(store), today());

        submit_word(&mut engine, "ZZZZZ");
        assert_eq!(engine.history().len(), 1);
        assert!(engine.last_error().is_none());
    }
}

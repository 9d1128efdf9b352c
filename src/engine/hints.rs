//! Keyboard-hint aggregation
//!
//! Tracks the best status ever observed for each letter across all submitted
//! guesses. Statuses only ever move up the order
//! `Unused < Absent < Present < Correct`; a letter that was `Present` in an
//! earlier guess and `Absent` in a later one keeps `Present`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Guess, LetterStatus};

/// Best-observed status per letter, for coloring an on-screen keyboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyboardHints {
    letters: FxHashMap<char, LetterStatus>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The aggregated status for `letter`, `Unused` when never guessed
    #[must_use]
    pub fn hint(&self, letter: char) -> LetterStatus {
        self.letters
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(LetterStatus::Unused)
    }

    /// Fold a submitted guess into the hints, upgrading letters only
    pub fn observe(&mut self, guess: &Guess) {
        for (&byte, &status) in guess.word().chars().iter().zip(guess.statuses()) {
            let letter = byte as char;
            let current = self.hint(letter);
            if status > current {
                self.letters.insert(letter, status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn guess(word: &str, secret: &str) -> Guess {
        Guess::evaluate(Word::new(word).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn unguessed_letters_are_unused() {
        let hints = KeyboardHints::new();
        assert_eq!(hints.hint('A'), LetterStatus::Unused);
        assert_eq!(hints.hint('z'), LetterStatus::Unused);
    }

    #[test]
    fn observe_records_statuses() {
        let mut hints = KeyboardHints::new();
        hints.observe(&guess("CRANE", "SLATE"));

        assert_eq!(hints.hint('A'), LetterStatus::Correct);
        assert_eq!(hints.hint('E'), LetterStatus::Correct);
        assert_eq!(hints.hint('C'), LetterStatus::Absent);
        assert_eq!(hints.hint('R'), LetterStatus::Absent);
        assert_eq!(hints.hint('N'), LetterStatus::Absent);
    }

    #[test]
    fn hints_never_downgrade() {
        let mut hints = KeyboardHints::new();

        // E is Present against this secret
        hints.observe(&guess("EIGHT", "ABCDE"));
        assert_eq!(hints.hint('E'), LetterStatus::Present);

        // The second E finds the secret's only E already consumed and comes
        // back Absent; the aggregated hint must not drop.
        let repeat = guess("EEZZZ", "ABCDE");
        assert_eq!(repeat.statuses()[1], LetterStatus::Absent);
        hints.observe(&repeat);
        assert_eq!(hints.hint('E'), LetterStatus::Present);
    }

    #[test]
    fn hints_upgrade_to_correct() {
        let mut hints = KeyboardHints::new();
        hints.observe(&guess("EIGHT", "ABCDE"));
        assert_eq!(hints.hint('E'), LetterStatus::Present);

        hints.observe(&guess("ABCDE", "ABCDE"));
        assert_eq!(hints.hint('E'), LetterStatus::Correct);
    }

    #[test]
    fn hint_lookup_is_case_insensitive() {
        let mut hints = KeyboardHints::new();
        hints.observe(&guess("CRANE", "SLATE"));
        assert_eq!(hints.hint('a'), LetterStatus::Correct);
    }

    #[test]
    fn serde_round_trip() {
        let mut hints = KeyboardHints::new();
        hints.observe(&guess("CRANE", "SLATE"));

        let json = serde_json::to_string(&hints).unwrap();
        let back: KeyboardHints = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hint('A'), LetterStatus::Correct);
        assert_eq!(back.hint('C'), LetterStatus::Absent);
        assert_eq!(back.hint('Z'), LetterStatus::Unused);
    }
}

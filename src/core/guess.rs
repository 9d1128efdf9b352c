//! A submitted, evaluated guess

use serde::{Deserialize, Serialize};

use super::{LetterStatus, WORD_LENGTH, Word, evaluate};

/// One complete attempt: the guessed word and its per-letter feedback
///
/// Produced once at submission time and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    word: Word,
    statuses: [LetterStatus; WORD_LENGTH],
}

impl Guess {
    /// Evaluate `word` against `secret` and record the result
    #[must_use]
    pub fn evaluate(word: Word, secret: &Word) -> Self {
        let statuses = evaluate(&word, secret);
        Self { word, statuses }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Whether every position is `Correct`
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }
}

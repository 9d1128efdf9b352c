//! Word selection
//!
//! Derives the secret word for a calendar date from a fixed word list, and
//! answers membership queries against that list.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use chrono::{Datelike, NaiveDate};

use crate::core::Word;

/// Capability for supplying the day's secret word
///
/// Injected into the engine so tests can pin the secret without touching the
/// real word list.
pub trait WordProvider {
    /// The secret word for `date`. Pure: the same date always yields the
    /// same word.
    fn word_for_date(&self, date: NaiveDate) -> Word;

    /// Case-insensitive membership test against the word list.
    fn is_valid_word(&self, candidate: &str) -> bool;
}

/// Word list with deterministic date-based selection
///
/// The day's word is picked by the date's day-of-year index modulo the list
/// length, so the list cycles once per year. A one-word list yields that word
/// every day, which is the documented demonstration behavior for tiny lists.
#[derive(Debug, Clone)]
pub struct DailyWordList {
    words: Vec<Word>,
}

impl DailyWordList {
    /// Create a word list from pre-validated words
    ///
    /// Returns `None` for an empty list, since there would be no word to
    /// select.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Create a word list from string slices, skipping invalid entries
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Option<Self> {
        Self::new(slice.iter().filter_map(|&s| Word::new(s).ok()).collect())
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty (never true for a constructed list)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for DailyWordList {
    fn default() -> Self {
        // The embedded list is non-empty and pre-validated
        Self::from_slice(WORDS).unwrap_or_else(|| unreachable!("embedded word list is non-empty"))
    }
}

impl WordProvider for DailyWordList {
    fn word_for_date(&self, date: NaiveDate) -> Word {
        // NaiveDate ordinals are calendar-day counts, so the index is stable
        // across daylight-saving transitions.
        let day_index = date.ordinal() as usize;
        self.words[day_index % self.words.len()].clone()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        Word::new(candidate).is_ok_and(|word| self.words.contains(&word))
    }
}

/// Long-form date label for the game header, e.g. "Saturday, August 30, 2025"
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

//! Embedded word list
//!
//! A small demonstration list compiled into the binary, one word per letter
//! of the alphabet. Swap in a larger list via `DailyWordList::new` if wanted.

/// Demonstration answer words (one per starting letter)
pub const WORDS: &[&str] = &[
    "APPLE", "BRAIN", "CHART", "DANCE", "EARTH", "FANCY", "GLOBE", "HOUSE", "INPUT", "JUMPY",
    "KNIFE", "LEMON", "MUSIC", "NEVER", "OCEAN", "PLANE", "QUEEN", "RIVER", "SMART", "TOWER",
    "UMBRA", "VOCAL", "WATER", "XENON", "YIELD", "ZEBRA",
];

/// Number of words in `WORDS`
pub const WORDS_COUNT: usize = 26;

//! Core domain types for the daily word game
//!
//! This module contains the fundamental domain types with zero UI concerns.
//! All types here are pure, testable, and have clear semantics.

mod feedback;
mod guess;
mod status;
mod word;

pub use feedback::evaluate;
pub use guess::Guess;
pub use status::LetterStatus;
pub use word::{Word, WordError};

/// Length of every secret word and guess
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses per day
pub const MAX_ATTEMPTS: usize = 6;

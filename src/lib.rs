//! Wordle Daily
//!
//! A single-player daily word-guessing game. The secret word is derived
//! deterministically from the calendar date; six attempts, per-letter
//! feedback after each guess, and same-day progress persistence.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{LetterStatus, Word, evaluate};
//!
//! let secret = Word::new("SLATE").unwrap();
//! let guess = Word::new("CRANE").unwrap();
//!
//! let statuses = evaluate(&guess, &secret);
//! assert_eq!(statuses[2], LetterStatus::Correct);
//! ```

// Core domain types
pub mod core;

// Game-state machine
pub mod engine;

// Session persistence
pub mod store;

// Word selection
pub mod words;

// Interactive TUI interface
pub mod interactive;

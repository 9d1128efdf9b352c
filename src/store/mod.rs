//! Session persistence
//!
//! The engine saves the day's progress through a `StateStore` capability so
//! it can be tested without a real storage backend. The production store is
//! a single JSON file in the user data directory.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Guess;
use crate::engine::{GameStatus, KeyboardHints};

/// The persisted record for one day's session
///
/// The secret word is never stored; it is recomputed from the date on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    pub history: Vec<Guess>,
    pub status: GameStatus,
    pub hints: KeyboardHints,
    pub date: NaiveDate,
}

/// Capability for persisting and restoring one day's session
///
/// A single fixed slot holds at most one session; saving overwrites any
/// previous day's record.
pub trait StateStore {
    /// Load the stored session, if any. Missing or malformed records yield
    /// `None` rather than an error.
    fn load(&self) -> Option<SavedSession>;

    /// Persist `session`, replacing the previous record.
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save(&self, session: &SavedSession) -> Result<()>;

    /// Remove the stored session, if any.
    ///
    /// # Errors
    /// Returns an error if the record exists but cannot be removed.
    fn clear(&self) -> Result<()>;
}

//! In-memory store
//!
//! Test double for `StateStore`. Clones share the same slot, so a test can
//! hand one handle to the engine and inspect saves through another.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use super::{SavedSession, StateStore};

/// Shared single-slot in-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<SavedSession>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, as if a previous session had saved
    #[must_use]
    pub fn seeded(session: SavedSession) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(session);
        store
    }

    /// Whether anything is currently stored
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Option<SavedSession> {
        self.slot.borrow().clone()
    }

    fn save(&self, session: &SavedSession) -> Result<()> {
        *self.slot.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

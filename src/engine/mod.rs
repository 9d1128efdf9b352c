//! Game engine
//!
//! The state machine for one day's session plus keyboard-hint aggregation.

mod game;
mod hints;

pub use game::{BoardRow, GameEngine, GameStatus, InputEvent};
pub use hints::KeyboardHints;

//! Interactive terminal interface
//!
//! Renders the guess grid and on-screen keyboard, and funnels physical keys
//! and keyboard-widget clicks into the engine's shared input path.

mod app;
mod rendering;

pub use app::{App, run_tui};

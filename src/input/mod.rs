//! Input handling module.
//!
//! Keyboard events are folded into a held-key map that the race polls once
//! per frame.

pub mod keyboard;

// Re-export types
pub use keyboard::{DriverControls, GameKey, KeyState};

//! UI screens for the game.

pub mod menu;
pub mod race;
pub mod results;

pub use menu::{MenuAction, MenuScreen};
pub use race::RaceOverlay;
pub use results::{ResultsAction, ResultsScreen};

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Name entry and start button
    #[default]
    Menu,
    /// Race in progress
    Race,
    /// Finished race overlay
    Results,
}

//! Free Gear - pseudo-3D arcade racer
//!
//! A single-player racing game: one player, one rival, a looping track of
//! themed sectors, boost pickups and road hazards. The simulation and the
//! scene renderer are engine-agnostic; the `ui` module hosts them in egui.

pub mod input;
pub mod racing;
pub mod render;
pub mod storage;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use input::{DriverControls, KeyState};
pub use racing::{GameSession, RaceResult, SessionEvent};
pub use render::{AssetCatalog, DrawSurface, RecordingSurface};
pub use storage::{GameConfig, ProfileStore};
pub use world::{Projection, Track};

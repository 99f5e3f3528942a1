//! Rendering
//!
//! Engine-agnostic scene drawing: the renderer emits calls against the
//! [`DrawSurface`] trait, and the UI layer supplies an egui-backed surface.

pub mod assets;
pub mod color;
pub mod scene;
pub mod surface;

pub use assets::{AssetCatalog, AssetError, DecodedImage};
pub use color::Color;
pub use scene::{render_menu_backdrop, render_race};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, SpriteId};

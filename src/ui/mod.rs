//! UI module for the egui front end.

pub mod painter;
pub mod screens;
pub mod theme;

pub use painter::{EguiSurface, TextureCache};
pub use screens::Screen;

//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::render::Color;

/// Night-race palette.
pub struct RaceTheme;

impl RaceTheme {
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(11, 18, 32);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(22, 32, 52);
    /// HUD backing plate
    pub const HUD_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 150);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 170, 190);
    /// Accent color (amber)
    pub const ACCENT: Color32 = Color32::from_rgb(255, 204, 0);
    /// Win / record color
    pub const SUCCESS: Color32 = Color32::from_rgb(52, 168, 83);
    /// Loss color
    pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(50, 62, 90);
}

/// Convert a renderer colour.
pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Egui visuals for the game's menus and overlays.
pub fn race_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = RaceTheme::PANEL_BG;
    visuals.panel_fill = RaceTheme::PANEL_BG;
    visuals.faint_bg_color = RaceTheme::CARD_BG;

    visuals.widgets.noninteractive.bg_fill = RaceTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = RaceTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(36, 50, 80);
    visuals.widgets.active.bg_fill = RaceTheme::ACCENT;

    visuals.selection.bg_fill = RaceTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = RaceTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = RaceTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = RaceTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = RaceTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = RaceTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = RaceTheme::BORDER;

    visuals
}

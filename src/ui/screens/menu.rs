//! Main menu: name entry, best lap and the start button.

use egui::{RichText, Ui, Vec2};

use crate::racing::results::format_race_time;
use crate::storage::save_data::{DEFAULT_PLAYER_NAME, MAX_NAME_LEN};
use crate::ui::theme::RaceTheme;

/// What the player chose on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a race with the entered name
    Start(String),
    /// Forget the saved name
    ResetData,
}

/// Menu screen state.
#[derive(Debug, Clone, Default)]
pub struct MenuScreen {
    /// Name field contents
    pub name_input: String,
}

impl MenuScreen {
    /// Create the menu with a remembered name pre-filled.
    pub fn new(last_player: Option<&str>) -> Self {
        Self {
            name_input: last_player.unwrap_or_default().to_string(),
        }
    }

    /// Render the menu and return the chosen action.
    pub fn show(&mut self, ui: &mut Ui, best_lap: Option<f64>) -> Option<MenuAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("FREE GEAR").size(56.0).strong().color(RaceTheme::ACCENT));
            ui.label(
                RichText::new("Arcade racing")
                    .size(18.0)
                    .color(RaceTheme::TEXT_SECONDARY),
            );

            ui.add_space(48.0);

            ui.label("Your name");
            let response = ui.add_sized(
                Vec2::new(280.0, 32.0),
                egui::TextEdit::singleline(&mut self.name_input)
                    .char_limit(MAX_NAME_LEN)
                    .hint_text(DEFAULT_PLAYER_NAME),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(24.0);

            let start = ui.add_sized(
                Vec2::new(280.0, 56.0),
                egui::Button::new(RichText::new("Start Race").size(22.0)),
            );
            if start.clicked() || submitted {
                action = Some(MenuAction::Start(self.name_input.clone()));
            }

            ui.add_space(32.0);

            let best = best_lap
                .map(format_race_time)
                .unwrap_or_else(|| "--".to_string());
            ui.label(RichText::new(format!("Best lap: {}", best)).size(16.0));

            ui.add_space(16.0);
            ui.label(
                RichText::new("Arrows or WASD to drive")
                    .size(14.0)
                    .color(RaceTheme::TEXT_SECONDARY),
            );

            ui.add_space(32.0);
            if ui.small_button("Reset saved name").clicked() {
                self.name_input.clear();
                action = Some(MenuAction::ResetData);
            }
        });

        action
    }
}

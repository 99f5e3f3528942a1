//! Results overlay shown after the finish line.

use egui::{RichText, Ui, Vec2};

use crate::racing::results::{format_position, format_race_time, RaceResult};
use crate::ui::theme::RaceTheme;

/// Choice made on the results overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    /// Race again with the same name
    Restart,
    /// Back to the menu
    Menu,
}

/// Results overlay.
pub struct ResultsScreen;

impl ResultsScreen {
    /// Render the overlay; `new_record` highlights a best lap set this race.
    pub fn show(ui: &mut Ui, result: &RaceResult, saved_best: Option<f64>, new_record: bool) -> Option<ResultsAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            let (title, color) = if result.is_win() {
                ("You win!", RaceTheme::SUCCESS)
            } else {
                ("Rival wins", RaceTheme::ERROR)
            };
            ui.label(RichText::new(title).size(44.0).strong().color(color));
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{} - {}", result.player_name, format_position(result.position)))
                    .size(22.0),
            );

            ui.add_space(24.0);
            ui.label(RichText::new(format!("Total {}", result.formatted_finish_time())).size(20.0));
            for line in result.lap_lines() {
                ui.label(RichText::new(line).size(16.0).color(RaceTheme::TEXT_SECONDARY));
            }
            if let Some(gap) = result.gap_to_rival() {
                ui.label(RichText::new(format!("+{:.3}s behind the rival", gap)).size(16.0));
            }

            ui.add_space(16.0);
            let best = RichText::new(format!("Best lap {}", result.formatted_best_lap())).size(18.0);
            ui.label(if new_record { best.color(RaceTheme::ACCENT) } else { best });
            if let Some(saved) = saved_best {
                ui.label(
                    RichText::new(format!("Record {}", format_race_time(saved)))
                        .size(14.0)
                        .color(RaceTheme::TEXT_SECONDARY),
                );
            }

            ui.add_space(32.0);
            let size = Vec2::new(220.0, 48.0);
            if ui
                .add_sized(size, egui::Button::new(RichText::new("Race again").size(18.0)))
                .clicked()
            {
                action = Some(ResultsAction::Restart);
            }
            ui.add_space(12.0);
            if ui
                .add_sized(size, egui::Button::new(RichText::new("Menu").size(18.0)))
                .clicked()
            {
                action = Some(ResultsAction::Menu);
            }
        });

        action
    }
}

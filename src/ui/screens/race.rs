//! In-race overlay: HUD text, minimap, boost bar and the start countdown.

use egui::{Align2, FontId, Pos2, Rect, Stroke, Ui, Vec2};

use crate::world::hud::{HudSnapshot, MINIMAP_RADII};
use crate::ui::theme::{to_color32, RaceTheme};

/// Minimap half-size in points
const MINIMAP_SIZE: Vec2 = Vec2::new(90.0, 90.0);

/// Race overlay drawn over the scene.
pub struct RaceOverlay;

impl RaceOverlay {
    /// Paint the HUD inside `area`.
    pub fn show(ui: &Ui, area: Rect, hud: &HudSnapshot, boost_duration: f32) {
        let painter = ui.painter_at(area);

        // Stats panel
        let lines = [
            format!("{}  {}", hud.player_name, hud.position_text),
            format!("Lap {}", hud.lap_text),
            hud.sector_name.clone(),
            format!("{} to go", hud.distance_text),
            hud.speed_text.clone(),
            format!("Time {}", hud.elapsed_text),
            format!("Best {}", hud.best_text),
        ];
        let panel = Rect::from_min_size(area.min + Vec2::new(12.0, 12.0), Vec2::new(220.0, 24.0 * lines.len() as f32 + 12.0));
        painter.rect_filled(panel, 6.0, RaceTheme::HUD_BG);
        for (i, line) in lines.iter().enumerate() {
            painter.text(
                panel.min + Vec2::new(10.0, 8.0 + 24.0 * i as f32),
                Align2::LEFT_TOP,
                line,
                FontId::proportional(if i == 0 { 20.0 } else { 17.0 }),
                RaceTheme::TEXT_PRIMARY,
            );
        }

        // Boost bar
        if let Some(remaining) = hud.boost_remaining {
            let fraction = if boost_duration > 0.0 {
                (remaining / boost_duration).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let bar = Rect::from_min_size(panel.left_bottom() + Vec2::new(0.0, 8.0), Vec2::new(panel.width(), 10.0));
            painter.rect_filled(bar, 3.0, RaceTheme::HUD_BG);
            let fill = Rect::from_min_size(bar.min, Vec2::new(bar.width() * fraction, bar.height()));
            painter.rect_filled(fill, 3.0, RaceTheme::ACCENT);
        }

        // Minimap
        let centre = Pos2::new(area.max.x - MINIMAP_SIZE.x - 24.0, area.min.y + MINIMAP_SIZE.y + 24.0);
        let backing = Rect::from_center_size(centre, MINIMAP_SIZE * 2.0 + Vec2::splat(16.0));
        painter.rect_filled(backing, 8.0, RaceTheme::HUD_BG);
        let radius = Vec2::new(MINIMAP_SIZE.x * MINIMAP_RADII.x, MINIMAP_SIZE.y * MINIMAP_RADII.y);
        let outline: Vec<Pos2> = (0..48)
            .map(|i| {
                let angle = i as f32 / 48.0 * std::f32::consts::TAU;
                centre + Vec2::new(angle.cos() * radius.x, angle.sin() * radius.y)
            })
            .collect();
        painter.add(egui::Shape::closed_line(outline, Stroke::new(3.0, RaceTheme::TEXT_SECONDARY)));
        for dot in &hud.minimap {
            let pos = centre + Vec2::new(dot.pos.x * MINIMAP_SIZE.x, dot.pos.y * MINIMAP_SIZE.y);
            painter.circle_filled(pos, 6.0, to_color32(dot.color));
        }

        // Countdown
        if let Some(seconds) = hud.countdown {
            painter.text(
                area.center(),
                Align2::CENTER_CENTER,
                seconds.to_string(),
                FontId::proportional(120.0),
                RaceTheme::ACCENT,
            );
        }
    }
}

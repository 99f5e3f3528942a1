//! Head-up display values.
//!
//! The HUD is rebuilt from the session every frame; nothing here is stored
//! between frames.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::racing::results::{format_position, format_race_time};
use crate::racing::session::{GameSession, Racer};
use crate::render::Color;

/// Minimap ellipse radii, in minimap half-sizes
pub const MINIMAP_RADII: Vec2 = Vec2::new(1.0, 0.6);

/// A racer's marker on the minimap
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapDot {
    pub racer: Racer,
    /// Position on the ellipse, each axis in `[-1, 1]`
    pub pos: Vec2,
    pub color: Color,
}

/// Formatted HUD values for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub player_name: String,
    pub sector_name: String,
    pub lap_text: String,
    pub speed_text: String,
    /// Distance left in the current sector
    pub distance_text: String,
    pub position_text: String,
    pub elapsed_text: String,
    pub best_text: String,
    /// Seconds of boost left, if boosting
    pub boost_remaining: Option<f32>,
    /// Whole seconds left before the start
    pub countdown: Option<u32>,
    pub minimap: Vec<MinimapDot>,
}

/// Speed shown to the player, `round(speed * 10)` km/h
pub fn format_speed(speed: f32) -> String {
    format!("{} km/h", (speed.max(0.0) * 10.0).round() as u32)
}

/// Completed laps over the race length, e.g. `0/2` on the first lap
pub fn format_lap(laps_done: u32, laps_to_finish: u32) -> String {
    format!("{}/{}", laps_done, laps_to_finish)
}

/// Remaining sector distance in whole metres, rounded down
pub fn format_remaining(metres: f64) -> String {
    format!("{} m", metres.max(0.0).floor() as u64)
}

/// Point on the minimap ellipse for a lap fraction, starting at the top and
/// running clockwise
pub fn minimap_point(lap_fraction: f64) -> Vec2 {
    let angle = lap_fraction * TAU - FRAC_PI_2;
    Vec2::new(angle.cos() as f32, angle.sin() as f32) * MINIMAP_RADII
}

impl HudSnapshot {
    /// Read the HUD values off a session
    pub fn capture(session: &GameSession) -> Self {
        let state = session.state();
        let track = session.track();
        let progress = &state.player_progress;
        let position = progress.position();
        let sector = track.sector(position.sector_index);

        let dot = |racer: Racer, distance: f64, color: Color| {
            let pos = minimap_point(track.lap_fraction(distance));
            MinimapDot { racer, pos, color }
        };

        let best_text = progress
            .best_lap()
            .map(format_race_time)
            .unwrap_or_else(|| "--".to_string());

        Self {
            player_name: session.player_name().to_string(),
            sector_name: sector.name.clone(),
            lap_text: format_lap(progress.laps(), progress.laps_to_finish()),
            speed_text: format_speed(state.player.speed),
            distance_text: format_remaining(sector.length - position.offset),
            position_text: format_position(session.player_position()),
            elapsed_text: format_race_time(state.elapsed),
            best_text,
            boost_remaining: state
                .player
                .is_boosting()
                .then(|| state.player.boost.remaining()),
            countdown: state.countdown.seconds_left(),
            minimap: vec![
                dot(Racer::Rival, state.rival.vehicle.distance, Color::RIVAL),
                dot(Racer::Player, state.player.distance, Color::PLAYER),
            ],
        }
    }

    /// Show the stored record when it beats this race's best lap
    pub fn with_saved_best(mut self, saved: Option<f64>, race_best: Option<f64>) -> Self {
        let best = match (saved, race_best) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        if let Some(best) = best {
            self.best_text = format_race_time(best);
        }
        self
    }
}

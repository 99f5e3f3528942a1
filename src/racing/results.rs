//! Race results.
//!
//! Built once when the player crosses the finish line and shown on the
//! results overlay.

use std::fmt;

/// Format a race time as `m:ss.mmm`.
pub fn format_race_time(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() {
        (seconds.max(0.0) * 1000.0).round() as u64
    } else {
        0
    };
    let minutes = total_ms / 60_000;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{}:{:02}.{:03}", minutes, secs, millis)
}

/// Finishing position as an ordinal, e.g. `1º`.
pub fn format_position(position: u32) -> String {
    format!("{}º", position)
}

/// Outcome of a finished race.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub player_name: String,
    /// Laps completed
    pub laps: u32,
    /// Race clock at the finish, in seconds
    pub finish_time: f64,
    pub lap_times: Vec<f64>,
    pub best_lap: Option<f64>,
    /// 1 for a win
    pub position: u32,
    /// Set when the rival crossed the line first
    pub rival_finish_time: Option<f64>,
}

impl RaceResult {
    pub fn is_win(&self) -> bool {
        self.position == 1
    }

    pub fn formatted_finish_time(&self) -> String {
        format_race_time(self.finish_time)
    }

    pub fn formatted_best_lap(&self) -> String {
        self.best_lap
            .map(format_race_time)
            .unwrap_or_else(|| "--".to_string())
    }

    /// One line per lap: `Lap 1  0:34.120`
    pub fn lap_lines(&self) -> Vec<String> {
        self.lap_times
            .iter()
            .enumerate()
            .map(|(i, t)| format!("Lap {}  {}", i + 1, format_race_time(*t)))
            .collect()
    }

    /// Gap to the rival when they won
    pub fn gap_to_rival(&self) -> Option<f64> {
        self.rival_finish_time.map(|rival| self.finish_time - rival)
    }
}

impl fmt::Display for RaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} finished {} in {} (best lap {})",
            self.player_name,
            format_position(self.position),
            self.formatted_finish_time(),
            self.formatted_best_lap()
        )
    }
}

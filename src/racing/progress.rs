//! Lap and sector tracking.
//!
//! Each racer's cumulative distance is resolved against the track every
//! frame. Crossing a sector boundary, completing a lap and finishing the
//! race are reported as events; finishing is terminal.

use crate::world::track::{Track, TrackPosition};

/// Where a racer is in the race lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacePhase {
    /// Waiting for the start
    Countdown,
    Racing,
    /// A sector boundary was crossed this frame
    SectorTransition,
    /// A lap was completed this frame
    LapComplete,
    /// Terminal
    RaceFinished,
}

impl RacePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Racing | Self::SectorTransition | Self::LapComplete)
    }
}

/// Progress milestones
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    SectorEntered { sector_index: usize },
    LapCompleted { lap: u32, lap_time: f64 },
    Finished { time: f64 },
}

/// Progress of one racer
#[derive(Debug, Clone)]
pub struct RaceProgress {
    laps_to_finish: u32,
    phase: RacePhase,
    position: TrackPosition,
    distance: f64,
    lap_times: Vec<f64>,
    lap_started_at: f64,
    finish_time: Option<f64>,
}

impl RaceProgress {
    /// New progress on the start line, waiting for the countdown
    pub fn new(laps_to_finish: u32) -> Self {
        Self {
            laps_to_finish: laps_to_finish.max(1),
            phase: RacePhase::Countdown,
            position: TrackPosition::default(),
            distance: 0.0,
            lap_times: Vec::new(),
            lap_started_at: 0.0,
            finish_time: None,
        }
    }

    /// Leave the countdown. `elapsed` is the race clock at the start.
    pub fn start(&mut self, elapsed: f64) {
        if self.phase == RacePhase::Countdown {
            self.phase = RacePhase::Racing;
            self.lap_started_at = elapsed;
        }
    }

    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RacePhase::RaceFinished
    }

    pub fn position(&self) -> TrackPosition {
        self.position
    }

    /// Cumulative distance at the last update
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Completed laps
    pub fn laps(&self) -> u32 {
        self.lap_times.len() as u32
    }

    pub fn laps_to_finish(&self) -> u32 {
        self.laps_to_finish
    }

    /// Lap being driven, 1-based, never past the final lap
    pub fn current_lap(&self) -> u32 {
        (self.laps() + 1).min(self.laps_to_finish)
    }

    pub fn lap_times(&self) -> &[f64] {
        &self.lap_times
    }

    pub fn best_lap(&self) -> Option<f64> {
        self.lap_times.iter().copied().reduce(f64::min)
    }

    /// Race clock when the racer crossed the line
    pub fn finish_time(&self) -> Option<f64> {
        self.finish_time
    }

    /// Time spent on the current lap
    pub fn current_lap_time(&self, elapsed: f64) -> f64 {
        (elapsed - self.lap_started_at).max(0.0)
    }

    /// Resolve a new cumulative distance.
    ///
    /// Emits one `SectorEntered` per boundary crossed and one `LapCompleted`
    /// per lap. Does nothing before the start or after the finish.
    pub fn advance(&mut self, track: &Track, cumulative_distance: f64, elapsed: f64) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        if !self.phase.is_running() {
            return events;
        }

        let sector_count = track.len() as u64;
        let previous = self.position;
        let next = track.locate(cumulative_distance);
        self.distance = cumulative_distance;
        self.position = next;

        let from = previous.lap as u64 * sector_count + previous.sector_index as u64;
        let to = next.lap as u64 * sector_count + next.sector_index as u64;

        let mut phase = RacePhase::Racing;
        for step in from.saturating_add(1)..=to {
            let sector_index = (step % sector_count) as usize;
            events.push(ProgressEvent::SectorEntered { sector_index });
            if phase == RacePhase::Racing {
                phase = RacePhase::SectorTransition;
            }

            if sector_index != 0 {
                continue;
            }

            let lap = (step / sector_count) as u32;
            let lap_time = elapsed - self.lap_started_at;
            self.lap_times.push(lap_time);
            self.lap_started_at = elapsed;
            events.push(ProgressEvent::LapCompleted { lap, lap_time });
            phase = RacePhase::LapComplete;

            if lap >= self.laps_to_finish {
                self.finish_time = Some(elapsed);
                self.phase = RacePhase::RaceFinished;
                events.push(ProgressEvent::Finished { time: elapsed });
                return events;
            }
        }

        self.phase = phase;
        events
    }
}

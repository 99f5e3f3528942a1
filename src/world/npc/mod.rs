//! The rival driver.
//!
//! A single computer-controlled car sharing the player's driving model and
//! track. [`ai::RivalAi`] decides speed and lateral position each frame.

pub mod ai;

pub use ai::RivalAi;

use rand::Rng;

use super::physics::DrivingModel;
use super::track::Track;
use super::vehicle::Vehicle;
use crate::storage::config::AiSettings;

/// Runtime state of the rival
#[derive(Debug, Clone)]
pub struct Rival {
    /// Body on the road
    pub vehicle: Vehicle,
    /// Driving behaviour
    pub ai: RivalAi,
    start_lateral: f32,
    start_speed: f32,
}

impl Rival {
    /// Create the rival at the start line
    pub fn new(name: impl Into<String>, settings: &AiSettings, model: &DrivingModel) -> Self {
        let start_speed = model.max_speed * settings.start_speed_ratio;
        Self {
            vehicle: Vehicle::new(name, settings.start_lateral, start_speed),
            ai: RivalAi::from_settings(settings),
            start_lateral: settings.start_lateral,
            start_speed,
        }
    }

    /// Put the rival back on the start line
    pub fn reset(&mut self) {
        let name = std::mem::take(&mut self.vehicle.name);
        self.vehicle = Vehicle::new(name, self.start_lateral, self.start_speed);
        self.ai.phase = 0.0;
    }

    /// Drive one step. Returns the distance covered.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        track: &Track,
        player: &Vehicle,
        model: &DrivingModel,
        rng: &mut R,
        dt: f32,
    ) -> f64 {
        let position = track.locate(self.vehicle.distance);
        let ai_mult = track.sector(position.sector_index).ai_mult;

        self.ai.drive(&mut self.vehicle, player, model, ai_mult, rng, dt);
        self.vehicle.advance(model, dt)
    }

    /// Obstacle hit
    pub fn apply_impact(&mut self, model: &DrivingModel, factor: f32) {
        self.vehicle.apply_impact(model, factor, 0.0);
    }
}

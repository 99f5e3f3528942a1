//! Racer state: the player's car and the body of the rival.

use super::bounds::Rect;
use super::physics::DrivingModel;
use crate::input::DriverControls;

/// Boost countdown, decremented by the frame update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoostState {
    /// Seconds left, zero when inactive
    remaining: f32,
}

impl BoostState {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds of boost left
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Start a boost. Returns false if one is already running.
    pub fn activate(&mut self, duration: f32) -> bool {
        if self.is_active() || duration <= 0.0 {
            return false;
        }
        self.remaining = duration;
        true
    }

    /// Advance the countdown. Returns true on the step it expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return true;
        }
        false
    }
}

/// A car on the road
#[derive(Debug, Clone)]
pub struct Vehicle {
    /// Display name
    pub name: String,
    /// Offset from the road centre, in half-widths
    pub lateral: f32,
    /// Longitudinal speed
    pub speed: f32,
    /// Body roll derived from steering, in radians
    pub angle: f32,
    /// Distance driven since the start, across laps
    pub distance: f64,
    /// Active boost countdown
    pub boost: BoostState,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, lateral: f32, speed: f32) -> Self {
        Self {
            name: name.into(),
            lateral,
            speed,
            angle: 0.0,
            distance: 0.0,
            boost: BoostState::default(),
        }
    }

    pub fn is_boosting(&self) -> bool {
        self.boost.is_active()
    }

    /// Apply one step of driving input. Returns the distance covered.
    pub fn update(&mut self, controls: &DriverControls, model: &DrivingModel, dt: f32) -> f64 {
        if self.boost.tick(dt) {
            tracing::debug!(racer = %self.name, "boost expired");
        }

        self.speed = model.step_speed(self.speed, controls, self.is_boosting(), dt);
        let (lateral, angle) = model.step_lateral(self.lateral, self.speed, controls.steer, dt);
        self.lateral = lateral;
        self.angle = angle;

        self.advance(model, dt)
    }

    /// Move forward at the current speed. Returns the distance covered.
    pub fn advance(&mut self, model: &DrivingModel, dt: f32) -> f64 {
        let delta = model.distance_delta(self.speed, dt);
        self.distance += delta;
        delta
    }

    /// Start a boost and jump toward the boosted top speed. Ignored while a
    /// boost is already running.
    pub fn start_boost(&mut self, model: &DrivingModel, duration: f32) -> bool {
        if !self.boost.activate(duration) {
            return false;
        }
        self.speed = (self.speed * model.boost_multiplier).min(model.speed_cap(true));
        true
    }

    /// Obstacle hit: keep a fraction of speed (at least 1) and get shoved sideways
    pub fn apply_impact(&mut self, model: &DrivingModel, factor: f32, push: f32) {
        self.speed = model.clamp_speed((self.speed * factor).max(1.0), self.is_boosting());
        self.lateral = model.clamp_lateral(self.lateral + push);
    }

    /// Hitbox on the road plane with the car's nose at `depth`
    pub fn bounds(&self, depth: f32, width: f32, length: f32) -> Rect {
        Rect::new(self.lateral - width / 2.0, depth, width, length)
    }
}

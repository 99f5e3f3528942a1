//! Arcade driving model
//!
//! Converts held controls into longitudinal speed and lateral travel. Speed
//! and lateral position are clamped, never rejected.

use crate::input::DriverControls;
use crate::storage::config::PhysicsSettings;

/// Arcade driving model shared by the player and the rival
#[derive(Debug, Clone)]
pub struct DrivingModel {
    /// Top speed without boost
    pub max_speed: f32,
    /// Speed gained per second on throttle
    pub accel: f32,
    /// Speed lost per second on brake
    pub brake: f32,
    /// Speed lost per second when coasting
    pub friction: f32,
    /// Lateral travel per second at rest (road half-widths)
    pub turn_rate: f32,
    /// Top speed multiplier while boosting
    pub boost_multiplier: f32,
    /// Lateral clamp (road half-widths)
    pub road_limit: f32,
    /// Body roll at full lock and top speed
    pub tilt: f32,
    /// Distance units per second per unit of speed
    pub progress_scale: f32,
}

impl Default for DrivingModel {
    fn default() -> Self {
        Self::from_settings(&PhysicsSettings::default())
    }
}

impl DrivingModel {
    /// Build the model from config
    pub fn from_settings(settings: &PhysicsSettings) -> Self {
        Self {
            max_speed: settings.max_speed,
            accel: settings.accel,
            brake: settings.brake,
            friction: settings.friction,
            turn_rate: settings.turn_rate,
            boost_multiplier: settings.boost_multiplier,
            road_limit: settings.road_limit,
            tilt: settings.tilt,
            progress_scale: settings.progress_scale,
        }
    }

    /// Highest speed allowed right now
    pub fn speed_cap(&self, boosting: bool) -> f32 {
        if boosting {
            self.max_speed * self.boost_multiplier
        } else {
            self.max_speed
        }
    }

    /// Clamp a speed into `[0, cap]`, treating NaN as standstill
    pub fn clamp_speed(&self, speed: f32, boosting: bool) -> f32 {
        if speed.is_nan() {
            return 0.0;
        }
        speed.max(0.0).min(self.speed_cap(boosting).max(0.0))
    }

    /// Clamp a lateral offset to the drivable road
    pub fn clamp_lateral(&self, lateral: f32) -> f32 {
        if lateral.is_nan() {
            return 0.0;
        }
        let limit = self.road_limit.max(0.0);
        lateral.max(-limit).min(limit)
    }

    /// Next speed after one step
    pub fn step_speed(&self, speed: f32, controls: &DriverControls, boosting: bool, dt: f32) -> f32 {
        let mut next = speed;
        if controls.throttle {
            next += self.accel * dt;
        } else {
            next -= self.friction * dt;
        }
        if controls.brake {
            next -= self.brake * dt;
        }
        self.clamp_speed(next, boosting)
    }

    /// Next lateral offset and body angle after one step
    pub fn step_lateral(&self, lateral: f32, speed: f32, steer: f32, dt: f32) -> (f32, f32) {
        let steer = if steer.is_nan() { 0.0 } else { steer.clamp(-1.0, 1.0) };
        let speed_ratio = speed / self.max_speed;
        let next = lateral + steer * self.turn_rate * (1.0 + speed_ratio) * dt;
        let angle = steer * -self.tilt * speed_ratio;
        (self.clamp_lateral(next), angle)
    }

    /// Distance covered in one step at the given speed
    pub fn distance_delta(&self, speed: f32, dt: f32) -> f64 {
        (speed * self.progress_scale * dt) as f64
    }
}

//! Rival driver heuristics: a proportional speed controller and a lateral
//! weave that steps aside when the player closes in.

use rand::Rng;
use std::f32::consts::TAU;

use crate::storage::config::AiSettings;
use crate::world::physics::DrivingModel;
use crate::world::vehicle::Vehicle;

/// Rival behaviour parameters and oscillator state
#[derive(Debug, Clone)]
pub struct RivalAi {
    /// Blend rate toward the target speed, per second
    pub gain: f32,
    /// Blend rate toward the desired lateral offset, per second
    pub lateral_gain: f32,
    /// Random speed noise amplitude, per second
    pub jitter: f32,
    /// Weave amplitude in road half-widths
    pub sway_amplitude: f32,
    /// Weave period in seconds
    pub sway_period: f32,
    /// Depth window in which the player is considered alongside
    pub gap_trigger_depth: f32,
    /// Lateral distance kept from the player when taking the gap
    pub gap_offset: f32,
    /// Lower bound of the target speed factor
    pub target_base: f32,
    /// Random spread on top of `target_base`
    pub target_spread: f32,
    /// Weave oscillator phase, in radians
    pub phase: f32,
}

impl Default for RivalAi {
    fn default() -> Self {
        Self::from_settings(&AiSettings::default())
    }
}

impl RivalAi {
    pub fn from_settings(settings: &AiSettings) -> Self {
        Self {
            gain: settings.speed_gain,
            lateral_gain: settings.lateral_gain,
            jitter: settings.jitter,
            sway_amplitude: settings.sway_amplitude,
            sway_period: settings.sway_period_secs,
            gap_trigger_depth: settings.gap_trigger_depth,
            gap_offset: settings.gap_offset,
            target_base: settings.target_base,
            target_spread: settings.target_spread,
            phase: 0.0,
        }
    }

    /// Target speed for the current sector, with a little randomness
    pub fn target_speed<R: Rng + ?Sized>(&self, model: &DrivingModel, ai_mult: f32, rng: &mut R) -> f32 {
        let spread = if self.target_spread > 0.0 {
            rng.gen_range(0.0..self.target_spread)
        } else {
            0.0
        };
        model.max_speed * ai_mult * (self.target_base + spread)
    }

    /// Lateral offset the rival is steering toward.
    ///
    /// `gap` is the rival's distance ahead of the player (negative when
    /// behind).
    pub fn desired_lateral(&self, rival_lateral: f32, player_lateral: f32, gap: f32, road_limit: f32) -> f32 {
        let alongside = gap.abs() < self.gap_trigger_depth;
        let crowded = (rival_lateral - player_lateral).abs() < self.gap_offset;

        let desired = if alongside && crowded {
            // Pass on whichever side the rival already leans toward
            if rival_lateral < player_lateral {
                player_lateral - self.gap_offset
            } else {
                player_lateral + self.gap_offset
            }
        } else {
            self.phase.sin() * self.sway_amplitude
        };

        let limit = road_limit.max(0.0);
        desired.max(-limit).min(limit)
    }

    /// Advance the weave oscillator
    pub fn advance_phase(&mut self, dt: f32) {
        if self.sway_period > 0.0 {
            self.phase = (self.phase + TAU * dt / self.sway_period) % TAU;
        }
    }

    /// Drive the rival for one step.
    pub fn drive<R: Rng + ?Sized>(
        &mut self,
        rival: &mut Vehicle,
        player: &Vehicle,
        model: &DrivingModel,
        ai_mult: f32,
        rng: &mut R,
        dt: f32,
    ) {
        rival.boost.tick(dt);

        let target = self.target_speed(model, ai_mult, rng);
        let noise = self.jitter * (rng.gen::<f32>() - 0.5) * dt;
        let speed = rival.speed + (target - rival.speed) * self.gain * dt + noise;
        rival.speed = model.clamp_speed(speed, true);

        self.advance_phase(dt);
        let gap = (rival.distance - player.distance) as f32;
        let desired = self.desired_lateral(rival.lateral, player.lateral, gap, model.road_limit);
        let blend = (self.lateral_gain * dt).min(1.0);
        rival.lateral = model.clamp_lateral(rival.lateral + (desired - rival.lateral) * blend);
    }
}

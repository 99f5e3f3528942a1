//! Road hazards.
//!
//! Obstacles appear at random far down the road and slide toward the camera.
//! Hitting one costs speed; hit or passed obstacles are removed.

use rand::Rng;

use super::bounds::Rect;
use crate::storage::config::ObstacleSettings;

/// A hazard on the road
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Offset from the road centre, in half-widths
    pub lateral: f32,
    /// Distance ahead of the camera
    pub depth: f32,
    /// Own approach speed, in depth units per second
    pub approach_speed: f32,
    /// Marked once something has driven into it
    pub hit: bool,
}

/// Who drove into an obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleHit {
    /// The player, shoved sideways by `push` half-widths
    Player { push: f32 },
    Rival,
}

/// All live obstacles
#[derive(Debug, Clone)]
pub struct ObstacleField {
    settings: ObstacleSettings,
    progress_scale: f32,
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(settings: ObstacleSettings, progress_scale: f32) -> Self {
        Self {
            settings,
            progress_scale,
            obstacles: Vec::new(),
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Chance of a spawn during a step of `dt` seconds
    pub fn spawn_probability(&self, obstacle_mult: f32, dt: f32) -> f32 {
        let rate = (self.settings.base_rate * obstacle_mult).max(0.0);
        1.0 - (-rate * dt).exp()
    }

    /// Footprint of an obstacle on the road plane
    pub fn bounds(&self, obstacle: &Obstacle) -> Rect {
        Rect::new(
            obstacle.lateral - self.settings.width / 2.0,
            obstacle.depth,
            self.settings.width,
            self.settings.length,
        )
    }

    /// Place a new obstacle at the far end of the road
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let spread = self.settings.spawn_spread;
        let lateral = if spread > 0.0 { rng.gen_range(-spread..=spread) } else { 0.0 };
        let approach_speed = if self.settings.speed_spread > 0.0 {
            self.settings.speed + rng.gen_range(0.0..self.settings.speed_spread)
        } else {
            self.settings.speed
        };
        self.obstacles.push(Obstacle {
            lateral,
            depth: self.settings.spawn_depth,
            approach_speed,
            hit: false,
        });
        tracing::debug!(lateral, "obstacle spawned");
    }

    /// Maybe spawn, then move every obstacle toward the camera and drop the
    /// ones behind it. Returns true if one was spawned.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, obstacle_mult: f32, player_speed: f32, rng: &mut R) -> bool {
        let spawned = rng.gen::<f32>() < self.spawn_probability(obstacle_mult, dt);
        if spawned {
            self.spawn(rng);
        }

        let closing = player_speed * self.progress_scale;
        for obstacle in &mut self.obstacles {
            obstacle.depth -= (obstacle.approach_speed + closing) * dt;
        }

        let limit = -self.settings.despawn_depth;
        self.obstacles.retain(|o| o.depth >= limit);
        spawned
    }

    /// Check the player's and rival's hitboxes. Each obstacle hits at most
    /// once and is removed.
    pub fn resolve_collisions<R: Rng + ?Sized>(
        &mut self,
        player_box: &Rect,
        rival_box: Option<&Rect>,
        max_push: f32,
        rng: &mut R,
    ) -> Vec<ObstacleHit> {
        let mut hits = Vec::new();

        for i in 0..self.obstacles.len() {
            let bounds = self.bounds(&self.obstacles[i]);
            if bounds.overlaps(player_box) {
                let push = (rng.gen::<f32>() - 0.5) * 2.0 * max_push;
                hits.push(ObstacleHit::Player { push });
                self.obstacles[i].hit = true;
            } else if rival_box.is_some_and(|r| bounds.overlaps(r)) {
                hits.push(ObstacleHit::Rival);
                self.obstacles[i].hit = true;
            }
        }

        if !hits.is_empty() {
            tracing::debug!(count = hits.len(), "obstacle collisions");
            self.obstacles.retain(|o| !o.hit);
        }
        hits
    }
}

//! Boost pickups.
//!
//! One [`CollectibleSpawner`] owns the pending spawn countdown and the live
//! pickup. At most one pickup is on the road at a time; once it is collected
//! or missed the next spawn is scheduled.

use rand::Rng;

use super::bounds::Rect;
use crate::storage::config::CollectibleSettings;

/// Pickup lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleState {
    Active,
    Collected,
    Expired,
}

/// A pickup on the road
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    /// Offset from the road centre, in half-widths
    pub lateral: f32,
    /// Distance ahead of the camera
    pub depth: f32,
    /// Width (half-widths) and length (depth units)
    pub size: (f32, f32),
    pub state: CollectibleState,
}

impl Collectible {
    /// Logical footprint on the road plane
    pub fn bounds(&self) -> Rect {
        Rect::new(self.lateral - self.size.0 / 2.0, self.depth, self.size.0, self.size.1)
    }
}

/// What happened to the pickup this frame
///
/// A pickup that leaves the road is handed back in its final state.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectibleEvent {
    Spawned { lateral: f32 },
    Collected(Collectible),
    Expired(Collectible),
}

/// Schedules, moves and resolves boost pickups
#[derive(Debug, Clone)]
pub struct CollectibleSpawner {
    settings: CollectibleSettings,
    progress_scale: f32,
    /// Seconds until the next spawn, if one is scheduled
    pending: Option<f32>,
    active: Option<Collectible>,
}

impl CollectibleSpawner {
    pub fn new(settings: CollectibleSettings, progress_scale: f32) -> Self {
        Self {
            settings,
            progress_scale,
            pending: None,
            active: None,
        }
    }

    /// Schedule the next spawn, replacing any pending one. Returns the delay.
    pub fn schedule<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        let (min, max) = (self.settings.spawn_min_secs, self.settings.spawn_max_secs);
        let delay = if max > min { rng.gen_range(min..=max) } else { min };
        self.pending = Some(delay.max(0.0));
        delay
    }

    /// Drop the pending spawn, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Clear everything, leaving nothing scheduled
    pub fn reset(&mut self) {
        self.pending = None;
        self.active = None;
    }

    /// Seconds until the scheduled spawn
    pub fn pending_delay(&self) -> Option<f32> {
        self.pending
    }

    /// The live pickup
    pub fn active(&self) -> Option<&Collectible> {
        self.active.as_ref()
    }

    /// Advance one step.
    ///
    /// `player_box` is the player's hitbox on the road plane.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        player_speed: f32,
        player_box: &Rect,
        rng: &mut R,
    ) -> Option<CollectibleEvent> {
        if let Some(collectible) = self.active.as_mut() {
            collectible.depth -= (self.settings.base_approach + player_speed * self.progress_scale) * dt;

            let hitbox = collectible
                .bounds()
                .inset(self.settings.hitbox_margin_lateral, self.settings.hitbox_margin_depth);

            let state = if hitbox.overlaps(player_box) {
                CollectibleState::Collected
            } else if collectible.depth < -self.settings.despawn_depth {
                CollectibleState::Expired
            } else {
                return None;
            };

            let mut retired = self.active.take()?;
            retired.state = state;
            self.schedule(rng);
            return Some(match state {
                CollectibleState::Collected => {
                    tracing::debug!("boost pickup collected");
                    CollectibleEvent::Collected(retired)
                }
                _ => {
                    tracing::debug!(depth = retired.depth, "boost pickup missed");
                    CollectibleEvent::Expired(retired)
                }
            });
        }

        let remaining = self.pending? - dt;
        if remaining > 0.0 {
            self.pending = Some(remaining);
            return None;
        }

        self.pending = None;
        let spread = self.settings.spawn_spread;
        let lateral = if spread > 0.0 { rng.gen_range(-spread..=spread) } else { 0.0 };
        self.active = Some(Collectible {
            lateral,
            depth: self.settings.spawn_depth,
            size: (self.settings.width, self.settings.length),
            state: CollectibleState::Active,
        });
        tracing::debug!(lateral, "boost pickup spawned");
        Some(CollectibleEvent::Spawned { lateral })
    }
}

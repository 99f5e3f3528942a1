//! Game session: one race from the countdown to the finish line.
//!
//! [`GameSession`] owns the explicit [`RaceState`] and is its only writer.
//! The host calls [`GameSession::update`] once per frame and renders from
//! [`GameSession::state`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::countdown::{Countdown, CountdownEvent};
use super::progress::{ProgressEvent, RacePhase, RaceProgress};
use super::results::RaceResult;
use crate::input::DriverControls;
use crate::storage::config::GameConfig;
use crate::world::bounds::Rect;
use crate::world::collectibles::{CollectibleEvent, CollectibleSpawner};
use crate::world::hud::HudSnapshot;
use crate::world::npc::Rival;
use crate::world::obstacles::{ObstacleField, ObstacleHit};
use crate::world::physics::DrivingModel;
use crate::world::track::{Track, TrackError};
use crate::world::vehicle::Vehicle;

/// Which car an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Racer {
    Player,
    Rival,
}

/// Something the host may want to react to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Countdown(CountdownEvent),
    /// Racing began
    Started,
    SectorEntered { racer: Racer, sector_index: usize },
    LapCompleted { racer: Racer, lap: u32, lap_time: f64 },
    BoostCollected,
    BoostExpired,
    PickupMissed,
    ObstacleHit(Racer),
    /// The player crossed the finish line
    Finished(RaceResult),
}

/// Everything that changes during a race
#[derive(Debug, Clone)]
pub struct RaceState {
    pub player: Vehicle,
    pub rival: Rival,
    pub player_progress: RaceProgress,
    pub rival_progress: RaceProgress,
    pub countdown: Countdown,
    pub collectibles: CollectibleSpawner,
    pub obstacles: ObstacleField,
    /// Race clock in seconds, starting at the green light
    pub elapsed: f64,
    pub phase: RacePhase,
}

impl RaceState {
    fn new(config: &GameConfig, model: &DrivingModel, player_name: &str) -> Self {
        let laps = config.race.laps_to_finish;
        Self {
            player: Vehicle::new(player_name, 0.0, 0.0),
            rival: Rival::new(config.race.rival_name.clone(), &config.ai, model),
            player_progress: RaceProgress::new(laps),
            rival_progress: RaceProgress::new(laps),
            countdown: Countdown::new(config.race.countdown_secs),
            collectibles: CollectibleSpawner::new(config.collectibles.clone(), model.progress_scale),
            obstacles: ObstacleField::new(config.obstacles.clone(), model.progress_scale),
            elapsed: 0.0,
            phase: RacePhase::Countdown,
        }
    }

    /// Put both cars back on the grid and clear the road
    fn reset(&mut self) {
        let name = std::mem::take(&mut self.player.name);
        self.player = Vehicle::new(name, 0.0, 0.0);
        self.rival.reset();
        self.player_progress = RaceProgress::new(self.player_progress.laps_to_finish());
        self.rival_progress = RaceProgress::new(self.rival_progress.laps_to_finish());
        self.countdown.reset();
        self.collectibles.reset();
        self.obstacles.clear();
        self.elapsed = 0.0;
        self.phase = RacePhase::Countdown;
    }

    /// How far the rival is ahead of the player, negative when behind
    pub fn rival_gap(&self) -> f64 {
        self.rival.vehicle.distance - self.player.distance
    }
}

/// One race, owning its state, config, track and random source
pub struct GameSession {
    config: GameConfig,
    track: Track,
    model: DrivingModel,
    player_name: String,
    state: RaceState,
    rng: StdRng,
    result: Option<RaceResult>,
}

impl GameSession {
    /// Create a session seeded from OS entropy
    pub fn new(config: GameConfig, player_name: &str) -> Result<Self, TrackError> {
        Self::with_rng(config, player_name, StdRng::from_entropy())
    }

    /// Create a session with a fixed seed, for reproducible races
    pub fn with_seed(config: GameConfig, player_name: &str, seed: u64) -> Result<Self, TrackError> {
        Self::with_rng(config, player_name, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, player_name: &str, rng: StdRng) -> Result<Self, TrackError> {
        let track = Track::from_config(&config.sectors)?;
        let model = DrivingModel::from_settings(&config.physics);
        let state = RaceState::new(&config, &model, player_name);

        let mut session = Self {
            config,
            track,
            model,
            player_name: player_name.to_string(),
            state,
            rng,
            result: None,
        };
        if session.state.countdown.is_finished() {
            session.begin_racing();
        }

        tracing::info!(
            player = %session.player_name,
            laps = session.config.race.laps_to_finish,
            track_length = session.track.total_length(),
            "race session created"
        );
        Ok(session)
    }

    /// Back to the start line with a fresh countdown
    pub fn reset(&mut self) {
        self.state.reset();
        self.result = None;
        if self.state.countdown.is_finished() {
            self.begin_racing();
        }
        tracing::info!("race session reset");
    }

    pub fn state(&self) -> &RaceState {
        &self.state
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn model(&self) -> &DrivingModel {
        &self.model
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn phase(&self) -> RacePhase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == RacePhase::RaceFinished
    }

    /// Final result, once the player has finished
    pub fn result(&self) -> Option<&RaceResult> {
        self.result.as_ref()
    }

    /// HUD values for the current frame
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::capture(self)
    }

    /// Player's current place, 1 or 2.
    ///
    /// Finished racers rank by finish time, everyone else by distance.
    pub fn player_position(&self) -> u32 {
        let player = self.state.player_progress.finish_time();
        let rival = self.state.rival_progress.finish_time();
        match (player, rival) {
            (Some(p), Some(r)) => {
                if p <= r {
                    1
                } else {
                    2
                }
            }
            (Some(_), None) => 1,
            (None, Some(_)) => 2,
            (None, None) => {
                if self.state.player.distance >= self.state.rival.vehicle.distance {
                    1
                } else {
                    2
                }
            }
        }
    }

    /// Player hitbox on the road plane
    pub fn player_box(&self) -> Rect {
        let render = &self.config.render;
        self.state
            .player
            .bounds(render.player_depth, render.car_width, render.car_length)
    }

    /// Rival hitbox, if the rival is on screen
    pub fn rival_box(&self) -> Option<Rect> {
        let render = &self.config.render;
        let depth = render.player_depth + self.state.rival_gap() as f32;
        if depth < -self.config.obstacles.despawn_depth || depth > render.draw_distance {
            return None;
        }
        Some(
            self.state
                .rival
                .vehicle
                .bounds(depth, render.car_width, render.car_length),
        )
    }

    fn begin_racing(&mut self) {
        let elapsed = self.state.elapsed;
        self.state.player_progress.start(elapsed);
        self.state.rival_progress.start(elapsed);
        self.state.collectibles.schedule(&mut self.rng);
        self.state.phase = RacePhase::Racing;
        tracing::info!(player = %self.player_name, "race started");
    }

    /// Advance the race by one frame.
    ///
    /// `dt` is clamped to `[0, max_frame_dt]`. Does nothing once the race is
    /// finished.
    pub fn update(&mut self, dt: f32, controls: &DriverControls) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.is_finished() {
            return events;
        }

        let dt = if dt.is_finite() {
            dt.max(0.0).min(self.config.race.max_frame_dt.max(0.0))
        } else {
            0.0
        };

        if !self.state.countdown.is_finished() {
            if let Some(event) = self.state.countdown.tick(dt) {
                events.push(SessionEvent::Countdown(event));
                if event == CountdownEvent::Go {
                    self.begin_racing();
                    events.push(SessionEvent::Started);
                }
            }
            return events;
        }

        self.state.elapsed += dt as f64;
        self.drive(dt, controls, &mut events);
        self.resolve_obstacles(dt, &mut events);
        self.resolve_pickup(dt, &mut events);
        self.resolve_progress(&mut events);

        events
    }

    fn drive(&mut self, dt: f32, controls: &DriverControls, events: &mut Vec<SessionEvent>) {
        let was_boosting = self.state.player.is_boosting();
        self.state.player.update(controls, &self.model, dt);
        if was_boosting && !self.state.player.is_boosting() {
            events.push(SessionEvent::BoostExpired);
        }

        let state = &mut self.state;
        state
            .rival
            .update(&self.track, &state.player, &self.model, &mut self.rng, dt);
    }

    fn resolve_obstacles(&mut self, dt: f32, events: &mut Vec<SessionEvent>) {
        let sector_index = self.state.player_progress.position().sector_index;
        let obstacle_mult = self.track.sector(sector_index).obstacle_mult;
        let player_speed = self.state.player.speed;
        self.state
            .obstacles
            .update(dt, obstacle_mult, player_speed, &mut self.rng);

        let player_box = self.player_box();
        let rival_box = self.rival_box();
        let hits = self.state.obstacles.resolve_collisions(
            &player_box,
            rival_box.as_ref(),
            self.config.physics.impact_push,
            &mut self.rng,
        );

        for hit in hits {
            match hit {
                ObstacleHit::Player { push } => {
                    self.state
                        .player
                        .apply_impact(&self.model, self.config.physics.impact_factor, push);
                    events.push(SessionEvent::ObstacleHit(Racer::Player));
                }
                ObstacleHit::Rival => {
                    self.state
                        .rival
                        .apply_impact(&self.model, self.config.physics.rival_impact_factor);
                    events.push(SessionEvent::ObstacleHit(Racer::Rival));
                }
            }
        }
    }

    fn resolve_pickup(&mut self, dt: f32, events: &mut Vec<SessionEvent>) {
        let player_box = self.player_box();
        let player_speed = self.state.player.speed;
        let event = self
            .state
            .collectibles
            .update(dt, player_speed, &player_box, &mut self.rng);

        match event {
            Some(CollectibleEvent::Collected(_)) => {
                let duration = self.config.physics.boost_duration_secs;
                if self.state.player.start_boost(&self.model, duration) {
                    tracing::info!(duration, "boost activated");
                    events.push(SessionEvent::BoostCollected);
                }
            }
            Some(CollectibleEvent::Expired(_)) => events.push(SessionEvent::PickupMissed),
            Some(CollectibleEvent::Spawned { .. }) | None => {}
        }
    }

    fn resolve_progress(&mut self, events: &mut Vec<SessionEvent>) {
        let elapsed = self.state.elapsed;

        let rival_distance = self.state.rival.vehicle.distance;
        for event in self
            .state
            .rival_progress
            .advance(&self.track, rival_distance, elapsed)
        {
            if let Some(mapped) = self.map_progress(Racer::Rival, event) {
                events.push(mapped);
            }
        }

        let player_distance = self.state.player.distance;
        let mut finished = false;
        for event in self
            .state
            .player_progress
            .advance(&self.track, player_distance, elapsed)
        {
            if matches!(event, ProgressEvent::Finished { .. }) {
                finished = true;
            }
            if let Some(mapped) = self.map_progress(Racer::Player, event) {
                events.push(mapped);
            }
        }

        self.state.phase = self.state.player_progress.phase();

        if finished {
            let result = self.build_result();
            tracing::info!(
                position = result.position,
                time = %result.formatted_finish_time(),
                "race finished"
            );
            self.result = Some(result.clone());
            events.push(SessionEvent::Finished(result));
        }
    }

    fn map_progress(&self, racer: Racer, event: ProgressEvent) -> Option<SessionEvent> {
        match event {
            ProgressEvent::SectorEntered { sector_index } => {
                if racer == Racer::Player {
                    tracing::info!(sector = %self.track.sector(sector_index).name, "sector entered");
                }
                Some(SessionEvent::SectorEntered { racer, sector_index })
            }
            ProgressEvent::LapCompleted { lap, lap_time } => {
                tracing::info!(?racer, lap, lap_time, "lap completed");
                Some(SessionEvent::LapCompleted { racer, lap, lap_time })
            }
            ProgressEvent::Finished { time } => {
                if racer == Racer::Rival {
                    tracing::info!(time, "rival finished");
                }
                None
            }
        }
    }

    fn build_result(&self) -> RaceResult {
        let progress = &self.state.player_progress;
        RaceResult {
            player_name: self.player_name.clone(),
            laps: progress.laps(),
            finish_time: progress.finish_time().unwrap_or(self.state.elapsed),
            lap_times: progress.lap_times().to_vec(),
            best_lap: progress.best_lap(),
            position: self.player_position(),
            rival_finish_time: self.state.rival_progress.finish_time(),
        }
    }
}

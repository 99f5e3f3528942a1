//! Game configuration loaded from TOML.
//!
//! Every rate is expressed per second; the frame loop passes `dt` in seconds.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Configuration file version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Player driving model
    pub physics: PhysicsSettings,
    /// Race rules
    pub race: RaceSettings,
    /// Rival driver tuning
    pub ai: AiSettings,
    /// Boost pickup tuning
    pub collectibles: CollectibleSettings,
    /// Road hazard tuning
    pub obstacles: ObstacleSettings,
    /// Projection and draw settings
    pub render: RenderSettings,
    /// Image file names
    pub assets: AssetSettings,
    /// Track layout, in driving order
    pub sectors: Vec<SectorConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            physics: PhysicsSettings::default(),
            race: RaceSettings::default(),
            ai: AiSettings::default(),
            collectibles: CollectibleSettings::default(),
            obstacles: ObstacleSettings::default(),
            render: RenderSettings::default(),
            assets: AssetSettings::default(),
            sectors: default_sectors(),
        }
    }
}

/// Player driving model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Top speed without boost (internal speed units)
    pub max_speed: f32,
    /// Speed gained per second while the throttle is held
    pub accel: f32,
    /// Speed lost per second while braking
    pub brake: f32,
    /// Speed lost per second when coasting
    pub friction: f32,
    /// Lateral travel per second at rest, in road half-widths
    pub turn_rate: f32,
    /// Top speed multiplier while boosting
    pub boost_multiplier: f32,
    /// Boost length in seconds
    pub boost_duration_secs: f32,
    /// Lateral clamp, in road half-widths
    pub road_limit: f32,
    /// Body roll at full lock and top speed (radians)
    pub tilt: f32,
    /// Distance units covered per second per unit of speed
    pub progress_scale: f32,
    /// Speed factor kept after the player hits an obstacle
    pub impact_factor: f32,
    /// Speed factor kept after the rival hits an obstacle
    pub rival_impact_factor: f32,
    /// Maximum sideways shove from an obstacle hit
    pub impact_push: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            max_speed: 14.0,
            accel: 27.0,
            brake: 54.0,
            friction: 2.4,
            turn_rate: 0.5,
            boost_multiplier: 1.9,
            boost_duration_secs: 5.0,
            road_limit: 0.85,
            tilt: 0.18,
            progress_scale: 18.0,
            impact_factor: 0.6,
            rival_impact_factor: 0.7,
            impact_push: 0.1,
        }
    }
}

/// Race rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceSettings {
    /// Laps needed to finish
    pub laps_to_finish: u32,
    /// Pre-race countdown in seconds (0 disables it)
    pub countdown_secs: f32,
    /// Longest frame step the simulation accepts, in seconds
    pub max_frame_dt: f32,
    /// Rival display name
    pub rival_name: String,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            laps_to_finish: 2,
            countdown_secs: 3.0,
            max_frame_dt: 0.04,
            rival_name: "Rival".to_string(),
        }
    }
}

/// Rival driver tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// Starting speed as a fraction of max speed
    pub start_speed_ratio: f32,
    /// Starting lateral offset
    pub start_lateral: f32,
    /// Lower bound of the target speed factor
    pub target_base: f32,
    /// Random spread added on top of `target_base`
    pub target_spread: f32,
    /// Blend rate toward the target speed, per second
    pub speed_gain: f32,
    /// Random speed noise amplitude, per second
    pub jitter: f32,
    /// Blend rate toward the desired lateral offset, per second
    pub lateral_gain: f32,
    /// Weave amplitude, in road half-widths
    pub sway_amplitude: f32,
    /// Weave period in seconds
    pub sway_period_secs: f32,
    /// Depth window in which the rival reacts to the player
    pub gap_trigger_depth: f32,
    /// Lateral distance kept from the player when taking the gap
    pub gap_offset: f32,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            start_speed_ratio: 0.95,
            start_lateral: 0.2,
            target_base: 0.9,
            target_spread: 0.12,
            speed_gain: 1.2,
            jitter: 3.0,
            lateral_gain: 1.2,
            sway_amplitude: 0.17,
            sway_period_secs: 5.0,
            gap_trigger_depth: 60.0,
            gap_offset: 0.45,
        }
    }
}

/// Boost pickup tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleSettings {
    /// Shortest delay before a pickup appears (seconds)
    pub spawn_min_secs: f32,
    /// Longest delay before a pickup appears (seconds)
    pub spawn_max_secs: f32,
    /// Depth at which a pickup appears
    pub spawn_depth: f32,
    /// Lateral spawn range, in road half-widths either side of centre
    pub spawn_spread: f32,
    /// Approach speed independent of the player's speed
    pub base_approach: f32,
    /// Pickup width in road half-widths
    pub width: f32,
    /// Pickup length in depth units
    pub length: f32,
    /// Lateral hitbox inset
    pub hitbox_margin_lateral: f32,
    /// Depth hitbox inset
    pub hitbox_margin_depth: f32,
    /// How far behind the camera a missed pickup is discarded
    pub despawn_depth: f32,
}

impl Default for CollectibleSettings {
    fn default() -> Self {
        Self {
            spawn_min_secs: 6.0,
            spawn_max_secs: 14.0,
            spawn_depth: 600.0,
            spawn_spread: 0.6,
            base_approach: 180.0,
            width: 0.18,
            length: 20.0,
            hitbox_margin_lateral: 0.02,
            hitbox_margin_depth: 4.0,
            despawn_depth: 40.0,
        }
    }
}

/// Road hazard tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleSettings {
    /// Spawns per second before the sector multiplier
    pub base_rate: f32,
    /// Slowest approach speed in depth units per second
    pub speed: f32,
    /// Random approach speed added on top of `speed`
    pub speed_spread: f32,
    /// Obstacle width in road half-widths
    pub width: f32,
    /// Obstacle length in depth units
    pub length: f32,
    /// Depth at which obstacles appear
    pub spawn_depth: f32,
    /// Lateral spawn range, in road half-widths either side of centre
    pub spawn_spread: f32,
    /// How far behind the camera an obstacle is discarded
    pub despawn_depth: f32,
}

impl Default for ObstacleSettings {
    fn default() -> Self {
        Self {
            base_rate: 0.84,
            speed: 120.0,
            speed_spread: 60.0,
            width: 0.2,
            length: 16.0,
            spawn_depth: 600.0,
            spawn_spread: 0.64,
            despawn_depth: 60.0,
        }
    }
}

/// Projection and draw settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Depth at which objects are drawn at half size
    pub projection_constant: f32,
    /// Horizon line as a fraction of viewport height
    pub horizon_ratio: f32,
    /// Road half-width at depth 0 as a fraction of viewport width
    pub road_half_width_ratio: f32,
    /// Number of road slices drawn per frame
    pub road_slices: u32,
    /// Farthest depth drawn
    pub draw_distance: f32,
    /// Depth of the player's car in front of the camera
    pub player_depth: f32,
    /// Car hitbox width in road half-widths
    pub car_width: f32,
    /// Car hitbox length in depth units
    pub car_length: f32,
    /// Car sprite size at depth 0, in pixels
    pub car_sprite: [f32; 2],
    /// Pickup sprite size at depth 0, in pixels
    pub collectible_sprite: [f32; 2],
    /// Obstacle size at depth 0, in pixels
    pub obstacle_sprite: [f32; 2],
    /// Fallback background colour
    pub background_color: String,
    /// Menu backdrop colour
    pub menu_color: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            projection_constant: 150.0,
            horizon_ratio: 0.12,
            road_half_width_ratio: 0.39,
            road_slices: 28,
            draw_distance: 600.0,
            player_depth: 12.0,
            car_width: 0.24,
            car_length: 24.0,
            car_sprite: [100.0, 140.0],
            collectible_sprite: [74.0, 74.0],
            obstacle_sprite: [64.0, 40.0],
            background_color: "#0b1220".to_string(),
            menu_color: "#071023".to_string(),
        }
    }
}

/// Image file names, relative to `directory`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory holding the images
    pub directory: PathBuf,
    pub player: String,
    pub rival: String,
    pub boost: String,
    pub collectible: String,
    pub track: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("assets"),
            player: "ngtr.png".to_string(),
            rival: "bot.png".to_string(),
            boost: "supercar.png".to_string(),
            collectible: "ea.png".to_string(),
            track: "pista.jpg".to_string(),
        }
    }
}

/// One track sector as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorConfig {
    pub name: String,
    /// `#rrggbb` background colour
    pub color: String,
    /// Length in distance units
    pub length: f64,
    #[serde(default = "default_multiplier")]
    pub obstacle_mult: f32,
    #[serde(default = "default_multiplier")]
    pub ai_mult: f32,
    /// Road bend, negative to the left
    #[serde(default)]
    pub curve: f32,
    /// Optional background image file name
    #[serde(default)]
    pub image: Option<String>,
}

fn default_multiplier() -> f32 {
    1.0
}

fn sector(name: &str, color: &str, length: f64, obstacle_mult: f32, ai_mult: f32, curve: f32, image: &str) -> SectorConfig {
    SectorConfig {
        name: name.to_string(),
        color: color.to_string(),
        length,
        obstacle_mult,
        ai_mult,
        curve,
        image: Some(image.to_string()),
    }
}

/// The stock six-sector circuit.
pub fn default_sectors() -> Vec<SectorConfig> {
    vec![
        sector("Rampa do Lago", "#dbeefd", 1500.0, 1.2, 1.05, 0.0, "sector_lake.jpg"),
        sector("Fase de Nadar", "#cfe8f5", 1300.0, 1.4, 1.08, 0.35, "sector_water.jpg"),
        sector("Fase da Escalada", "#e8e0ff", 1400.0, 1.3, 1.06, -0.25, "sector_climb.jpg"),
        sector("Fase do Espaço", "#e0ffd9", 1600.0, 1.6, 1.12, 0.5, "sector_space.jpg"),
        sector("Fase do Flash", "#fff0d6", 1100.0, 1.8, 1.15, -0.6, "sector_flash.jpg"),
        sector("Fase do Multiverso", "#f0d6ff", 1800.0, 2.0, 1.2, 0.2, "sector_multi.jpg"),
    ]
}

impl GameConfig {
    /// Check the values the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sectors.is_empty() {
            return Err(ConfigError::Invalid("at least one sector is required".to_string()));
        }
        if let Some(bad) = self.sectors.iter().find(|s| !(s.length.is_finite() && s.length > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "sector '{}' has non-positive length {}",
                bad.name, bad.length
            )));
        }
        if self.race.laps_to_finish == 0 {
            return Err(ConfigError::Invalid("laps_to_finish must be at least 1".to_string()));
        }
        let physics = &self.physics;
        if !(physics.max_speed.is_finite() && physics.max_speed > 0.0) {
            return Err(ConfigError::Invalid("max_speed must be positive".to_string()));
        }
        if !(physics.boost_multiplier.is_finite() && physics.boost_multiplier >= 1.0) {
            return Err(ConfigError::Invalid("boost_multiplier must be at least 1".to_string()));
        }
        for (name, value) in [
            ("physics.accel", physics.accel),
            ("physics.brake", physics.brake),
            ("physics.friction", physics.friction),
            ("physics.turn_rate", physics.turn_rate),
            ("physics.boost_duration_secs", physics.boost_duration_secs),
            ("physics.road_limit", physics.road_limit),
            ("physics.tilt", physics.tilt),
            ("physics.progress_scale", physics.progress_scale),
            ("physics.impact_factor", physics.impact_factor),
            ("physics.rival_impact_factor", physics.rival_impact_factor),
            ("physics.impact_push", physics.impact_push),
            ("race.countdown_secs", self.race.countdown_secs),
            ("ai.start_speed_ratio", self.ai.start_speed_ratio),
            ("ai.target_base", self.ai.target_base),
            ("ai.target_spread", self.ai.target_spread),
            ("ai.speed_gain", self.ai.speed_gain),
            ("ai.jitter", self.ai.jitter),
            ("ai.lateral_gain", self.ai.lateral_gain),
            ("ai.sway_amplitude", self.ai.sway_amplitude),
            ("ai.sway_period_secs", self.ai.sway_period_secs),
            ("ai.gap_trigger_depth", self.ai.gap_trigger_depth),
            ("ai.gap_offset", self.ai.gap_offset),
            ("collectibles.spawn_min_secs", self.collectibles.spawn_min_secs),
            ("collectibles.spawn_max_secs", self.collectibles.spawn_max_secs),
            ("collectibles.spawn_spread", self.collectibles.spawn_spread),
            ("obstacles.base_rate", self.obstacles.base_rate),
            ("obstacles.speed_spread", self.obstacles.speed_spread),
            ("obstacles.spawn_spread", self.obstacles.spawn_spread),
        ] {
            check_non_negative(name, value)?;
        }
        if !(self.race.max_frame_dt.is_finite() && self.race.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid("max_frame_dt must be positive".to_string()));
        }
        if self.collectibles.spawn_min_secs > self.collectibles.spawn_max_secs {
            return Err(ConfigError::Invalid(
                "spawn_min_secs must not exceed spawn_max_secs".to_string(),
            ));
        }
        if !(self.render.projection_constant.is_finite() && self.render.projection_constant > 0.0) {
            return Err(ConfigError::Invalid("projection_constant must be positive".to_string()));
        }
        Ok(())
    }

    /// Resolve an asset file name against the configured directory.
    pub fn asset_path(&self, file: &str) -> PathBuf {
        if self.assets.directory.is_absolute() {
            self.assets.directory.join(file)
        } else {
            self.data_dir.join(&self.assets.directory).join(file)
        }
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{} must be a non-negative number, got {}", name, value)))
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "freegear", "FreeGear")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the data directory, falling back to defaults.
pub fn load_config() -> Result<GameConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = GameConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let mut config = load_config_from(&path)?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load and validate configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<GameConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: GameConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.data_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    config.validate()?;

    Ok(config)
}

/// Save configuration to the data directory.
pub fn save_config(config: &GameConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to an explicit path.
pub fn save_config_to(config: &GameConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

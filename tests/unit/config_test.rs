//! Tests for configuration loading

use freegear::storage::config::{load_config_from, save_config_to, ConfigError, GameConfig};
use freegear::world::{Track, TrackError};
use tempfile::tempdir;

/// Test the stock configuration is valid
#[test]
fn test_default_config_is_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.race.laps_to_finish, 2);
    assert_eq!(config.sectors.len(), 6);
    assert!(Track::from_config(&config.sectors).is_ok());
}

/// Test saving and loading a tuned configuration
#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = GameConfig::default();
    config.race.laps_to_finish = 3;
    config.physics.max_speed = 16.0;
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.race.laps_to_finish, 3);
    assert_eq!(loaded.physics.max_speed, 16.0);
    assert_eq!(loaded.data_dir, dir.path());
}

/// Test that a partial file keeps defaults for everything else
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[race]\nlaps_to_finish = 1\n").unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.race.laps_to_finish, 1);
    assert_eq!(loaded.physics.max_speed, 14.0);
    assert_eq!(loaded.sectors.len(), 6);
}

/// Test that a custom track replaces the stock one
#[test]
fn test_custom_sectors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[[sectors]]
name = "Oval"
color = "#102030"
length = 500.0

[[sectors]]
name = "Back"
color = "#ffffff"
length = 700.0
curve = 0.4
"##,
    )
    .unwrap();

    let loaded = load_config_from(&path).unwrap();
    let track = Track::from_config(&loaded.sectors).unwrap();
    assert_eq!(track.len(), 2);
    assert_eq!(track.total_length(), 1200.0);
    assert_eq!(track.sector(1).curve, 0.4);
    assert_eq!(track.sector(0).ai_mult, 1.0);
}

/// Test that invalid values are rejected
#[test]
fn test_invalid_values_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[race]\nlaps_to_finish = 0\n").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "[[sectors]]\nname = \"Bad\"\ncolor = \"#000000\"\nlength = -5.0\n").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "not = [valid").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}

/// Test that a bad sector colour is caught when building the track
#[test]
fn test_bad_colour_rejected_by_track() {
    let mut config = GameConfig::default();
    config.sectors[2].color = "teal".to_string();
    assert!(matches!(
        Track::from_config(&config.sectors),
        Err(TrackError::InvalidColor { .. })
    ));
}

/// Test that tuning values that would break the physics are rejected
#[test]
fn test_out_of_range_tuning_rejected() {
    let mut config = GameConfig::default();
    config.physics.road_limit = -0.5;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = GameConfig::default();
    config.race.max_frame_dt = -0.1;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = GameConfig::default();
    config.race.max_frame_dt = 0.0;
    assert!(config.validate().is_err());

    let mut config = GameConfig::default();
    config.obstacles.base_rate = f32::INFINITY;
    assert!(config.validate().is_err());
}

/// Test that NaN and infinite numbers in the file are rejected
#[test]
fn test_non_finite_values_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "[physics]\nmax_speed = nan\n").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "[physics]\nroad_limit = inf\n").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "[race]\nmax_frame_dt = nan\n").unwrap();
    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));
}

//! Tests for the rival driver

use freegear::render::Color;
use freegear::storage::config::AiSettings;
use freegear::world::{DrivingModel, Rival, Sector, Track, Vehicle};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn track_with_ai_mult(ai_mult: f32) -> Track {
    let mut sector = Sector::new("Reta", Color::WHITE, 100_000.0);
    sector.ai_mult = ai_mult;
    Track::new(vec![sector]).unwrap()
}

fn settle(track: &Track, seed: u64) -> Rival {
    let model = DrivingModel::default();
    let mut rival = Rival::new("Bot", &AiSettings::default(), &model);
    let player = Vehicle::new("Ana", 0.0, 0.0);
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..900 {
        rival.update(track, &player, &model, &mut rng, 1.0 / 60.0);
    }
    rival
}

/// Test the rival starts near top speed, off-centre
#[test]
fn test_rival_start() {
    let model = DrivingModel::default();
    let rival = Rival::new("Bot", &AiSettings::default(), &model);
    assert!((rival.vehicle.speed - model.max_speed * 0.95).abs() < 1e-5);
    assert!((rival.vehicle.lateral - 0.2).abs() < 1e-6);
    assert_eq!(rival.vehicle.distance, 0.0);
}

/// Test that harder sectors make the rival faster
#[test]
fn test_sector_multiplier_raises_pace() {
    let easy = settle(&track_with_ai_mult(1.0), 9);
    let hard = settle(&track_with_ai_mult(1.2), 9);
    assert!(hard.vehicle.distance > easy.vehicle.distance);
}

/// Test that the rival never leaves the road or stalls
#[test]
fn test_rival_stays_on_road() {
    let model = DrivingModel::default();
    let track = track_with_ai_mult(1.2);
    let mut rival = Rival::new("Bot", &AiSettings::default(), &model);
    let player = Vehicle::new("Ana", 0.1, 0.0);
    let mut rng = StdRng::seed_from_u64(21);

    let mut last = 0.0;
    for _ in 0..1200 {
        rival.update(&track, &player, &model, &mut rng, 1.0 / 30.0);
        assert!(rival.vehicle.lateral.abs() <= model.road_limit);
        assert!(rival.vehicle.speed >= 0.0);
        assert!(rival.vehicle.speed <= model.speed_cap(true));
        assert!(rival.vehicle.distance >= last);
        last = rival.vehicle.distance;
    }
}

/// Test that a hit slows the rival and reset puts it back on the line
#[test]
fn test_rival_impact_and_reset() {
    let model = DrivingModel::default();
    let mut rival = Rival::new("Bot", &AiSettings::default(), &model);
    let before = rival.vehicle.speed;
    rival.apply_impact(&model, 0.7);
    assert!((rival.vehicle.speed - before * 0.7).abs() < 1e-5);

    rival.vehicle.distance = 1234.0;
    rival.reset();
    assert_eq!(rival.vehicle.distance, 0.0);
    assert_eq!(rival.vehicle.name, "Bot");
    assert!((rival.vehicle.speed - before).abs() < 1e-6);
}

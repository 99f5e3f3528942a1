//! Race session tests: countdown, a full race, and what happens after it

use freegear::input::DriverControls;
use freegear::racing::{CountdownEvent, GameSession, RacePhase, Racer, SessionEvent};
use freegear::storage::{GameConfig, ProfileStore};
use tempfile::tempdir;

const FRAME: f32 = 0.04;

fn no_countdown() -> GameConfig {
    let mut config = GameConfig::default();
    config.race.countdown_secs = 0.0;
    config
}

/// Drive with the throttle held until the race ends, collecting every event
fn race_to_finish(session: &mut GameSession) -> Vec<SessionEvent> {
    let controls = DriverControls::accelerate();
    let mut events = Vec::new();
    for _ in 0..20_000 {
        events.extend(session.update(FRAME, &controls));
        if session.is_finished() {
            return events;
        }
    }
    panic!("race did not finish");
}

/// Test the countdown gates the start
#[test]
fn test_countdown_then_start() {
    let mut session = GameSession::with_seed(GameConfig::default(), "Ana", 1).unwrap();
    assert_eq!(session.phase(), RacePhase::Countdown);

    let controls = DriverControls::accelerate();
    let mut ticks = Vec::new();
    let mut started = false;
    for _ in 0..200 {
        for event in session.update(FRAME, &controls) {
            match event {
                SessionEvent::Countdown(CountdownEvent::Tick { seconds }) => ticks.push(seconds),
                SessionEvent::Started => started = true,
                _ => {}
            }
        }
        if started {
            break;
        }
        assert_eq!(session.state().player.distance, 0.0);
        assert_eq!(session.state().rival.vehicle.distance, 0.0);
    }

    assert!(started);
    assert_eq!(ticks, vec![3, 2, 1]);
    assert_eq!(session.phase(), RacePhase::Racing);

    session.update(FRAME, &controls);
    assert!(session.state().player.distance > 0.0);
}

/// Test a complete two-lap race
#[test]
fn test_full_race() {
    let mut session = GameSession::with_seed(no_countdown(), "Ana", 7).unwrap();
    assert_eq!(session.phase(), RacePhase::Racing);
    assert_eq!(session.hud().lap_text, "0/2");

    let events = race_to_finish(&mut session);

    let player_sectors = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::SectorEntered { racer: Racer::Player, .. }))
        .count();
    let player_laps: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::LapCompleted {
                racer: Racer::Player,
                lap_time,
                ..
            } => Some(*lap_time),
            _ => None,
        })
        .collect();
    assert_eq!(player_sectors, 12);
    assert_eq!(player_laps.len(), 2);

    let Some(SessionEvent::Finished(result)) = events.last() else {
        panic!("last event should be the finish");
    };
    assert_eq!(result.player_name, "Ana");
    assert_eq!(result.laps, 2);
    assert_eq!(result.lap_times, player_laps);
    let lap_sum: f64 = result.lap_times.iter().sum();
    assert!((result.finish_time - lap_sum).abs() < 1e-6);
    assert!(result.position == 1 || result.position == 2);
    if result.rival_finish_time.is_none() {
        assert_eq!(result.position, 1);
    }

    assert_eq!(session.phase(), RacePhase::RaceFinished);
    assert!(session.state().player.distance >= 17_400.0);
    assert_eq!(session.result(), Some(result));
    assert_eq!(session.hud().lap_text, "2/2");
}

/// Test that the session is frozen once the race is over
#[test]
fn test_updates_ignored_after_finish() {
    let mut session = GameSession::with_seed(no_countdown(), "Ana", 3).unwrap();
    race_to_finish(&mut session);

    let distance = session.state().player.distance;
    let elapsed = session.state().elapsed;
    for _ in 0..50 {
        assert!(session.update(FRAME, &DriverControls::accelerate()).is_empty());
    }
    assert_eq!(session.state().player.distance, distance);
    assert_eq!(session.state().elapsed, elapsed);
}

/// Test that oversized and broken frame steps are tamed
#[test]
fn test_frame_step_clamped() {
    let mut session = GameSession::with_seed(no_countdown(), "Ana", 5).unwrap();
    let controls = DriverControls::accelerate();

    session.update(5.0, &controls);
    let max_dt = session.config().race.max_frame_dt as f64;
    assert!((session.state().elapsed - max_dt).abs() < 1e-6);

    let elapsed = session.state().elapsed;
    session.update(f32::NAN, &controls);
    session.update(-1.0, &controls);
    assert_eq!(session.state().elapsed, elapsed);
}

/// Test that the same seed replays the same race
#[test]
fn test_seeded_races_repeat() {
    let mut a = GameSession::with_seed(no_countdown(), "Ana", 99).unwrap();
    let mut b = GameSession::with_seed(no_countdown(), "Ana", 99).unwrap();
    let ra = race_to_finish(&mut a);
    let rb = race_to_finish(&mut b);
    assert_eq!(ra, rb);
}

/// Test that reset goes back to the start line
#[test]
fn test_reset() {
    let mut session = GameSession::with_seed(GameConfig::default(), "Ana", 4).unwrap();
    for _ in 0..300 {
        session.update(FRAME, &DriverControls::accelerate());
    }
    assert!(session.state().player.distance > 0.0);

    assert!(session.state().rival.vehicle.distance > 0.0);

    session.reset();
    assert_eq!(session.phase(), RacePhase::Countdown);
    assert_eq!(session.state().player.distance, 0.0);
    assert_eq!(session.state().player.name, "Ana");
    assert_eq!(session.state().rival.vehicle.distance, 0.0);
    assert_eq!(session.state().player_progress.laps(), 0);
    assert!(session.state().obstacles.obstacles().is_empty());
    assert!(session.state().collectibles.active().is_none());
    assert!(session.state().collectibles.pending_delay().is_none());
    assert_eq!(session.state().elapsed, 0.0);
    assert!(session.result().is_none());
    assert_eq!(session.hud().countdown, Some(3));

    for _ in 0..100 {
        session.update(FRAME, &DriverControls::accelerate());
    }
    assert_eq!(session.phase(), RacePhase::Racing);
    assert!(session.state().player.distance > 0.0);
}

/// Test that a session built from out-of-range tuning keeps running
#[test]
fn test_unchecked_tuning_does_not_panic() {
    let mut config = no_countdown();
    config.physics.road_limit = -0.5;
    config.race.max_frame_dt = -0.1;
    let mut session = GameSession::with_seed(config, "Ana", 6).unwrap();
    for _ in 0..50 {
        session.update(FRAME, &DriverControls::accelerate());
    }
    assert_eq!(session.state().elapsed, 0.0);

    let mut config = no_countdown();
    config.race.max_frame_dt = f32::NAN;
    config.physics.road_limit = f32::NAN;
    let mut session = GameSession::with_seed(config, "Ana", 6).unwrap();
    let controls = DriverControls {
        steer: 1.0,
        ..DriverControls::accelerate()
    };
    for _ in 0..50 {
        session.update(FRAME, &controls);
    }
    assert!(!session.state().player.lateral.is_nan());
}

/// Test that a lane full of pickups keeps boosting the player
#[test]
fn test_boost_pickups_collected() {
    let mut config = no_countdown();
    config.collectibles.spawn_min_secs = 0.5;
    config.collectibles.spawn_max_secs = 0.5;
    config.collectibles.spawn_spread = 0.0;
    config.obstacles.base_rate = 0.0;
    let mut session = GameSession::with_seed(config, "Ana", 8).unwrap();

    let mut boosted = false;
    for _ in 0..2000 {
        let events = session.update(FRAME, &DriverControls::accelerate());
        if events.contains(&SessionEvent::BoostCollected) {
            boosted = true;
            break;
        }
    }
    assert!(boosted);
    assert!(session.state().player.is_boosting());
    assert!(session.state().player.speed > 14.0);
    assert!(session.hud().boost_remaining.is_some());
}

/// Test that lap records from a race reach the saved profile
#[test]
fn test_lap_records_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("save.toml");
    let mut profile = ProfileStore::open(&path);
    let name = profile.remember_player("  Ana ");

    let mut session = GameSession::with_seed(no_countdown(), &name, 12).unwrap();
    for event in race_to_finish(&mut session) {
        if let SessionEvent::LapCompleted {
            racer: Racer::Player,
            lap_time,
            ..
        } = event
        {
            profile.record_lap(lap_time);
        }
    }
    profile.save().unwrap();

    let best = session.result().and_then(|r| r.best_lap);
    let reopened = ProfileStore::open(&path);
    assert_eq!(reopened.last_player(), Some("Ana"));
    assert_eq!(reopened.best_lap(), best);
}

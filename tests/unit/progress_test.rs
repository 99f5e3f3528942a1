//! Tests for sector and lap tracking

use freegear::racing::{ProgressEvent, RacePhase, RaceProgress};
use freegear::storage::config::default_sectors;
use freegear::world::Track;

fn stock_track() -> Track {
    Track::from_config(&default_sectors()).unwrap()
}

fn started(laps: u32) -> RaceProgress {
    let mut progress = RaceProgress::new(laps);
    progress.start(0.0);
    progress
}

/// Test the stock circuit length
#[test]
fn test_stock_track_length() {
    let track = stock_track();
    assert_eq!(track.len(), 6);
    assert_eq!(track.total_length(), 8700.0);
}

/// Test that the race ends exactly at twice the lap length
#[test]
fn test_two_laps_finish_exactly_at_total() {
    let track = stock_track();
    let mut progress = started(2);

    progress.advance(&track, 17_399.999, 60.0);
    assert!(!progress.is_finished());
    assert_eq!(progress.laps(), 1);

    let events = progress.advance(&track, 17_400.0, 61.0);
    assert!(progress.is_finished());
    assert_eq!(progress.phase(), RacePhase::RaceFinished);
    assert_eq!(progress.finish_time(), Some(61.0));
    assert!(events.contains(&ProgressEvent::Finished { time: 61.0 }));
}

/// Test that constant-speed driving counts each lap exactly once
#[test]
fn test_lap_count_under_constant_speed() {
    let track = stock_track();
    let mut progress = started(5);

    let step = 10.0;
    let mut distance = 0.0;
    let mut lap_events = 0;
    let mut sector_events = 0;
    for frame in 1..=(870 * 3) {
        distance += step;
        for event in progress.advance(&track, distance, frame as f64 * 0.1) {
            match event {
                ProgressEvent::LapCompleted { .. } => lap_events += 1,
                ProgressEvent::SectorEntered { .. } => sector_events += 1,
                ProgressEvent::Finished { .. } => panic!("race is five laps"),
            }
        }
    }

    assert_eq!(lap_events, 3);
    assert_eq!(progress.laps(), 3);
    assert_eq!(sector_events, 3 * 6);
    assert_eq!(progress.current_lap(), 4);
}

/// Test that a jump over several sectors reports each one in order
#[test]
fn test_multi_sector_jump() {
    let track = stock_track();
    let mut progress = started(2);

    let events = progress.advance(&track, 4300.0, 10.0);
    let sectors: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::SectorEntered { sector_index } => Some(*sector_index),
            _ => None,
        })
        .collect();
    assert_eq!(sectors, vec![1, 2, 3]);
    assert_eq!(progress.position().sector_index, 3);
}

/// Test that the sector offset always stays inside the sector
#[test]
fn test_offset_within_sector() {
    let track = stock_track();
    let mut distance = 0.0;
    while distance < 20_000.0 {
        let position = track.locate(distance);
        let sector = track.sector(position.sector_index);
        assert!(position.offset >= 0.0);
        assert!(position.offset < sector.length);
        distance += 37.3;
    }
}

/// Test lap times are measured from the previous line crossing
#[test]
fn test_lap_times() {
    let track = stock_track();
    let mut progress = RaceProgress::new(3);
    progress.start(2.0);

    progress.advance(&track, 8700.0, 40.0);
    progress.advance(&track, 17_400.0, 75.0);

    assert_eq!(progress.lap_times(), &[38.0, 35.0]);
    assert_eq!(progress.best_lap(), Some(35.0));
    assert_eq!(progress.current_lap_time(80.0), 5.0);
}

/// Test that nothing moves after the finish
#[test]
fn test_frozen_after_finish() {
    let track = stock_track();
    let mut progress = started(1);
    progress.advance(&track, 8700.0, 30.0);
    assert!(progress.is_finished());

    assert!(progress.advance(&track, 10_000.0, 31.0).is_empty());
    assert_eq!(progress.distance(), 8700.0);
    assert_eq!(progress.laps(), 1);
}

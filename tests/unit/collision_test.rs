//! Tests for road-plane hit boxes, obstacles and pickups

use freegear::storage::config::{CollectibleSettings, ObstacleSettings};
use freegear::world::{
    CollectibleEvent, CollectibleSpawner, CollectibleState, ObstacleField, ObstacleHit, Rect, Vehicle,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Test overlapping and separated boxes
#[test]
fn test_rect_overlap() {
    let a = Rect::new(0.0, 0.0, 1.0, 1.0);
    assert!(a.overlaps(&Rect::new(0.5, 0.5, 1.0, 1.0)));
    assert!(!a.overlaps(&Rect::new(1.5, 0.0, 1.0, 1.0)));
    assert!(!a.overlaps(&Rect::new(0.0, -3.0, 1.0, 1.0)));
}

/// Test that touching edges count as a hit
#[test]
fn test_rect_touching_edges() {
    let a = Rect::new(0.0, 0.0, 1.0, 1.0);
    let b = Rect::new(1.0, 0.0, 1.0, 1.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

/// Test that overlap is symmetric and containment counts
#[test]
fn test_rect_containment() {
    let outer = Rect::new(-2.0, -2.0, 4.0, 4.0);
    let inner = Rect::new(-0.5, -0.5, 1.0, 1.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

/// Test that inset shrinks around the centre and never goes negative
#[test]
fn test_rect_inset() {
    let rect = Rect::new(0.0, 0.0, 1.0, 20.0);
    let inset = rect.inset(0.1, 4.0);
    assert!((inset.w - 0.8).abs() < 1e-6);
    assert!((inset.h - 12.0).abs() < 1e-6);
    assert!((inset.center().0 - 0.5).abs() < 1e-6);
    assert!((inset.center().1 - 10.0).abs() < 1e-6);

    let collapsed = rect.inset(5.0, 50.0);
    assert_eq!(collapsed.w, 0.0);
    assert_eq!(collapsed.h, 0.0);
}

/// Test the vehicle hit box sits on its lateral offset
#[test]
fn test_vehicle_bounds() {
    let car = Vehicle::new("Ana", 0.5, 0.0);
    let bounds = car.bounds(12.0, 0.24, 24.0);
    assert!((bounds.center().0 - 0.5).abs() < 1e-6);
    assert_eq!(bounds.y, 12.0);
    assert_eq!(bounds.h, 24.0);
}

/// Test that an obstacle in the player's lane hits only the player
#[test]
fn test_obstacle_hits_player_before_rival() {
    let settings = ObstacleSettings {
        spawn_spread: 0.0,
        ..Default::default()
    };
    let mut field = ObstacleField::new(settings, 18.0);
    let mut rng = StdRng::seed_from_u64(11);
    field.spawn(&mut rng);

    let player = Rect::new(-0.12, 590.0, 0.24, 24.0);
    let rival = Rect::new(-0.12, 595.0, 0.24, 24.0);
    let hits = field.resolve_collisions(&player, Some(&rival), 0.1, &mut rng);

    assert_eq!(hits.len(), 1);
    assert!(matches!(hits[0], ObstacleHit::Player { .. }));
    assert!(field.obstacles().is_empty());
}

/// Test that an obstacle out of reach is left alone
#[test]
fn test_obstacle_miss() {
    let settings = ObstacleSettings {
        spawn_spread: 0.0,
        ..Default::default()
    };
    let mut field = ObstacleField::new(settings, 18.0);
    let mut rng = StdRng::seed_from_u64(11);
    field.spawn(&mut rng);

    let player = Rect::new(0.6, 590.0, 0.24, 24.0);
    assert!(field.resolve_collisions(&player, None, 0.1, &mut rng).is_empty());
    assert_eq!(field.obstacles().len(), 1);
}

/// Test that a pickup driven straight into is collected and the next one is
/// scheduled
#[test]
fn test_pickup_collected_in_lane() {
    let settings = CollectibleSettings {
        spawn_spread: 0.0,
        ..Default::default()
    };
    let mut spawner = CollectibleSpawner::new(settings, 18.0);
    let mut rng = StdRng::seed_from_u64(2);
    let delay = spawner.schedule(&mut rng);
    let player = Rect::new(-0.12, 12.0, 0.24, 24.0);

    let spawned = spawner.update(delay + 0.01, 10.0, &player, &mut rng);
    assert_eq!(spawned, Some(CollectibleEvent::Spawned { lateral: 0.0 }));
    assert!(spawner.active().is_some());

    let mut collected = false;
    for _ in 0..600 {
        if let Some(event) = spawner.update(1.0 / 60.0, 10.0, &player, &mut rng) {
            let CollectibleEvent::Collected(pickup) = event else {
                panic!("expected a pickup, got {:?}", event);
            };
            assert_eq!(pickup.state, CollectibleState::Collected);
            collected = true;
            break;
        }
    }
    assert!(collected);
    assert!(spawner.active().is_none());
    assert!(spawner.pending_delay().is_some());
}

/// Test that a pickup on the far side of the road is missed
#[test]
fn test_pickup_missed_off_lane() {
    let mut spawner = CollectibleSpawner::new(CollectibleSettings::default(), 18.0);
    let mut rng = StdRng::seed_from_u64(2);
    let delay = spawner.schedule(&mut rng);
    let player = Rect::new(4.0, 12.0, 0.24, 24.0);

    spawner.update(delay + 0.01, 10.0, &player, &mut rng);
    let mut missed = false;
    for _ in 0..600 {
        if let Some(event) = spawner.update(1.0 / 60.0, 10.0, &player, &mut rng) {
            let CollectibleEvent::Expired(pickup) = event else {
                panic!("expected a miss, got {:?}", event);
            };
            assert_eq!(pickup.state, CollectibleState::Expired);
            missed = true;
            break;
        }
    }
    assert!(missed);
    assert!(spawner.pending_delay().is_some());
}

/// Test that cancelling clears the pending spawn
#[test]
fn test_pickup_cancel() {
    let mut spawner = CollectibleSpawner::new(CollectibleSettings::default(), 18.0);
    let mut rng = StdRng::seed_from_u64(2);
    spawner.schedule(&mut rng);
    spawner.cancel();
    assert!(spawner.pending_delay().is_none());

    let player = Rect::new(0.0, 12.0, 0.24, 24.0);
    assert_eq!(spawner.update(100.0, 10.0, &player, &mut rng), None);
}

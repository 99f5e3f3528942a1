//! Tests for the pseudo-3D projection

use freegear::storage::config::RenderSettings;
use freegear::world::{Projection, RoadPart};

fn projection() -> Projection {
    Projection::from_settings(&RenderSettings::default(), 1024.0, 768.0)
}

/// Test that scale shrinks as depth grows
#[test]
fn test_scale_is_monotonic() {
    let projection = projection();
    let mut previous = projection.scale(0.0);
    assert_eq!(previous, 1.0);

    let mut depth = 5.0;
    while depth < 2000.0 {
        let scale = projection.scale(depth);
        assert!(scale < previous);
        assert!(scale > 0.0);
        previous = scale;
        depth += 5.0;
    }
}

/// Test that the projection constant is the half-size depth
#[test]
fn test_half_scale_at_projection_constant() {
    let projection = projection();
    assert!((projection.scale(150.0) - 0.5).abs() < 1e-6);
}

/// Test that points behind the camera clamp to full size
#[test]
fn test_negative_depth_clamps() {
    let projection = projection();
    assert_eq!(projection.scale(-40.0), 1.0);
}

/// Test that far points converge on the horizon
#[test]
fn test_far_points_approach_horizon() {
    let projection = projection();
    let horizon = projection.viewport.horizon();
    let near = projection.project(0.0, 0.0, 0.0);
    let far = projection.project(0.0, 100_000.0, 0.0);

    assert!((near.y - 768.0).abs() < 1e-3);
    assert!(far.y > horizon);
    assert!(far.y - horizon < 2.0);
}

/// Test that a straight road is centred and symmetric
#[test]
fn test_straight_road_symmetry() {
    let projection = projection();
    let left = projection.project(-1.0, 200.0, 0.0);
    let right = projection.project(1.0, 200.0, 0.0);
    assert!(((left.x + right.x) / 2.0 - 512.0).abs() < 1e-3);
    assert!((left.y - right.y).abs() < 1e-6);
}

/// Test that curves bend the distance, not the foreground
#[test]
fn test_curve_offsets_far_points_more() {
    let projection = projection();
    let near_shift = projection.project(0.0, 10.0, 0.5).x - projection.project(0.0, 10.0, 0.0).x;
    let far_shift = projection.project(0.0, 500.0, 0.5).x - projection.project(0.0, 500.0, 0.0).x;
    assert!(near_shift >= 0.0);
    assert!(far_shift > near_shift);
}

/// Test sprite sizes follow the scale
#[test]
fn test_sprite_size() {
    let projection = projection();
    let (w, h) = projection.sprite_size(100.0, 140.0, 150.0);
    assert!((w - 50.0).abs() < 1e-3);
    assert!((h - 70.0).abs() < 1e-3);
}

/// Test road slice contents for straight and curved sectors
#[test]
fn test_road_slices() {
    let projection = projection();

    let straight = projection.road_slices(28, 600.0, 0.0);
    let surfaces = straight.iter().filter(|p| p.part == RoadPart::Surface).count();
    let rumbles = straight.iter().filter(|p| p.part == RoadPart::Rumble).count();
    let markings = straight.iter().filter(|p| p.part == RoadPart::Marking).count();
    assert_eq!(surfaces, 28);
    assert_eq!(rumbles, 56);
    assert_eq!(markings, 7);
    assert!(straight.iter().all(|p| p.part != RoadPart::Chevron));

    let curved = projection.road_slices(28, 600.0, -0.6);
    assert!(curved.iter().any(|p| p.part == RoadPart::Chevron));
}

/// Test that slices are painted from the horizon toward the camera
#[test]
fn test_slices_far_to_near() {
    let projection = projection();
    let surfaces: Vec<f32> = projection
        .road_slices(10, 600.0, 0.0)
        .iter()
        .filter(|p| p.part == RoadPart::Surface)
        .map(|p| p.points[0][1])
        .collect();
    for pair in surfaces.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

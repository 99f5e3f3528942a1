//! Scene rendering against a recording surface during a live race

use freegear::input::DriverControls;
use freegear::racing::{GameSession, SessionEvent};
use freegear::render::{render_menu_backdrop, render_race, AssetCatalog, DecodedImage, DrawCommand, RecordingSurface, SpriteId};
use freegear::storage::GameConfig;
use freegear::world::Projection;

fn pixel() -> DecodedImage {
    DecodedImage {
        width: 1,
        height: 1,
        rgba: vec![255, 255, 255, 255],
    }
}

fn draw(session: &GameSession, assets: &AssetCatalog) -> RecordingSurface {
    let mut surface = RecordingSurface::new(1024.0, 768.0);
    let projection = Projection::from_settings(&session.config().render, 1024.0, 768.0);
    render_race(session, &mut surface, assets, &projection);
    surface
}

/// Test that every frame of a race starts with a clear and ends with the player
#[test]
fn test_frames_throughout_race() {
    let mut config = GameConfig::default();
    config.race.countdown_secs = 0.0;
    let mut session = GameSession::with_seed(config, "Ana", 17).unwrap();
    let assets = AssetCatalog::empty();

    for frame in 0..3000 {
        session.update(0.04, &DriverControls::accelerate());
        if frame % 50 != 0 {
            continue;
        }
        let surface = draw(&session, &assets);
        let commands = surface.commands();
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        assert_eq!(surface.texts().last().copied(), Some("PLAYER"));
        let polygons = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count();
        assert!(polygons >= 28 * 3);
        if session.is_finished() {
            break;
        }
    }
}

/// Test that the sector image replaces the plain fill and the track sits on top
#[test]
fn test_sector_background() {
    let mut config = GameConfig::default();
    config.race.countdown_secs = 0.0;
    let session = GameSession::with_seed(config, "Ana", 2).unwrap();

    let mut assets = AssetCatalog::empty();
    assets.insert(SpriteId::Track, pixel());
    let surface = draw(&session, &assets);
    assert_eq!(surface.sprites(), vec![SpriteId::Track]);
    let sector_color = session.track().sector(0).color;
    assert!(matches!(
        &surface.commands()[1],
        DrawCommand::Polygon { color, .. } if *color == sector_color
    ));

    assets.insert(SpriteId::Sector(0), pixel());
    let surface = draw(&session, &assets);
    assert_eq!(surface.sprites(), vec![SpriteId::Sector(0), SpriteId::Track]);
    match &surface.commands()[3] {
        DrawCommand::Sprite {
            sprite: SpriteId::Track,
            rect,
            opacity,
            ..
        } => {
            assert!(*opacity < 0.5);
            assert!((rect.y + rect.h - 768.0).abs() < 1e-3);
            assert!(rect.h < 768.0);
        }
        other => panic!("expected the track band, got {:?}", other),
    }
}

/// Test that the boost sprite replaces the car while boosting
#[test]
fn test_boost_sprite() {
    let mut config = GameConfig::default();
    config.race.countdown_secs = 0.0;
    config.collectibles.spawn_min_secs = 0.5;
    config.collectibles.spawn_max_secs = 0.5;
    config.collectibles.spawn_spread = 0.0;
    config.obstacles.base_rate = 0.0;
    let mut session = GameSession::with_seed(config, "Ana", 8).unwrap();

    let mut assets = AssetCatalog::empty();
    assets.insert(SpriteId::Player, pixel());
    assets.insert(SpriteId::Boost, pixel());
    assert_eq!(draw(&session, &assets).sprites(), vec![SpriteId::Player]);

    for _ in 0..2000 {
        let events = session.update(0.04, &DriverControls::accelerate());
        if events.contains(&SessionEvent::BoostCollected) {
            break;
        }
    }
    assert!(session.state().player.is_boosting());
    assert!(draw(&session, &assets).sprites().contains(&SpriteId::Boost));
}

/// Test the menu backdrop with and without the track image
#[test]
fn test_menu_backdrop() {
    let config = GameConfig::default();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    render_menu_backdrop(&mut surface, &AssetCatalog::empty(), &config);
    assert_eq!(surface.commands().len(), 1);

    let mut assets = AssetCatalog::empty();
    assets.insert(SpriteId::Track, pixel());
    let mut surface = RecordingSurface::new(800.0, 600.0);
    render_menu_backdrop(&mut surface, &assets, &config);
    assert_eq!(surface.sprites(), vec![SpriteId::Track]);
}

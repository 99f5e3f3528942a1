//! Race scene renderer.
//!
//! A pure read of the session: it never mutates race state and redraws the
//! whole frame every call. Objects are painted far-to-near.

use std::f32::consts::TAU;

use super::assets::AssetCatalog;
use super::color::Color;
use super::surface::{DrawSurface, SpriteId};
use crate::racing::session::GameSession;
use crate::storage::config::GameConfig;
use crate::world::bounds::Rect;
use crate::world::projection::Projection;

/// Points used for the placeholder pickup disc
const DISC_SEGMENTS: usize = 16;

/// Opacity of the black wash laid over a sector image
const SECTOR_SHADE: f32 = 0.2;

/// Share of the screen height covered by the track image band
const TRACK_BAND: f32 = 0.6;

const RACE_TRACK_OPACITY: f32 = 0.18;
const MENU_TRACK_OPACITY: f32 = 0.12;

/// Things drawn on the road, sorted by depth before painting
enum RoadObject {
    Obstacle { lateral: f32, depth: f32 },
    Pickup { lateral: f32, depth: f32 },
    Rival { lateral: f32, depth: f32, angle: f32 },
    Player { lateral: f32, depth: f32, angle: f32, boosting: bool },
}

impl RoadObject {
    fn depth(&self) -> f32 {
        match self {
            Self::Obstacle { depth, .. }
            | Self::Pickup { depth, .. }
            | Self::Rival { depth, .. }
            | Self::Player { depth, .. } => *depth,
        }
    }
}

fn parse_color(hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or(fallback)
}

/// Screen rect for an object standing on the road at `(x, y)`
fn standing_rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x - w / 2.0, y - h, w, h)
}

fn disc(cx: f32, cy: f32, radius: f32) -> Vec<[f32; 2]> {
    (0..DISC_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / DISC_SEGMENTS as f32 * TAU;
            [cx + radius * angle.cos(), cy + radius * angle.sin()]
        })
        .collect()
}

/// Draw one race frame
pub fn render_race<S: DrawSurface + ?Sized>(
    session: &GameSession,
    surface: &mut S,
    assets: &AssetCatalog,
    projection: &Projection,
) {
    let config = session.config();
    let render = &config.render;
    let state = session.state();
    let position = state.player_progress.position();
    let sector = session.track().sector(position.sector_index);
    let (width, height) = surface.size();
    let screen = Rect::new(0.0, 0.0, width, height);

    surface.clear(parse_color(&render.background_color, Color::BLACK));

    // Backdrop: sector image (or colour), then the faint track band
    let sector_image = SpriteId::Sector(position.sector_index);
    if assets.is_ready(sector_image) {
        surface.draw_sprite(sector_image, screen, 0.0);
        surface.draw_rect(screen, Color::BLACK.with_alpha(SECTOR_SHADE));
    } else {
        surface.draw_rect(screen, sector.color);
    }
    draw_track_band(surface, assets, RACE_TRACK_OPACITY);

    for polygon in projection.road_slices(render.road_slices, render.draw_distance, sector.curve) {
        surface.draw_polygon(&polygon.points, polygon.color);
    }

    let mut objects = Vec::new();
    for obstacle in state.obstacles.obstacles() {
        objects.push(RoadObject::Obstacle {
            lateral: obstacle.lateral,
            depth: obstacle.depth,
        });
    }
    if let Some(pickup) = state.collectibles.active() {
        objects.push(RoadObject::Pickup {
            lateral: pickup.lateral,
            depth: pickup.depth,
        });
    }
    let rival_depth = render.player_depth + state.rival_gap() as f32;
    if (0.0..=render.draw_distance).contains(&rival_depth) {
        objects.push(RoadObject::Rival {
            lateral: state.rival.vehicle.lateral,
            depth: rival_depth,
            angle: state.rival.vehicle.angle,
        });
    }
    objects.push(RoadObject::Player {
        lateral: state.player.lateral,
        depth: render.player_depth,
        angle: state.player.angle,
        boosting: state.player.is_boosting(),
    });

    // Stable sort keeps the player on top of a rival at the same depth
    objects.sort_by(|a, b| b.depth().total_cmp(&a.depth()));

    for object in &objects {
        draw_object(object, surface, assets, projection, config, sector.curve);
    }
}

fn draw_object<S: DrawSurface + ?Sized>(
    object: &RoadObject,
    surface: &mut S,
    assets: &AssetCatalog,
    projection: &Projection,
    config: &GameConfig,
    curve: f32,
) {
    let render = &config.render;
    match *object {
        RoadObject::Obstacle { lateral, depth } => {
            let point = projection.project(lateral, depth, curve);
            let (w, h) = projection.sprite_size(render.obstacle_sprite[0], render.obstacle_sprite[1], depth);
            let rect = standing_rect(point.x, point.y, w, h);
            surface.draw_rect(rect, Color::OBSTACLE_EDGE);
            surface.draw_rect(rect.inset(2.0 * point.scale, 2.0 * point.scale), Color::OBSTACLE);
        }
        RoadObject::Pickup { lateral, depth } => {
            let point = projection.project(lateral, depth, curve);
            let (w, h) = projection.sprite_size(
                render.collectible_sprite[0],
                render.collectible_sprite[1],
                depth,
            );
            let rect = standing_rect(point.x, point.y, w, h);
            if assets.is_ready(SpriteId::Collectible) {
                surface.draw_sprite(SpriteId::Collectible, rect, 0.0);
            } else {
                let (cx, cy) = rect.center();
                surface.draw_polygon(&disc(cx, cy, w.min(h) / 2.0), Color::PICKUP);
            }
        }
        RoadObject::Rival { lateral, depth, angle } => {
            draw_car(surface, assets, projection, config, curve, (lateral, depth, angle), SpriteId::Rival, Color::RIVAL, "BOT");
        }
        RoadObject::Player {
            lateral,
            depth,
            angle,
            boosting,
        } => {
            let sprite = if boosting && assets.is_ready(SpriteId::Boost) {
                SpriteId::Boost
            } else {
                SpriteId::Player
            };
            draw_car(surface, assets, projection, config, curve, (lateral, depth, angle), sprite, Color::PLAYER, "PLAYER");
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_car<S: DrawSurface + ?Sized>(
    surface: &mut S,
    assets: &AssetCatalog,
    projection: &Projection,
    config: &GameConfig,
    curve: f32,
    (lateral, depth, angle): (f32, f32, f32),
    sprite: SpriteId,
    fallback: Color,
    label: &str,
) {
    let render = &config.render;
    let point = projection.project(lateral, depth, curve);
    let (w, h) = projection.sprite_size(render.car_sprite[0], render.car_sprite[1], depth);
    let rect = standing_rect(point.x, point.y, w, h);

    if assets.is_ready(sprite) {
        surface.draw_sprite(sprite, rect, angle);
    } else {
        surface.draw_rect(rect, fallback);
        surface.draw_text(label, [rect.x + 4.0, rect.y + 4.0], 12.0 * point.scale, Color::WHITE);
    }
}

/// Faded track image along the bottom of the screen, once it has loaded
fn draw_track_band<S: DrawSurface + ?Sized>(surface: &mut S, assets: &AssetCatalog, opacity: f32) {
    if !assets.is_ready(SpriteId::Track) {
        return;
    }
    let (width, height) = surface.size();
    let band = height * TRACK_BAND;
    surface.draw_sprite_faded(SpriteId::Track, Rect::new(0.0, height - band, width, band), 0.0, opacity);
}

/// Menu background: dark fill with a faint track image once it has loaded
pub fn render_menu_backdrop<S: DrawSurface + ?Sized>(surface: &mut S, assets: &AssetCatalog, config: &GameConfig) {
    surface.clear(parse_color(&config.render.menu_color, Color::BLACK));
    draw_track_band(surface, assets, MENU_TRACK_OPACITY);
}

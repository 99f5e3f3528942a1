//! Pseudo-3D road projection.
//!
//! Maps a point on the road plane (lateral offset in half-widths, depth
//! ahead of the camera) to screen space with an inverse-distance scale. On
//! curving sectors the vanishing point slides sideways, more so the farther
//! away a point is.

use crate::render::Color;
use crate::storage::config::RenderSettings;

/// Below this magnitude a sector counts as straight
const STRAIGHT_CURVE: f32 = 0.05;
/// Rumble strip width beyond the road edge, in half-widths
const RUMBLE_WIDTH: f32 = 0.08;
/// Half-width of the dashed centre line
const MARKING_HALF_WIDTH: f32 = 0.02;

/// Screen area the road is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Horizon line as a fraction of height
    pub horizon_ratio: f32,
    /// Road half-width at depth 0 as a fraction of width
    pub road_half_width_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, settings: &RenderSettings) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            horizon_ratio: settings.horizon_ratio,
            road_half_width_ratio: settings.road_half_width_ratio,
        }
    }

    /// Horizon y in pixels
    pub fn horizon(&self) -> f32 {
        self.height * self.horizon_ratio
    }

    /// Road half-width at depth 0 in pixels
    pub fn road_half_width(&self) -> f32 {
        self.width * self.road_half_width_ratio
    }
}

/// A projected point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Size factor, 1 at the camera and shrinking toward 0 at the horizon
    pub scale: f32,
}

/// What a road polygon represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadPart {
    Surface,
    Rumble,
    Marking,
    Chevron,
}

/// One filled polygon of the road
#[derive(Debug, Clone, PartialEq)]
pub struct RoadPolygon {
    pub part: RoadPart,
    pub points: Vec<[f32; 2]>,
    pub color: Color,
}

/// Inverse-distance projection onto a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub projection_constant: f32,
    pub viewport: Viewport,
}

impl Projection {
    pub fn new(projection_constant: f32, viewport: Viewport) -> Self {
        Self {
            projection_constant: projection_constant.max(f32::EPSILON),
            viewport,
        }
    }

    pub fn from_settings(settings: &RenderSettings, width: f32, height: f32) -> Self {
        Self::new(settings.projection_constant, Viewport::new(width, height, settings))
    }

    /// Size factor at a depth: 1 at depth 0, falling monotonically toward 0
    pub fn scale(&self, depth: f32) -> f32 {
        let k = self.projection_constant;
        k / (depth.max(0.0) + k)
    }

    /// Vanishing-point x at a given scale
    fn centre_x(&self, scale: f32, curve: f32) -> f32 {
        let bend = curve * self.viewport.road_half_width() * (1.0 - scale).powi(2);
        self.viewport.width / 2.0 + bend
    }

    /// Project a road-plane point to the screen
    pub fn project(&self, lateral: f32, depth: f32, curve: f32) -> ScreenPoint {
        let scale = self.scale(depth);
        let horizon = self.viewport.horizon();
        let y = horizon + (self.viewport.height - horizon) * scale;
        let x = self.centre_x(scale, curve) + lateral * self.viewport.road_half_width() * scale;
        ScreenPoint { x, y, scale }
    }

    /// Sprite size at a depth
    pub fn sprite_size(&self, base_w: f32, base_h: f32, depth: f32) -> (f32, f32) {
        let scale = self.scale(depth);
        (base_w * scale, base_h * scale)
    }

    /// Quad spanning `[left, right]` between two depths
    fn band(&self, left: f32, right: f32, near: f32, far: f32, curve: f32) -> Vec<[f32; 2]> {
        let nl = self.project(left, near, curve);
        let nr = self.project(right, near, curve);
        let fr = self.project(right, far, curve);
        let fl = self.project(left, far, curve);
        vec![[nl.x, nl.y], [nr.x, nr.y], [fr.x, fr.y], [fl.x, fl.y]]
    }

    /// Road polygons from the horizon toward the camera, so later polygons
    /// paint over earlier ones.
    ///
    /// Every slice gets a surface and rumble strips, every 4th slice a centre
    /// dash, and curving sectors get chevrons on the outside of the bend.
    pub fn road_slices(&self, count: u32, max_depth: f32, curve: f32) -> Vec<RoadPolygon> {
        let count = count.max(1);
        let step = max_depth.max(0.0) / count as f32;
        let curving = curve.abs() > STRAIGHT_CURVE;
        let mut polygons = Vec::with_capacity(count as usize * 4);

        for i in (0..count).rev() {
            let near = step * i as f32;
            let far = near + step;

            let shade = if i % 2 == 0 { 1.0 } else { 0.92 };
            polygons.push(RoadPolygon {
                part: RoadPart::Surface,
                points: self.band(-1.0, 1.0, near, far, curve),
                color: Color::ROAD.shaded(shade),
            });

            let rumble = if i % 2 == 0 { Color::RUMBLE_RED } else { Color::WHITE };
            for (left, right) in [(-1.0 - RUMBLE_WIDTH, -1.0), (1.0, 1.0 + RUMBLE_WIDTH)] {
                polygons.push(RoadPolygon {
                    part: RoadPart::Rumble,
                    points: self.band(left, right, near, far, curve),
                    color: rumble,
                });
            }

            if i % 4 == 0 {
                polygons.push(RoadPolygon {
                    part: RoadPart::Marking,
                    points: self.band(-MARKING_HALF_WIDTH, MARKING_HALF_WIDTH, near, far, curve),
                    color: Color::MARKING,
                });
            }

            if curving && i % 6 == 3 {
                polygons.push(self.chevron(near, far, curve));
            }
        }

        polygons
    }

    /// Arrow on the outside of the bend pointing the way the road turns
    fn chevron(&self, near: f32, far: f32, curve: f32) -> RoadPolygon {
        let side = curve.signum();
        let mid = (near + far) / 2.0;
        let base = -side * 0.75;
        let tip = -side * 0.6;
        let a = self.project(base, near, curve);
        let b = self.project(tip, mid, curve);
        let c = self.project(base, far, curve);
        RoadPolygon {
            part: RoadPart::Chevron,
            points: vec![[a.x, a.y], [b.x, b.y], [c.x, c.y]],
            color: Color::PICKUP,
        }
    }
}

//! Drawing surface abstraction.
//!
//! The scene renderer only talks to [`DrawSurface`], so it runs the same on
//! the egui painter and on [`RecordingSurface`] in tests.

use super::color::Color;
use crate::world::bounds::Rect;

/// Images the renderer can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Rival,
    /// Player car while boosting
    Boost,
    /// Boost pickup
    Collectible,
    /// Generic track backdrop
    Track,
    /// Background of a sector, by index
    Sector(usize),
}

impl SpriteId {
    /// Name used in logs and texture names
    pub fn name(&self) -> String {
        match self {
            Self::Player => "player".to_string(),
            Self::Rival => "bot".to_string(),
            Self::Boost => "boost".to_string(),
            Self::Collectible => "easter".to_string(),
            Self::Track => "track".to_string(),
            Self::Sector(index) => format!("sector_{}", index),
        }
    }
}

/// Something a 2D context can draw
pub trait DrawSurface {
    /// Width and height in pixels
    fn size(&self) -> (f32, f32);

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Fill a convex polygon
    fn draw_polygon(&mut self, points: &[[f32; 2]], color: Color);

    /// Draw an image into a screen rectangle, rotated about its centre and
    /// faded by `opacity` in `[0, 1]`
    fn draw_sprite_faded(&mut self, sprite: SpriteId, rect: Rect, rotation: f32, opacity: f32);

    /// Draw an opaque image into a screen rectangle, rotated about its centre
    fn draw_sprite(&mut self, sprite: SpriteId, rect: Rect, rotation: f32) {
        self.draw_sprite_faded(sprite, rect, rotation, 1.0);
    }

    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: [f32; 2], size: f32, color: Color);

    /// Fill an axis-aligned rectangle
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.draw_polygon(&rect_points(&rect), color);
    }
}

/// Corners of a rectangle, clockwise from the top-left
pub fn rect_points(rect: &Rect) -> [[f32; 2]; 4] {
    [
        [rect.x, rect.y],
        [rect.max_x(), rect.y],
        [rect.max_x(), rect.max_y()],
        [rect.x, rect.max_y()],
    ]
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Polygon {
        points: Vec<[f32; 2]>,
        color: Color,
    },
    Sprite {
        sprite: SpriteId,
        rect: Rect,
        rotation: f32,
        opacity: f32,
    },
    Text {
        text: String,
        pos: [f32; 2],
        size: f32,
        color: Color,
    },
}

/// Surface that records draw calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drawn sprites, in order
    pub fn sprites(&self) -> Vec<SpriteId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }

    /// Drawn text, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_polygon(&mut self, points: &[[f32; 2]], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_sprite_faded(&mut self, sprite: SpriteId, rect: Rect, rotation: f32, opacity: f32) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            rect,
            rotation,
            opacity,
        });
    }

    fn draw_text(&mut self, text: &str, pos: [f32; 2], size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}

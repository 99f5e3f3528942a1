//! Drawing surface backed by an egui painter.
//!
//! Decoded images are uploaded to egui textures the first time they are
//! drawn and kept in a [`TextureCache`] for the life of the app.

use std::collections::HashMap;

use egui::epaint::{Mesh, Shape};
use egui::{emath::Rot2, Align2, FontId, Pos2, Stroke, TextureHandle, TextureOptions};

use super::theme::to_color32;
use crate::render::{AssetCatalog, Color, DrawSurface, SpriteId};
use crate::world::bounds::Rect;

/// Uploaded textures by sprite.
#[derive(Default)]
pub struct TextureCache {
    handles: HashMap<SpriteId, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for a sprite, uploading it from the catalog if needed.
    pub fn get_or_upload(
        &mut self,
        ctx: &egui::Context,
        sprite: SpriteId,
        assets: &AssetCatalog,
    ) -> Option<&TextureHandle> {
        if !self.handles.contains_key(&sprite) {
            let image = assets.image(sprite)?;
            let handle = ctx.load_texture(sprite.name(), image.to_color_image(), TextureOptions::LINEAR);
            self.handles.insert(sprite, handle);
        }
        self.handles.get(&sprite)
    }
}

/// Draws into a screen region through an egui painter.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    area: egui::Rect,
    textures: &'a mut TextureCache,
    assets: &'a AssetCatalog,
}

impl<'a> EguiSurface<'a> {
    pub fn new(
        painter: &'a egui::Painter,
        area: egui::Rect,
        textures: &'a mut TextureCache,
        assets: &'a AssetCatalog,
    ) -> Self {
        Self {
            painter,
            area,
            textures,
            assets,
        }
    }

    fn to_screen(&self, point: [f32; 2]) -> Pos2 {
        Pos2::new(self.area.min.x + point[0], self.area.min.y + point[1])
    }

    fn to_screen_rect(&self, rect: &Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.to_screen([rect.x, rect.y]),
            egui::vec2(rect.w, rect.h),
        )
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.area.width(), self.area.height())
    }

    fn clear(&mut self, color: Color) {
        self.painter.rect_filled(self.area, 0.0, to_color32(color));
    }

    fn draw_polygon(&mut self, points: &[[f32; 2]], color: Color) {
        if points.len() < 3 {
            return;
        }
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::convex_polygon(points, to_color32(color), Stroke::NONE));
    }

    fn draw_sprite_faded(&mut self, sprite: SpriteId, rect: Rect, rotation: f32, opacity: f32) {
        let screen_rect = self.to_screen_rect(&rect);
        let ctx = self.painter.ctx().clone();
        let Some(texture) = self.textures.get_or_upload(&ctx, sprite, self.assets) else {
            return;
        };

        let mut mesh = Mesh::with_texture(texture.id());
        let uv = egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        let tint = egui::Color32::WHITE.gamma_multiply(opacity.clamp(0.0, 1.0));
        mesh.add_rect_with_uv(screen_rect, uv, tint);
        if rotation != 0.0 {
            mesh.rotate(Rot2::from_angle(rotation), screen_rect.center());
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn draw_text(&mut self, text: &str, pos: [f32; 2], size: f32, color: Color) {
        self.painter.text(
            self.to_screen(pos),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(size.max(1.0)),
            to_color32(color),
        );
    }
}

//! RGBA colour used by the renderer and track themes.

use std::fmt;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Asphalt
    pub const ROAD: Color = Color::rgb(0x2b, 0x2b, 0x2b);
    /// Centre dashes and chevrons
    pub const MARKING: Color = Color::rgb(0xf2, 0xf2, 0xf2);
    pub const RUMBLE_RED: Color = Color::rgb(0xc8, 0x32, 0x32);
    pub const OBSTACLE: Color = Color::rgb(0x2a, 0x2a, 0x2a);
    pub const OBSTACLE_EDGE: Color = Color::rgb(0x11, 0x11, 0x11);
    pub const PICKUP: Color = Color::rgb(0xff, 0xcc, 0x00);
    pub const PLAYER: Color = Color::rgb(0xff, 0x3b, 0x3b);
    pub const RIVAL: Color = Color::rgb(0x4a, 0x90, 0xe2);

    /// Opaque colour from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour from components with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a new alpha, `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Darken (`factor < 1`) or brighten the RGB channels.
    pub fn shaded(self, factor: f32) -> Self {
        let channel = |c: u8| (c as f32 * factor.max(0.0)).round().min(255.0) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

//! Axis-aligned boxes on the road plane.
//!
//! `x` runs across the road in half-width units, `y` runs along it in depth
//! units measured from the camera.

/// Axis-aligned rectangle anchored at its minimum corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centred on a point
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        (self.x <= other.max_x() && self.max_x() >= other.x)
            && (self.y <= other.max_y() && self.max_y() >= other.y)
    }

    /// Shrink every side by the given margins, collapsing to the centre
    /// instead of going negative
    pub fn inset(&self, margin_x: f32, margin_y: f32) -> Rect {
        let (cx, cy) = self.center();
        let w = (self.w - 2.0 * margin_x).max(0.0);
        let h = (self.h - 2.0 * margin_y).max(0.0);
        Rect::centered(cx, cy, w, h)
    }
}

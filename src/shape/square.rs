use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::Shape;
use crate::surface::DrawSurface;

/// Filled square stamped at a fixed position, anchored at its top-left
/// corner. Geometry is immutable after creation; only the color can change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Square {
    top_left: Pos2,
    side: f32,
    color: Color32,
}

impl Square {
    pub fn new(top_left: Pos2, side: f32, color: Color32) -> Self {
        Self {
            top_left,
            side,
            color,
        }
    }

    pub fn top_left(&self) -> Pos2 {
        self.top_left
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.top_left, Vec2::splat(self.side))
    }
}

impl Shape for Square {
    fn kind(&self) -> &'static str {
        "square"
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.filled_rect(self.rect(), self.color);
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn color(&self) -> Color32 {
        self.color
    }
}

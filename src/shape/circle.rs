use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use super::Shape;
use crate::surface::DrawSurface;

/// Filled circle stamped at a fixed position. Geometry is immutable after
/// creation; only the color can change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Circle {
    center: Pos2,
    radius: f32,
    color: Color32,
}

impl Circle {
    pub fn new(center: Pos2, radius: f32, color: Color32) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.filled_circle(self.center, self.radius, self.color);
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn color(&self) -> Color32 {
        self.color
    }
}

use egui::Color32;

mod circle;
mod freehand;
mod square;

pub use circle::Circle;
pub use freehand::FreehandLine;
pub use square::Square;

use crate::surface::DrawSurface;

/// Common trait that all drawable shapes implement.
pub trait Shape {
    /// Get the shape kind as a string, used for logging and tests.
    fn kind(&self) -> &'static str;

    /// Draw the shape's current geometry and color onto the surface.
    fn draw(&self, surface: &mut dyn DrawSurface);

    /// Replace the stored color unconditionally.
    fn set_color(&mut self, color: Color32);

    /// Get the current color.
    fn color(&self) -> Color32;
}

/// Enumeration of all shape variants in a document.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum ShapeType {
    Circle(Circle),
    Square(Square),
    Freehand(FreehandLine),
}

impl Shape for ShapeType {
    fn kind(&self) -> &'static str {
        match self {
            ShapeType::Circle(c) => c.kind(),
            ShapeType::Square(s) => s.kind(),
            ShapeType::Freehand(l) => l.kind(),
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        match self {
            ShapeType::Circle(c) => c.draw(surface),
            ShapeType::Square(s) => s.draw(surface),
            ShapeType::Freehand(l) => l.draw(surface),
        }
    }

    fn set_color(&mut self, color: Color32) {
        match self {
            ShapeType::Circle(c) => c.set_color(color),
            ShapeType::Square(s) => s.set_color(color),
            ShapeType::Freehand(l) => l.set_color(color),
        }
    }

    fn color(&self) -> Color32 {
        match self {
            ShapeType::Circle(c) => c.color(),
            ShapeType::Square(s) => s.color(),
            ShapeType::Freehand(l) => l.color(),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use egui::Pos2;

    /// Create a new circle stamp
    pub fn create_circle(center: Pos2, radius: f32, color: Color32) -> ShapeType {
        ShapeType::Circle(Circle::new(center, radius, color))
    }

    /// Create a new square stamp
    pub fn create_square(top_left: Pos2, side: f32, color: Color32) -> ShapeType {
        ShapeType::Square(Square::new(top_left, side, color))
    }
}

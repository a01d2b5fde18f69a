use egui::{Color32, Pos2};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::Shape;
use crate::surface::DrawSurface;

/// Freehand polyline built up point by point while the pointer is held down.
///
/// The canvas grows the line through `push_point` for the duration of one
/// gesture; committing it moves the value into the document, after which
/// nothing holds a mutable handle to it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FreehandLine {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    rainbow: bool,
}

impl FreehandLine {
    pub fn new(color: Color32, width: f32, rainbow: bool) -> Self {
        Self {
            points: Vec::new(),
            color,
            width,
            rainbow,
        }
    }

    /// Append a point to the end of the line.
    pub fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_rainbow(&self) -> bool {
        self.rainbow
    }

    /// Re-roll the stroke color from `rng` while the rainbow flag is set;
    /// no effect otherwise.
    ///
    /// The whole line takes the new color, so the stroke flickers through
    /// colors as it is drawn and keeps the last rolled color once committed.
    pub fn advance_rainbow_color(&mut self, rng: &mut dyn RngCore) {
        if !self.rainbow {
            return;
        }
        let mut rgb = [0u8; 3];
        rng.fill_bytes(&mut rgb);
        self.color = Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
    }
}

impl Shape for FreehandLine {
    fn kind(&self) -> &'static str {
        "freehand"
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        // A single point has no extent: the line only becomes visible once
        // a second point arrives.
        if self.points.len() < 2 {
            return;
        }
        surface.polyline(&self.points, self.width, self.color);
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn color(&self) -> Color32 {
        self.color
    }
}

use egui::{Color32, Pos2, Rect, Stroke as EguiStroke};

/// Minimal drawing interface the shape model renders through.
///
/// The model layer never touches egui directly; tests implement this trait
/// with a recording mock to observe draw calls without a windowing context.
pub trait DrawSurface {
    /// Fill a circle of `radius` around `center`.
    fn filled_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Fill an axis-aligned rectangle.
    fn filled_rect(&mut self, rect: Rect, color: Color32);

    /// Stroke a connected polyline through `points`.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);
}

/// Production surface backed by an egui painter.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn filled_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius, color);
    }

    fn filled_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.painter.add(egui::Shape::line(
            points.to_vec(),
            EguiStroke::new(width, color),
        ));
    }
}

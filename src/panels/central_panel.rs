use crate::canvas::BACKGROUND_COLOR;
use crate::surface::PainterSurface;
use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Create a painting area that fills the remaining space
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_input(ctx, canvas_rect);

        // Render the canvas
        painter.rect_filled(canvas_rect, 0.0, BACKGROUND_COLOR);
        let mut surface = PainterSurface::new(&painter);
        app.canvas().render(&mut surface);
    });
}
